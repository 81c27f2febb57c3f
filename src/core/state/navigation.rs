use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::navigation::NavigationMsg},
    presentation::config::Mode,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Tab {
    #[default]
    Compression,
    Cost,
    #[strum(to_string = "Rate limits")]
    RateLimit,
}

impl Tab {
    pub fn index(self) -> usize {
        Tab::iter().position(|tab| tab == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }

    /// Key binding scope while this tab is shown
    pub fn mode(self) -> Mode {
        match self {
            Tab::Compression => Mode::Compression,
            Tab::Cost => Mode::Cost,
            Tab::RateLimit => Mode::RateLimit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Tab,
}

impl NavigationState {
    pub fn new(current: Tab) -> Self {
        Self { current }
    }

    pub fn update(&mut self, msg: NavigationMsg) -> Vec<Cmd> {
        self.current = match msg {
            NavigationMsg::NextTab => self.current.next(),
            NavigationMsg::PreviousTab => self.current.previous(),
            NavigationMsg::Show(tab) => tab,
        };
        vec![]
    }
}
