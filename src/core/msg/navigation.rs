use crate::core::state::navigation::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMsg {
    NextTab,
    PreviousTab,
    Show(Tab),
}
