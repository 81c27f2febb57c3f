use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer};

use super::keybindings::Mode;

/// Named styles per mode, e.g. `"highlight": "bold black on cyan"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Mode, HashMap<String, Style>>);

impl Styles {
    /// Style `name` from `mode`, then from `Global`, else the terminal default
    pub fn get_or_default(&self, mode: Mode, name: &str) -> Style {
        self.get(&mode)
            .and_then(|styles| styles.get(name))
            .or_else(|| self.get(&Mode::Global).and_then(|styles| styles.get(name)))
            .copied()
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Mode, HashMap<String, String>>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(mode, inner_map)| {
                let converted = inner_map
                    .into_iter()
                    .map(|(name, raw)| (name, parse_style(&raw)))
                    .collect();
                (mode, converted)
            })
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses `[modifiers] [fg] [on [modifiers] bg]`
///
/// Colors are names (`red`, `light blue`, `darkgray`), indexed (`color208`)
/// or hex (`#ff8800`). Modifiers are `bold`, `dim`, `italic`, `underline`
/// and `inverse`. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_ascii_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg.to_string(), Some(bg.to_string())),
        None => match lower.strip_prefix("on ") {
            Some(bg) => (String::new(), Some(bg.to_string())),
            None => (lower.clone(), None),
        },
    };

    let (fg, fg_modifiers) = parse_color_words(&foreground);
    let mut style = Style::default().add_modifier(fg_modifiers);
    if let Some(fg) = fg {
        style = style.fg(fg);
    }

    if let Some(background) = background {
        let (bg, bg_modifiers) = parse_color_words(&background);
        style = style.add_modifier(bg_modifiers);
        if let Some(bg) = bg {
            style = style.bg(bg);
        }
    }

    style
}

fn parse_color_words(s: &str) -> (Option<Color>, Modifier) {
    let mut modifiers = Modifier::empty();
    let mut light = false;
    let mut color = None;

    for word in s.split_whitespace() {
        match word {
            "bold" => modifiers |= Modifier::BOLD,
            "dim" => modifiers |= Modifier::DIM,
            "italic" => modifiers |= Modifier::ITALIC,
            "underline" => modifiers |= Modifier::UNDERLINED,
            "inverse" => modifiers |= Modifier::REVERSED,
            "light" | "bright" => light = true,
            word => {
                if let Some(parsed) = parse_color(word, light) {
                    color = Some(parsed);
                }
            }
        }
    }

    (color, modifiers)
}

fn parse_color(word: &str, light: bool) -> Option<Color> {
    if let Some(index) = word.strip_prefix("color") {
        return index.parse::<u8>().ok().map(Color::Indexed);
    }
    if let Some(hex) = word.strip_prefix('#') {
        if hex.len() == 6 {
            let value = u32::from_str_radix(hex, 16).ok()?;
            return Some(Color::from_u32(value));
        }
        return None;
    }

    let color = match (word.replace("grey", "gray").as_str(), light) {
        ("black", _) => Color::Black,
        ("red", false) => Color::Red,
        ("red", true) => Color::LightRed,
        ("green", false) => Color::Green,
        ("green", true) => Color::LightGreen,
        ("yellow", false) => Color::Yellow,
        ("yellow", true) => Color::LightYellow,
        ("blue", false) => Color::Blue,
        ("blue", true) => Color::LightBlue,
        ("magenta", false) => Color::Magenta,
        ("magenta", true) => Color::LightMagenta,
        ("cyan", false) => Color::Cyan,
        ("cyan", true) => Color::LightCyan,
        ("gray", _) => Color::Gray,
        ("darkgray", _) => Color::DarkGray,
        ("white", _) => Color::White,
        ("reset", _) => Color::Reset,
        _ => return None,
    };
    Some(color)
}
