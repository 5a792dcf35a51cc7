use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colors for the recipient line, badge and tooltip 🎨
/// Lives under `[theme]` in `config.toml`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub text: Color,
    pub overlay: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub tooltip_fg: Color,
    pub tooltip_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(205, 214, 244),
            overlay: Color::Rgb(108, 112, 134),
            badge_fg: Color::Rgb(30, 30, 46),
            badge_bg: Color::Rgb(137, 180, 250),
            tooltip_fg: Color::Rgb(240, 240, 240),
            tooltip_bg: Color::Rgb(102, 102, 102),
        }
    }
}
