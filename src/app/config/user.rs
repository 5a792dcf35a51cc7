use serde::{Deserialize, Serialize};

use crate::app::keys::KeyConfig;
use crate::fit::MeasureKind;
use crate::ui::Theme;

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// How recipient widths are measured: "cells" or "probe"
    #[serde(default)]
    pub measure: MeasureKind,
    /// Quiet period before a burst of resize events is applied. 0 = apply every event.
    #[serde(default)]
    pub resize_debounce_ms: u64,
    /// Columns reserved on the right for the overflow badge
    #[serde(default = "default_badge_width")]
    pub badge_width: u16,
    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub theme: Theme,
}

fn default_badge_width() -> u16 {
    6
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            measure: MeasureKind::default(),
            resize_debounce_ms: 0,
            badge_width: default_badge_width(),
            log_level: default_log_level(),
            keys: KeyConfig::default(),
            theme: Theme::default(),
        }
    }
}
