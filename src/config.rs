use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Menu colors for hosts that want them user-configurable, as `#rrggbb`
/// strings in a small TOML file. Missing file, unreadable file, or bad TOML
/// all fall back to the defaults; a popup menu is not worth failing startup
/// over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub foreground: String,
    pub background: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            foreground: "#d8dee9".to_string(),
            background: "#2e3440".to_string(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub fn foreground_color(&self) -> Color {
        parse_hex_color(&self.foreground).unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background).unwrap_or(Color::Reset)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tui-context-menu");
        path.push("config.toml");
        path
    })
}

#[must_use]
pub fn load_config() -> UiConfig {
    get_config_path()
        .map(|path| load_config_from(&path))
        .unwrap_or_default()
}

#[must_use]
pub fn load_config_from(path: &Path) -> UiConfig {
    if path.exists() {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(config) = toml::from_str::<UiConfig>(&content) {
                return config;
            }
        }
    }
    UiConfig::default()
}

/// Parses `#rrggbb` (case-insensitive) into an RGB color.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
