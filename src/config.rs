//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`DIAL_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use dialkit_core::Theme;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Clock face configuration
    #[serde(default)]
    pub clock: ClockConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clock: ClockConfig::default(),
            rendering: RenderingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`DIAL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // DIAL_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("DIAL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dialkit".to_string(),
            width: 480,
            height: 480,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Clock face configuration
///
/// Colors are `#rrggbb` or `#rrggbbaa` strings; a value that fails to
/// parse falls back to that slot's built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Dial border, hands, center dot, and numerals
    pub primary_color: String,
    /// Background
    pub secondary_color: String,
    /// Tick marks
    pub tertiary_color: String,
    /// Delay between redraws in milliseconds
    pub refresh_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            primary_color: "#444444".to_string(),
            secondary_color: "#ffffff".to_string(),
            tertiary_color: "#888888".to_string(),
            refresh_ms: 1000,
        }
    }
}

impl ClockConfig {
    /// Resolve the configured color strings into a theme
    pub fn theme(&self) -> Theme {
        Theme::from_strings(
            &self.primary_color,
            &self.secondary_color,
            &self.tertiary_color,
        )
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// MSAA sample count (1 disables multisampling)
    pub sample_count: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self { sample_count: 4 }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_core::{Color, DEFAULT_PRIMARY};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 480);
        assert_eq!(config.clock.refresh_ms, 1000);
        assert_eq!(config.rendering.sample_count, 4);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("refresh_ms"));
        assert!(toml.contains("primary_color"));
    }

    #[test]
    fn test_default_theme_resolves() {
        let theme = ClockConfig::default().theme();
        assert_eq!(theme.primary, Color::from_rgb8(0x44, 0x44, 0x44));
        assert_eq!(theme.secondary, Color::WHITE);
    }

    #[test]
    fn test_malformed_color_falls_back() {
        let clock = ClockConfig {
            primary_color: "not-a-color".to_string(),
            ..ClockConfig::default()
        };
        assert_eq!(clock.theme().primary, DEFAULT_PRIMARY);
    }
}
