use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::reveal::ReplayPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Content document (TOML). Bundled content is used when unset.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            content_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Page scroll (in rows) after which the back-to-top hint appears
    #[serde(default = "default_back_to_top_rows")]
    pub back_to_top_rows: u16,
    /// Show the preloader screen on startup
    #[serde(default = "default_true")]
    pub preloader: bool,
    /// Smooth page scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Color theme
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            back_to_top_rows: default_back_to_top_rows(),
            preloader: default_true(),
            scroll: ScrollConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme selection: a built-in theme name plus optional color overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
    #[serde(default)]
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

/// Hex colors (`#RRGGBB` or `#RGB`) replacing theme entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg0: Option<String>,
    pub fg0: Option<String>,
    pub accent: Option<String>,
    pub selection: Option<String>,
    pub gradient_start: Option<String>,
    pub gradient_end: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Easing curve for animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
    Power2Out,
    Power3Out,
    Power3InOut,
}

impl Default for EasingType {
    fn default() -> Self {
        EasingType::Cubic
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate page scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Rows per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Scroll-reveal animation settings shared by every section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Disable to show every section in its resting state immediately
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Multiplier applied to every duration and stagger (2.0 = twice as slow)
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Viewport fraction the element top must reach to trigger (0.8 = 80% down)
    #[serde(default = "default_entry_fraction")]
    pub entry_fraction: f64,
    /// Viewport fraction the element bottom must pass to count as left
    #[serde(default = "default_exit_fraction")]
    pub exit_fraction: f64,
    #[serde(default)]
    pub replay: ReplayPolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            speed: default_speed(),
            entry_fraction: default_entry_fraction(),
            exit_fraction: default_exit_fraction(),
            replay: ReplayPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Total counter animation time in milliseconds
    #[serde(default = "default_counter_duration")]
    pub duration_ms: u64,
    /// Number of increments
    #[serde(default = "default_counter_steps")]
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration(),
            steps: default_counter_steps(),
        }
    }
}

/// Which contact endpoint implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// Pretend to send after a fixed delay
    Simulated,
    /// POST the message as JSON to `contact.url`
    Http,
}

impl Default for EndpointKind {
    fn default() -> Self {
        EndpointKind::Simulated
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub endpoint: EndpointKind,
    /// Target URL for the http endpoint
    #[serde(default)]
    pub url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Seconds before a success/error banner reverts to idle
    #[serde(default = "default_status_reset")]
    pub status_reset_secs: u64,
    /// Delay of the simulated endpoint in milliseconds
    #[serde(default = "default_simulated_delay")]
    pub simulated_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointKind::default(),
            url: None,
            timeout_secs: default_timeout(),
            status_reset_secs: default_status_reset(),
            simulated_delay_ms: default_simulated_delay(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showcase")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_back_to_top_rows() -> u16 {
    15 // ~300px at 20px per row
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

/// Slowest accepted animation multiplier
pub const MAX_ANIMATION_SPEED: f64 = 10.0;

fn default_speed() -> f64 {
    1.0
}

fn default_entry_fraction() -> f64 {
    0.8
}

fn default_exit_fraction() -> f64 {
    0.2
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_counter_steps() -> u32 {
    60
}

fn default_timeout() -> u64 {
    30
}

fn default_status_reset() -> u64 {
    5
}

fn default_simulated_delay() -> u64 {
    2000
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Reject values the animation and contact layers cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let fractions = [
            ("animation.entry_fraction", self.animation.entry_fraction),
            ("animation.exit_fraction", self.animation.exit_fraction),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(crate::Error::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        let speed = self.animation.speed;
        if !speed.is_finite() || speed <= 0.0 || speed > MAX_ANIMATION_SPEED {
            return Err(crate::Error::Config(format!(
                "animation.speed must be within (0, {}], got {}",
                MAX_ANIMATION_SPEED, speed
            )));
        }
        if self.counter.steps == 0 {
            return Err(crate::Error::Config("counter.steps must be at least 1".into()));
        }
        if self.contact.endpoint == EndpointKind::Http {
            let url = self.contact.url.as_deref().ok_or_else(|| {
                crate::Error::Config("contact.url is required for the http endpoint".into())
            })?;
            url::Url::parse(url)
                .map_err(|e| crate::Error::Config(format!("contact.url: {}", e)))?;
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/showcase/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showcase")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI owns stdout
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("showcase.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the configured content document path (with tilde expansion)
    pub fn content_path(&self) -> Option<PathBuf> {
        self.general.content_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.counter.steps, 60);
        assert_eq!(config.contact.endpoint, EndpointKind::Simulated);
        assert_eq!(config.contact.status_reset_secs, 5);
        assert!((config.animation.entry_fraction - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.animation.replay, ReplayPolicy::ReverseOnExit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.scroll]
            easing = "power3-out"
            smooth_enabled = false

            [animation]
            replay = "once"
            speed = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.scroll.easing, EasingType::Power3Out);
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_fps, 60);
        assert_eq!(config.animation.replay, ReplayPolicy::Once);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
    }

    #[test]
    fn test_theme_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "nord"

            [ui.theme.colors]
            accent = "#ff5500"
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff5500"));
        assert!(config.ui.theme.colors.bg0.is_none());
    }

    #[test]
    fn test_http_endpoint_requires_url() {
        let mut config = AppConfig::default();
        config.contact.endpoint = EndpointKind::Http;
        assert!(config.validate().is_err());

        config.contact.url = Some("not a url".into());
        assert!(config.validate().is_err());

        config.contact.url = Some("https://forms.example.com/submit".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fraction_bounds() {
        let mut config = AppConfig::default();
        config.animation.entry_fraction = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_speed_must_be_finite_and_bounded() {
        let config: AppConfig = toml::from_str("[animation]\nspeed = inf").unwrap();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        for speed in [f64::NAN, 0.0, -1.0, 1e20] {
            config.animation.speed = speed;
            assert!(config.validate().is_err(), "{}", speed);
        }
        config.animation.speed = MAX_ANIMATION_SPEED;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_rejects_infinite_speed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[animation]\nspeed = inf\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_to_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.animation.speed = 1.5;
        config.ui.theme.name = "nord".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!((loaded.animation.speed - 1.5).abs() < f64::EPSILON);
        assert_eq!(loaded.ui.theme.name, "nord");
        assert_eq!(loaded.counter.steps, config.counter.steps);
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        let path = std::path::Path::new("/tmp/showcase");
        assert_eq!(expand_tilde(path), PathBuf::from("/tmp/showcase"));
    }
}
