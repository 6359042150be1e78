use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub visibility: VisibilityConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Page description to load instead of the built-in demo page
    #[serde(default)]
    pub page_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            page_path: None,
        }
    }
}

/// Options for the viewport intersection check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityConfig {
    /// Fraction of the element that must be visible to trigger (0.0-1.0)
    #[serde(default = "default_visible_fraction")]
    pub visible_fraction: f64,
    /// Pulls the bottom edge of the trigger region upward, in pixels
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin_px: f64,
    /// Whether the host can detect visibility at all.
    /// When false, watchers never fire and counters keep their markup text.
    #[serde(default = "default_true")]
    pub supported: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            visible_fraction: default_visible_fraction(),
            bottom_margin_px: default_bottom_margin(),
            supported: default_true(),
        }
    }
}

impl VisibilityConfig {
    /// Fires as soon as any part of an element touches the viewport.
    /// Used for lazy images.
    pub fn immediate(&self) -> Self {
        Self {
            visible_fraction: 0.0,
            bottom_margin_px: 0.0,
            supported: self.supported,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Animation duration applied to every counter without a `data-duration`
    #[serde(default = "default_counter_duration")]
    pub duration_ms: u64,
    /// Targets above this value are rendered with a trailing "+"
    #[serde(default = "default_plus_threshold")]
    pub plus_threshold: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_counter_duration(),
            plus_threshold: default_plus_threshold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Scroll offset past which the navbar switches to its "scrolled" style
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold_px: f64,
    /// A section becomes active this many pixels before its top reaches the viewport
    #[serde(default = "default_section_lead")]
    pub section_lead_px: f64,
    /// Height of the fixed header kept clear when jumping to an anchor
    #[serde(default = "default_header_offset")]
    pub header_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: default_scrolled_threshold(),
            section_lead_px: default_section_lead(),
            header_offset_px: default_header_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Endpoint receiving contact form submissions
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// How long the newsletter button stays in its subscribed state
    #[serde(default = "default_newsletter_reset")]
    pub newsletter_reset_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_secs: default_timeout(),
            newsletter_reset_ms: default_newsletter_reset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Page pixels represented by one terminal row
    #[serde(default = "default_row_height")]
    pub row_height_px: f64,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            row_height_px: default_row_height(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve used by smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Pixels moved by a single line scroll
    #[serde(default = "default_scroll_step")]
    pub scroll_step_px: f64,
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
            scroll_step_px: default_scroll_step(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_visible_fraction() -> f64 {
    0.1
}

fn default_bottom_margin() -> f64 {
    100.0
}

fn default_counter_duration() -> u64 {
    2000
}

fn default_plus_threshold() -> u64 {
    1000
}

fn default_scrolled_threshold() -> f64 {
    50.0
}

fn default_section_lead() -> f64 {
    200.0
}

fn default_header_offset() -> f64 {
    100.0
}

fn default_timeout() -> u64 {
    30
}

fn default_newsletter_reset() -> u64 {
    2000
}

fn default_tick_rate() -> u64 {
    100
}

fn default_row_height() -> f64 {
    20.0
}

fn default_scroll_duration() -> u64 {
    300
}

fn default_scroll_step() -> f64 {
    40.0
}

fn default_animation_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        let config: Self = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagepulse/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagepulse")
            .join("config.toml")
    }

    /// Reject values the animation and visibility code cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let fraction = self.visibility.visible_fraction;
        if !(0.0..=1.0).contains(&fraction) {
            return Err(crate::Error::Config(format!(
                "visibility.visible_fraction must be between 0 and 1, got {}",
                fraction
            )));
        }
        if self.counter.duration_ms == 0 {
            return Err(crate::Error::Config(
                "counter.duration_ms must be greater than 0".to_string(),
            ));
        }
        if let Some(endpoint) = &self.form.endpoint {
            url::Url::parse(endpoint)?;
        }
        Ok(())
    }
}
