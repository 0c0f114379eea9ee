//! Page configuration.
//!
//! [`PageConfig`] carries every tunable of the page enhancements. The server
//! resolves it with `Config::from_env()` (after `dotenvy::dotenv()`) and embeds
//! it into the document, the client reads it back with [`PageConfig::from_json`].

use serde::{Deserialize, Serialize};

/// Element id of the `<script type="application/json">` holding the page config
pub const PAGE_CONFIG_ELEMENT_ID: &str = "page-config";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read page config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for navigation, animations, particles, parallax and the contact form.
///
/// Every field has a default so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Scroll offset past which the navbar switches to its scrolled look
    pub scroll_threshold: f64,
    /// Viewports at or below this width are treated as mobile
    pub mobile_breakpoint: f64,
    /// Fixed header height subtracted from smooth-scroll targets
    pub header_offset: f64,

    /// Use the Web Animations path when the browser supports it
    pub enhanced_animations: bool,
    /// Reveal duration in seconds
    pub reveal_duration: f64,
    pub reveal_start: String,
    pub reveal_end: String,
    pub reveal_toggle_actions: String,
    /// Visible fraction that triggers the fallback reveal
    pub fallback_threshold: f64,
    pub fallback_root_margin: String,
    /// Fallback CSS transition duration in seconds
    pub fallback_transition: f64,

    /// Render the particle background when the device allows it
    pub particles: bool,
    pub particle_count: usize,
    /// Edge length of the cube the particles are sampled in
    pub particle_extent: f32,
    pub particle_color_from: u32,
    pub particle_color_to: u32,
    pub particle_size: f32,
    pub particle_opacity: f32,
    pub camera_distance: f32,
    pub camera_smoothing: f32,
    pub pointer_influence: f32,
    pub rotation_step_x: f32,
    pub rotation_step_y: f32,
    pub max_pixel_ratio: f64,

    /// Fallback parallax speed, in pixels of offset per pixel scrolled
    pub parallax_factor: f64,

    /// Artificial delay of the simulated form submission
    pub submit_delay_ms: u32,
    pub message_lifetime_ms: u32,
    pub message_fade_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
            mobile_breakpoint: 768.0,
            header_offset: 80.0,
            enhanced_animations: true,
            reveal_duration: 1.0,
            reveal_start: "top 85%".to_string(),
            reveal_end: "bottom 20%".to_string(),
            reveal_toggle_actions: "play none none reverse".to_string(),
            fallback_threshold: 0.1,
            fallback_root_margin: "0px 0px -100px 0px".to_string(),
            fallback_transition: 0.6,
            particles: true,
            particle_count: 1000,
            particle_extent: 20.0,
            particle_color_from: 0x8B5CF6,
            particle_color_to: 0x3B82F6,
            particle_size: 0.05,
            particle_opacity: 0.6,
            camera_distance: 5.0,
            camera_smoothing: 0.05,
            pointer_influence: 0.5,
            rotation_step_x: 0.0005,
            rotation_step_y: 0.001,
            max_pixel_ratio: 2.0,
            parallax_factor: 0.5,
            submit_delay_ms: 1500,
            message_lifetime_ms: 5000,
            message_fade_ms: 300,
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for embedding into the page.
    ///
    /// `<` is escaped so the payload cannot close the surrounding script tag.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace('<', "\\u003c")
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file the page config was read from, if any
    pub page_config_path: Option<String>,
    pub page: PageConfig,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// `PAGE_CONFIG` may point at a JSON file with page tunables. A file that
    /// cannot be read or parsed is reported and the defaults are used.
    pub fn from_env() -> Self {
        let page_config_path = std::env::var("PAGE_CONFIG").ok();
        let page = match page_config_path.as_deref() {
            Some(path) => load_page_config(path).unwrap_or_else(|e| {
                tracing::warn!("{e}; using default page config");
                PageConfig::default()
            }),
            None => PageConfig::default(),
        };

        Self {
            page_config_path,
            page,
        }
    }
}

#[cfg(feature = "ssr")]
fn load_page_config(path: &str) -> Result<PageConfig, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    PageConfig::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_constants() {
        let config = PageConfig::default();
        assert_eq!(config.scroll_threshold, 100.0);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.particle_count, 1000);
        assert_eq!(config.submit_delay_ms, 1500);
        assert_eq!(config.message_lifetime_ms, 5000);
        assert!(config.enhanced_animations);
        assert!(config.particles);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = PageConfig::from_json(r#"{"particle_count": 250, "particles": false}"#)
            .expect("valid json");
        assert_eq!(config.particle_count, 250);
        assert!(!config.particles);
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.reveal_start, "top 85%");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = PageConfig::from_json("{}").expect("valid json");
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = PageConfig::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_embedded_json_round_trips_and_escapes_tags() {
        let config = PageConfig {
            reveal_end: "</script>".to_string(),
            ..PageConfig::default()
        };

        let embedded = config.to_embedded_json();
        assert!(!embedded.contains("</script>"));

        let parsed = PageConfig::from_json(&embedded).expect("embedded json parses");
        assert_eq!(parsed.reveal_end, "</script>");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_missing_config_file_is_read_error() {
        let result = load_page_config("/nonexistent/pollen/page.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
