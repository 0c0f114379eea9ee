//! Capability detection for the progressive enhancements.
//!
//! The browser glue fills an [`Environment`] once at startup and every feature
//! area asks the resulting [`Capabilities`] which code path to take.

use crate::core::config::PageConfig;

/// User agent fragments that identify a mobile device
const MOBILE_SIGNATURES: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Snapshot of the hosting environment
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub viewport_width: f64,
    pub user_agent: String,
    /// The Web Animations API (`Element.animate`) is present
    pub animation_api: bool,
    /// A WebGL2 implementation is present
    pub graphics_api: bool,
}

/// Which implementation drives reveal, hover and parallax animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPath {
    Enhanced,
    Fallback,
}

/// Why the particle background is not rendered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParticlesDisabled {
    #[error("viewport is {width}px wide, particles need more than {breakpoint}px")]
    NarrowViewport { width: u32, breakpoint: u32 },
    #[error("mobile device detected")]
    MobileDevice,
    #[error("WebGL2 is not available")]
    GraphicsUnavailable,
    #[error("particles are switched off in the page config")]
    SwitchedOff,
    #[error("particle renderer failed to start: {0}")]
    RendererFailed(String),
}

/// Result of capability detection
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    pub animation: AnimationPath,
    pub particles: Result<(), ParticlesDisabled>,
}

impl Capabilities {
    pub fn detect(env: &Environment, config: &PageConfig) -> Self {
        let animation = if env.animation_api && config.enhanced_animations {
            AnimationPath::Enhanced
        } else {
            AnimationPath::Fallback
        };

        Self {
            animation,
            particles: particles_allowed(env, config),
        }
    }

    pub fn enhanced(&self) -> bool {
        self.animation == AnimationPath::Enhanced
    }
}

/// Check whether a user agent string carries a mobile device signature
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();
    MOBILE_SIGNATURES
        .iter()
        .any(|signature| user_agent.contains(signature))
}

fn particles_allowed(env: &Environment, config: &PageConfig) -> Result<(), ParticlesDisabled> {
    if !config.particles {
        return Err(ParticlesDisabled::SwitchedOff);
    }
    if !env.graphics_api {
        return Err(ParticlesDisabled::GraphicsUnavailable);
    }
    if env.viewport_width <= config.mobile_breakpoint {
        return Err(ParticlesDisabled::NarrowViewport {
            width: env.viewport_width.max(0.0) as u32,
            breakpoint: config.mobile_breakpoint as u32,
        });
    }
    if is_mobile_user_agent(&env.user_agent) {
        return Err(ParticlesDisabled::MobileDevice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

    fn desktop() -> Environment {
        Environment {
            viewport_width: 1440.0,
            user_agent: DESKTOP_UA.to_string(),
            animation_api: true,
            graphics_api: true,
        }
    }

    #[test]
    fn test_full_desktop_gets_everything() {
        let caps = Capabilities::detect(&desktop(), &PageConfig::default());
        assert_eq!(caps.animation, AnimationPath::Enhanced);
        assert!(caps.enhanced());
        assert_eq!(caps.particles, Ok(()));
    }

    #[test]
    fn test_missing_animation_api_falls_back() {
        let env = Environment {
            animation_api: false,
            ..desktop()
        };
        let caps = Capabilities::detect(&env, &PageConfig::default());
        assert_eq!(caps.animation, AnimationPath::Fallback);
        // Particles do not depend on the animation path
        assert_eq!(caps.particles, Ok(()));
    }

    #[test]
    fn test_config_can_force_fallback() {
        let config = PageConfig {
            enhanced_animations: false,
            ..PageConfig::default()
        };
        let caps = Capabilities::detect(&desktop(), &config);
        assert_eq!(caps.animation, AnimationPath::Fallback);
    }

    #[test]
    fn test_missing_graphics_disables_particles() {
        let env = Environment {
            graphics_api: false,
            ..desktop()
        };
        let caps = Capabilities::detect(&env, &PageConfig::default());
        assert_eq!(caps.particles, Err(ParticlesDisabled::GraphicsUnavailable));
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let env = Environment {
            viewport_width: 768.0,
            ..desktop()
        };
        let caps = Capabilities::detect(&env, &PageConfig::default());
        assert_eq!(
            caps.particles,
            Err(ParticlesDisabled::NarrowViewport {
                width: 768,
                breakpoint: 768
            })
        );

        let env = Environment {
            viewport_width: 769.0,
            ..desktop()
        };
        assert_eq!(
            Capabilities::detect(&env, &PageConfig::default()).particles,
            Ok(())
        );
    }

    #[test]
    fn test_wide_mobile_device_is_still_disabled() {
        let env = Environment {
            user_agent: IPHONE_UA.to_string(),
            ..desktop()
        };
        let caps = Capabilities::detect(&env, &PageConfig::default());
        assert_eq!(caps.particles, Err(ParticlesDisabled::MobileDevice));
    }

    #[test]
    fn test_mobile_signatures_are_case_insensitive() {
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; ANDROID 14)"));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(is_mobile_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0)"));
        assert!(!is_mobile_user_agent(DESKTOP_UA));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn test_switched_off_wins_over_other_reasons() {
        let config = PageConfig {
            particles: false,
            ..PageConfig::default()
        };
        let env = Environment::default();
        assert_eq!(
            Capabilities::detect(&env, &config).particles,
            Err(ParticlesDisabled::SwitchedOff)
        );
    }
}
