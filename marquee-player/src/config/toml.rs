//! TOML configuration parser
//!
//! Example:
//! ```toml
//! [display]
//! width = 64
//! height = 8
//! refresh_rate = 25
//!
//! [scroll]
//! words = [
//!     { text = "Post ", color = 0x004000 },
//!     { text = "Tenebras ", color = 0x000040 },
//! ]
//!
//! [flash]
//! text = "Applause"
//! color = 0x400000
//! repeat = 3
//! pause_ms = 500
//! ```

use core::fmt;

use marquee_core::config::MarqueeConfig;

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Not valid TOML, unknown value type or a string over capacity
    Syntax,
    /// Display width or height is zero
    InvalidGeometry,
    /// Refresh rate is zero
    InvalidRefreshRate,
    /// Flash text is empty
    EmptyFlashText,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::Syntax => "malformed configuration",
            ConfigError::InvalidGeometry => "display width and height must be non-zero",
            ConfigError::InvalidRefreshRate => "refresh rate must be non-zero",
            ConfigError::EmptyFlashText => "flash text is empty",
        };
        f.write_str(msg)
    }
}

/// Parse and validate a TOML configuration
pub fn parse_config(input: &str) -> Result<MarqueeConfig, ConfigError> {
    let config: MarqueeConfig = ::toml::from_str(input).map_err(|_| ConfigError::Syntax)?;
    validate(&config)?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "config: {}x{} at {} Hz, {} scroll words",
        config.display.width,
        config.display.height,
        config.display.refresh_rate,
        config.scroll.words.len()
    );

    Ok(config)
}

/// Check values the type system cannot
fn validate(config: &MarqueeConfig) -> Result<(), ConfigError> {
    if config.display.width == 0 || config.display.height == 0 {
        return Err(ConfigError::InvalidGeometry);
    }
    if config.display.refresh_rate == 0 {
        return Err(ConfigError::InvalidRefreshRate);
    }
    if config.flash.text.is_empty() {
        return Err(ConfigError::EmptyFlashText);
    }
    Ok(())
}
