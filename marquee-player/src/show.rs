//! The scroll-then-flash show

use alloc::vec::Vec;
use core::fmt;

use embedded_hal::delay::DelayNs;
use marquee_core::config::MarqueeConfig;
use marquee_core::raster::{self, RasterError, TextRun};
use marquee_core::{Animator, Monotonic};
use marquee_display::{ColorBuffer, FrameSink};
use marquee_font::{FontTable, FormatError};

use crate::config::{parse_config, ConfigError};

/// Errors while preparing or playing a show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShowError<E> {
    /// Configuration rejected
    Config(ConfigError),
    /// Font file rejected
    Font(FormatError),
    /// Configured text cannot be rasterized
    Raster(RasterError),
    /// Frame sink failed
    Sink(E),
}

impl<E> From<ConfigError> for ShowError<E> {
    fn from(err: ConfigError) -> Self {
        ShowError::Config(err)
    }
}

impl<E> From<FormatError> for ShowError<E> {
    fn from(err: FormatError) -> Self {
        ShowError::Font(err)
    }
}

impl<E> From<RasterError> for ShowError<E> {
    fn from(err: RasterError) -> Self {
        ShowError::Raster(err)
    }
}

impl<E: fmt::Debug> fmt::Display for ShowError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowError::Config(err) => write!(f, "cannot load configuration: {err}"),
            ShowError::Font(err) => write!(f, "cannot load font file: {err}"),
            ShowError::Raster(err) => write!(f, "cannot render text: {err}"),
            ShowError::Sink(err) => write!(f, "display write failed: {err:?}"),
        }
    }
}

/// Counters from a completed show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShowStats {
    /// Frames presented while scrolling
    pub scroll_frames: u32,
    /// On/off cycles of the flash
    pub flash_cycles: u8,
}

/// A font and configuration ready to play
#[derive(Debug, Clone)]
pub struct Show {
    font: FontTable,
    config: MarqueeConfig,
}

impl Show {
    /// Wrap an already parsed font
    pub fn new(font: FontTable, config: MarqueeConfig) -> Self {
        Self { font, config }
    }

    /// Parse `font_bytes` as a YF font file
    pub fn load(font_bytes: &[u8], config: MarqueeConfig) -> Result<Self, FormatError> {
        Ok(Self::new(marquee_font::parse(font_bytes)?, config))
    }

    pub fn font(&self) -> &FontTable {
        &self.font
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Rasterize the scrolling message, one color per word
    pub fn scroll_buffer(&self) -> Result<ColorBuffer, RasterError> {
        let runs: Vec<TextRun<'_>> = self.config.scroll.words.iter().map(|w| w.as_run()).collect();
        raster::compose(&self.font, &runs)
    }

    /// Rasterize the flashing word
    pub fn flash_buffer(&self) -> Result<ColorBuffer, RasterError> {
        let flash = &self.config.flash;
        raster::render(&self.font, flash.text.as_str(), flash.color)
    }

    /// Scroll the message, then flash the word
    ///
    /// Both buffers are rasterized before the first frame is sent.
    pub fn run<S, C, D>(
        &self,
        animator: &mut Animator<S, C, D>,
    ) -> Result<ShowStats, ShowError<S::Error>>
    where
        S: FrameSink,
        C: Monotonic,
        D: DelayNs,
    {
        let scroll = self.scroll_buffer()?;
        let flash = self.flash_buffer()?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "show: message {} px wide, flash word {} px wide",
            scroll.width(),
            flash.width()
        );

        let scroll_frames = animator.scroll(&scroll).map_err(ShowError::Sink)?;

        let cfg = &self.config.flash;
        animator
            .flash(&flash, cfg.repeat, cfg.pause_ms)
            .map_err(ShowError::Sink)?;

        Ok(ShowStats {
            scroll_frames,
            flash_cycles: cfg.repeat,
        })
    }
}

/// Load the font, build an animator from the configured display and play
/// the show once
pub fn play<S, C, D>(
    font_bytes: &[u8],
    config: MarqueeConfig,
    sink: S,
    clock: C,
    delay: D,
) -> Result<ShowStats, ShowError<S::Error>>
where
    S: FrameSink,
    C: Monotonic,
    D: DelayNs,
{
    let show = Show::load(font_bytes, config)?;
    let display = show.config.display;
    let mut animator = Animator::new(display.geometry(), display.refresh_rate, sink, clock, delay);
    show.run(&mut animator)
}

/// Parse a TOML configuration, then play the show as [`play`] does
pub fn play_toml<S, C, D>(
    font_bytes: &[u8],
    config_toml: &str,
    sink: S,
    clock: C,
    delay: D,
) -> Result<ShowStats, ShowError<S::Error>>
where
    S: FrameSink,
    C: Monotonic,
    D: DelayNs,
{
    let config = parse_config(config_toml)?;
    play(font_bytes, config, sink, clock, delay)
}
