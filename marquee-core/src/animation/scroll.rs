//! Scroll position tracking
//!
//! The position is recomputed from elapsed wall-clock time on every tick
//! instead of being decremented, so a late tick never accumulates lag.

/// Microseconds per second
const MICROS_PER_SEC: u64 = 1_000_000;

/// State of one scroll animation
///
/// `position` is the display column of the buffer's left edge. It starts at
/// the display width (buffer just off the right edge) and moves left one
/// column per refresh period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollState {
    display_width: i64,
    buffer_width: i64,
    refresh_hz: u64,
    start_us: u64,
    interval_us: u64,
    position: i32,
}

impl ScrollState {
    /// Start scrolling a buffer `buffer_width` columns wide at `start_us`
    ///
    /// A zero refresh rate is treated as 1 Hz.
    pub fn new(display_width: u16, buffer_width: usize, refresh_hz: u16, start_us: u64) -> Self {
        let refresh_hz = u64::from(refresh_hz.max(1));
        Self {
            display_width: i64::from(display_width),
            buffer_width: i64::try_from(buffer_width).unwrap_or(i64::MAX),
            refresh_hz,
            start_us,
            interval_us: MICROS_PER_SEC / refresh_hz,
            position: i32::from(display_width),
        }
    }

    /// Current left-edge column
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Target time between ticks
    pub fn interval_us(&self) -> u64 {
        self.interval_us
    }

    /// Time the animation started
    pub fn start_us(&self) -> u64 {
        self.start_us
    }

    /// Whether the buffer has left the display on the left side
    pub fn is_finished(&self) -> bool {
        i64::from(self.position) <= -self.buffer_width
    }

    /// Position at `now_us`: display width minus elapsed refresh periods,
    /// rounded to the nearest column
    pub fn position_at(&self, now_us: u64) -> i32 {
        let elapsed = now_us.saturating_sub(self.start_us);
        let steps = elapsed
            .saturating_mul(self.refresh_hz)
            .saturating_add(MICROS_PER_SEC / 2)
            / MICROS_PER_SEC;
        let steps = i64::try_from(steps).unwrap_or(i64::MAX);
        let position = self.display_width.saturating_sub(steps);
        i32::try_from(position).unwrap_or(i32::MIN)
    }

    /// Move to the position for `now_us` and return it
    pub fn advance(&mut self, now_us: u64) -> i32 {
        self.position = self.position_at(now_us);
        self.position
    }
}
