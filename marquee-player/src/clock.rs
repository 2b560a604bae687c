//! embassy-time backed clock and delay

use marquee_core::Monotonic;

/// Blocking delay on the embassy time driver
pub type EmbassyDelay = embassy_time::Delay;

/// Monotonic clock reading the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_micros(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
