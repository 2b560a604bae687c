//! Blocking animation driver

use embedded_hal::delay::DelayNs;
use marquee_display::{ColorBuffer, Compositor, DisplayGeometry, FrameSink};

use super::flash::flash_offsets;
use super::scroll::ScrollState;
use crate::traits::Monotonic;

/// Runs scroll and flash animations on one display
///
/// Owns the frame sink, the clock used to pace scrolling and the delay used
/// between flash phases.
#[derive(Debug)]
pub struct Animator<S, C, D> {
    compositor: Compositor,
    refresh_hz: u16,
    sink: S,
    clock: C,
    delay: D,
}

impl<S, C, D> Animator<S, C, D>
where
    S: FrameSink,
    C: Monotonic,
    D: DelayNs,
{
    /// Create an animator for `geometry` refreshing at `refresh_hz`
    pub fn new(geometry: DisplayGeometry, refresh_hz: u16, sink: S, clock: C, delay: D) -> Self {
        Self {
            compositor: Compositor::new(geometry),
            refresh_hz,
            sink,
            clock,
            delay,
        }
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.compositor.geometry()
    }

    pub fn refresh_hz(&self) -> u16 {
        self.refresh_hz
    }

    /// Borrow the frame sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give back the sink, clock and delay
    pub fn release(self) -> (S, C, D) {
        (self.sink, self.clock, self.delay)
    }

    /// Scroll `buffer` across the display from right to left
    ///
    /// Each tick places the buffer according to the time elapsed since the
    /// start, presents the frame, then spins until one refresh period has
    /// passed since the tick began. Returns once the buffer has fully left
    /// the display, with the number of frames presented.
    pub fn scroll(&mut self, buffer: &ColorBuffer) -> Result<u32, S::Error> {
        let geometry = self.compositor.geometry();
        let mut state = ScrollState::new(
            geometry.width,
            buffer.width(),
            self.refresh_hz,
            self.clock.now_micros(),
        );
        let interval = state.interval_us();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "scroll start: {} columns at {} Hz",
            buffer.width(),
            self.refresh_hz
        );

        let mut frames = 0u32;
        while !state.is_finished() {
            let tick = self.clock.now_micros();
            let position = state.advance(tick);
            self.compositor
                .show(&mut self.sink, buffer, position, 0)?;
            frames = frames.saturating_add(1);

            while self.clock.now_micros().saturating_sub(tick) < interval {
                core::hint::spin_loop();
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("scroll done after {} frames", frames);

        Ok(frames)
    }

    /// Blink `buffer` centered on the display `repeat` times
    ///
    /// Every cycle shows the buffer, pauses `pause_ms`, blanks the display
    /// and pauses again.
    pub fn flash(&mut self, buffer: &ColorBuffer, repeat: u8, pause_ms: u32) -> Result<(), S::Error> {
        let width = self.compositor.geometry().width;

        #[cfg(feature = "defmt")]
        defmt::debug!("flash: {} cycles of {} ms", repeat, pause_ms);

        for offset in flash_offsets(width, buffer.width(), repeat) {
            self.compositor.show(&mut self.sink, buffer, offset, 0)?;
            self.delay.delay_ms(pause_ms);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;
    use marquee_display::Rgb;

    const GEOMETRY: DisplayGeometry = DisplayGeometry::new(8, 2);
    const LIT: Rgb = Rgb::from_u32(0x004000);

    /// Clock that moves forward `step_us` on every reading
    struct FakeClock {
        now: Rc<Cell<u64>>,
        step_us: u64,
    }

    impl Monotonic for FakeClock {
        fn now_micros(&self) -> u64 {
            let now = self.now.get();
            self.now.set(now + self.step_us);
            now
        }
    }

    /// Delay that advances the shared clock and records pauses
    struct FakeDelay {
        now: Rc<Cell<u64>>,
        pauses_ms: Vec<u32>,
    }

    impl DelayNs for FakeDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.now.set(self.now.get() + u64::from(ns) / 1_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.pauses_ms.push(ms);
            self.now.set(self.now.get() + u64::from(ms) * 1_000);
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Vec<Rgb>>,
        fail_after: Option<usize>,
    }

    impl FrameSink for RecordingSink {
        type Error = &'static str;

        fn present(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
            if self.fail_after == Some(self.frames.len()) {
                return Err("link lost");
            }
            self.frames.push(colors.to_vec());
            Ok(())
        }
    }

    fn animator(
        step_us: u64,
        sink: RecordingSink,
    ) -> Animator<RecordingSink, FakeClock, FakeDelay> {
        let now = Rc::new(Cell::new(0));
        let clock = FakeClock {
            now: now.clone(),
            step_us,
        };
        let delay = FakeDelay {
            now,
            pauses_ms: Vec::new(),
        };
        Animator::new(GEOMETRY, 25, sink, clock, delay)
    }

    /// Buffer `width` columns wide with only the top-left pixel lit
    fn marker(width: usize) -> ColorBuffer {
        let mut buffer = ColorBuffer::new(width, 2);
        *buffer.pixel_mut(0, 0).unwrap() = LIT;
        buffer
    }

    /// Display column of the lit pixel in the top row, if visible
    fn marker_column(frame: &[Rgb]) -> Option<usize> {
        (0..GEOMETRY.width as usize).find(|&col| frame[col * GEOMETRY.height as usize] == LIT)
    }

    #[test]
    fn test_scroll_moves_left_and_terminates() {
        let mut anim = animator(1_000, RecordingSink::default());
        let frames = anim.scroll(&marker(3)).unwrap();

        let sink = anim.sink();
        assert_eq!(frames as usize, sink.frames.len());
        assert!(sink.frames.iter().all(|f| f.len() == GEOMETRY.pixel_count()));

        // first frame is at the display width, entirely off-screen
        assert!(sink.frames[0].iter().all(|c| c.is_black()));
        // last frame is past the left edge
        assert!(sink.frames.last().unwrap().iter().all(|c| c.is_black()));

        let columns: Vec<usize> = sink
            .frames
            .iter()
            .filter_map(|f| marker_column(f))
            .collect();
        assert!(columns.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(columns.first(), Some(&7));
        assert_eq!(columns.last(), Some(&0));
    }

    #[test]
    fn test_scroll_paces_to_refresh_rate() {
        let mut anim = animator(1_000, RecordingSink::default());
        let start = anim.clock.now.get();
        anim.scroll(&marker(2)).unwrap();
        let elapsed = anim.clock.now.get() - start;
        let frames = anim.sink().frames.len() as u64;

        // one 40 ms period per frame, plus at most one clock step of overshoot each
        assert!(elapsed >= frames * 40_000);
        assert!(elapsed <= frames * 42_000 + 2_000);
    }

    #[test]
    fn test_slow_ticks_skip_columns() {
        // every clock read takes 30 ms, so ticks land ~90 ms apart
        let mut anim = animator(30_000, RecordingSink::default());
        let frames = anim.scroll(&marker(4)).unwrap();

        // 12 columns of travel at ~2 columns per tick
        assert!(frames < 12);
    }

    #[test]
    fn test_scroll_propagates_sink_error() {
        let sink = RecordingSink {
            fail_after: Some(2),
            ..Default::default()
        };
        let mut anim = animator(1_000, sink);
        assert_eq!(anim.scroll(&marker(3)), Err("link lost"));
        assert_eq!(anim.sink().frames.len(), 2);
    }

    #[test]
    fn test_flash_alternates_centered_and_blank() {
        let mut anim = animator(1, RecordingSink::default());
        anim.flash(&marker(4), 3, 500).unwrap();

        let (sink, _, delay) = anim.release();
        assert_eq!(sink.frames.len(), 6);
        for (i, frame) in sink.frames.iter().enumerate() {
            if i % 2 == 0 {
                // (8 - 4) / 2 = 2
                assert_eq!(marker_column(frame), Some(2));
            } else {
                assert!(frame.iter().all(|c| c.is_black()));
            }
        }
        assert_eq!(delay.pauses_ms, [500; 6]);
    }

    #[test]
    fn test_flash_zero_repeat_presents_nothing() {
        let mut anim = animator(1, RecordingSink::default());
        anim.flash(&marker(4), 0, 500).unwrap();
        assert!(anim.sink().frames.is_empty());
    }
}
