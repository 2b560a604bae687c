//! Flash cadence

/// Default on/off pause, giving a 1 Hz blink
pub const DEFAULT_PAUSE_MS: u32 = 500;

/// Offset that centers a buffer on the display
///
/// Rounds toward negative infinity, so an odd leftover puts the extra
/// column on the right.
pub fn centered_offset(display_width: u16, buffer_width: usize) -> i32 {
    let leftover = i64::from(display_width) - i64::try_from(buffer_width).unwrap_or(i64::MAX);
    i32::try_from(leftover.div_euclid(2)).unwrap_or(i32::MIN)
}

/// Offsets composited by a flash: centered then off-screen, `repeat` times
pub fn flash_offsets(
    display_width: u16,
    buffer_width: usize,
    repeat: u8,
) -> impl Iterator<Item = i32> {
    let on = centered_offset(display_width, buffer_width);
    let off = i32::from(display_width);
    (0..repeat).flat_map(move |_| [on, off])
}
