//! Monotonic time source

/// Free-running microsecond clock
///
/// Readings never decrease. The epoch is arbitrary; only differences
/// between readings are used.
pub trait Monotonic {
    /// Microseconds since an arbitrary fixed point
    fn now_micros(&self) -> u64;
}

impl<T: Monotonic + ?Sized> Monotonic for &T {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}
