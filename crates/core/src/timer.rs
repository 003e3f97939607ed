/// An elapsed-time capability.
///
/// `now` returns seconds on a monotonically non-decreasing clock. Only
/// differences between readings are meaningful. Components that need time
/// take a `Timer` explicitly; nothing in the core reads a wall clock.
///
/// Closures returning `f64` implement `Timer`, which makes fake clocks easy
/// to write in tests.
pub trait Timer {
    /// Returns the current reading in seconds.
    fn now(&self) -> f64;
}

impl<F> Timer for F
where
    F: Fn() -> f64,
{
    fn now(&self) -> f64 {
        self()
    }
}
