//! Time abstraction traits for platform-agnostic frame pacing.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait for abstracting the pacing mechanism between pattern frames.
///
/// A blocking target sleeps the calling thread; a cooperative target can
/// instead busy-wait on a timer tick or yield to an executor. The engine
/// only ever requests whole delays between writes, never mid-write.
pub trait Delay {
    /// Duration type accepted by this delay provider.
    type Duration: TimeDuration;

    /// Pauses for the given duration.
    fn delay(&mut self, duration: Self::Duration);
}

impl<T: Delay> Delay for &mut T {
    type Duration = T::Duration;

    fn delay(&mut self, duration: Self::Duration) {
        (**self).delay(duration);
    }
}

impl TimeDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;

    fn as_millis(&self) -> u64 {
        core::time::Duration::as_millis(self) as u64
    }

    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }
}

/// Blocking delay provider backed by [`std::thread::sleep`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl Delay for ThreadDelay {
    type Duration = core::time::Duration;

    fn delay(&mut self, duration: Self::Duration) {
        std::thread::sleep(duration);
    }
}
