//! Wrapping millisecond timestamps.

use embassy_time::{Duration, Instant};

/// A reading of a monotonic millisecond clock that wraps around every ~49.7 days.
///
/// Only differences between two readings mean anything. They are signed, wrapping
/// differences, so "has the window passed?" stays correct across the wrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl Millis {
    /// Signed milliseconds from `earlier` to `self`.
    #[must_use]
    #[expect(
        clippy::cast_possible_wrap,
        reason = "Reinterpreting the wrapped difference as signed is the point"
    )]
    pub const fn diff(self, earlier: Self) -> i32 {
        self.0.wrapping_sub(earlier.0) as i32
    }

    /// True once strictly more than `window` has passed since `earlier`.
    #[must_use]
    pub fn is_past(self, earlier: Self, window: Duration) -> bool {
        u64::try_from(self.diff(earlier)).is_ok_and(|elapsed| elapsed > window.as_millis())
    }

    #[must_use]
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Self(self.0.wrapping_add(millis))
    }
}

impl From<Instant> for Millis {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Truncation is the wraparound; differences stay exact"
    )]
    fn from(instant: Instant) -> Self {
        Self(instant.as_millis() as u32)
    }
}
