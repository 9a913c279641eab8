use embassy_time::Duration;

use crate::{
    Polarity,
    shared_constants::{BUTTON_DEBOUNCE_DELAY, FRAME_DELAY, POLL_INTERVAL},
};

/// Timing and wiring choices for a [`Sign`](crate::Sign).
///
/// ```
/// use embassy_time::Duration;
/// use word_sign::{Polarity, SignConfig};
///
/// let config = SignConfig::default()
///     .with_frame_delay(Duration::from_millis(250))
///     .with_button_polarity(Polarity::ActiveHigh);
/// assert_eq!(config.debounce, Duration::from_millis(50));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignConfig {
    /// How long the button must hold a new level before it counts.
    pub debounce: Duration,
    /// How long each frame of a pattern stays up.
    pub frame_delay: Duration,
    /// Pause between loop iterations. Keep it well under `debounce`.
    pub poll_interval: Duration,
    pub button_polarity: Polarity,
}

impl Default for SignConfig {
    fn default() -> Self {
        Self {
            debounce: BUTTON_DEBOUNCE_DELAY,
            frame_delay: FRAME_DELAY,
            poll_interval: POLL_INTERVAL,
            button_polarity: Polarity::ActiveLow,
        }
    }
}

impl SignConfig {
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub const fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    #[must_use]
    pub const fn with_button_polarity(mut self, button_polarity: Polarity) -> Self {
        self.button_polarity = button_polarity;
        self
    }
}
