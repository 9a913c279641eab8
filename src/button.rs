//! A polled push button with debouncing.

use core::convert::Infallible;

use embassy_time::Duration;
use embedded_hal::digital::InputPin;

use crate::Millis;

/// Which electrical level means "pressed".
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pulled up; pressing connects the pin to ground.
    #[default]
    ActiveLow,
    /// Pulled down; pressing connects the pin to Vcc.
    ActiveHigh,
}

impl Polarity {
    /// Converts a raw pin reading into "is the button pressed?".
    #[must_use]
    pub const fn is_pressed(self, is_high: bool) -> bool {
        match self {
            Self::ActiveLow => !is_high,
            Self::ActiveHigh => is_high,
        }
    }
}

/// Filters a noisy pressed/released level into clean transitions.
///
/// As the contacts of a button close (or open) they bounce between "touching" and
/// "not touching" for a few milliseconds. A new level is only accepted after it has
/// differed from the accepted one for longer than the debounce window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    window: Duration,
    pressed: bool,
    just_changed: bool,
    pending_since: Option<Millis>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pressed: false,
            just_changed: false,
            pending_since: None,
        }
    }

    /// Feeds one sample of the (already polarity-corrected) level taken at `now`.
    pub fn update(&mut self, now: Millis, pressed: bool) {
        self.just_changed = false;

        if pressed == self.pressed {
            // Bounce that settled back; forget it once the window has passed.
            if self
                .pending_since
                .is_some_and(|since| now.is_past(since, self.window))
            {
                self.pending_since = None;
            }
            return;
        }

        match self.pending_since {
            None => self.pending_since = Some(now),
            Some(since) if now.is_past(since, self.window) => {
                self.pressed = pressed;
                self.pending_since = None;
                self.just_changed = true;
            }
            Some(_) => {}
        }
    }

    /// The accepted (debounced) level.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True only on the update that accepted a press.
    #[must_use]
    pub const fn pressed_edge(&self) -> bool {
        self.pressed && self.just_changed
    }

    /// True only on the update that accepted a release.
    #[must_use]
    pub const fn released_edge(&self) -> bool {
        !self.pressed && self.just_changed
    }

    /// True while a change is waiting out the debounce window.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }
}

/// A push button read by polling: call [`update`](Self::update) every tick, then ask
/// for edges.
pub struct Button<P> {
    pin: P,
    polarity: Polarity,
    debouncer: Debouncer,
}

impl<P: InputPin<Error = Infallible>> Button<P> {
    #[must_use]
    pub const fn new(pin: P, polarity: Polarity, debounce: Duration) -> Self {
        Self {
            pin,
            polarity,
            debouncer: Debouncer::new(debounce),
        }
    }

    /// Samples the pin.
    pub fn update(&mut self, now: Millis) {
        let Ok(is_high) = self.pin.is_high();
        self.debouncer.update(now, self.polarity.is_pressed(is_high));
    }

    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }

    #[must_use]
    pub const fn pressed_edge(&self) -> bool {
        self.debouncer.pressed_edge()
    }

    #[must_use]
    pub const fn released_edge(&self) -> bool {
        self.debouncer.released_edge()
    }
}
