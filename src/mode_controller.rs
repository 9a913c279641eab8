//! The animation state machine: which mode, which frame, and when the next frame is due.

use core::convert::Infallible;

#[cfg(feature = "defmt")]
use defmt::{debug, info};
use embassy_time::Duration;
use embedded_hal::digital::OutputPin;

use crate::{DisplayState, LetterPanel, Millis, Mode, pattern::Pattern};

/// Plays the current [`Mode`]'s [`Pattern`] on a [`LetterPanel`], one frame per delay.
///
/// The controller never reads a clock itself; every call that can change the display
/// takes the current time. It starts in [`Mode::FIRST`] with that pattern's first frame
/// already showing.
pub struct ModeController<P> {
    panel: LetterPanel<P>,
    mode: Mode,
    pattern: Pattern,
    cursor: usize,
    state: DisplayState,
    frame_delay: Duration,
    delay: Duration,
    last_update: Millis,
}

impl<P: OutputPin<Error = Infallible>> ModeController<P> {
    /// Takes over `panel` and enters [`Mode::FIRST`] at `now`.
    #[must_use]
    pub fn new(panel: LetterPanel<P>, frame_delay: Duration, now: Millis) -> Self {
        let mut controller = Self {
            panel,
            mode: Mode::FIRST,
            pattern: Mode::FIRST.pattern(),
            cursor: 0,
            state: DisplayState::EMPTY,
            frame_delay,
            delay: frame_delay,
            last_update: now,
        };
        controller.set_mode(Mode::FIRST, now);
        controller
    }

    /// Switches to `mode`, restarting its pattern from the first frame, which is
    /// shown immediately.
    pub fn set_mode(&mut self, mode: Mode, now: Millis) {
        self.mode = mode;
        self.pattern = mode.pattern();
        self.cursor = 0;
        #[cfg(feature = "defmt")]
        info!("[mode] mode={}", mode);
        self.update(now);
    }

    /// Shows the next frame and holds it for the configured frame delay.
    pub fn update(&mut self, now: Millis) {
        self.update_with_delay(now, self.frame_delay);
    }

    /// Shows the next frame and holds it for `delay`.
    pub fn update_with_delay(&mut self, now: Millis, delay: Duration) {
        self.state = self.pattern.frame(self.cursor);
        self.cursor = self.pattern.next_cursor(self.cursor);
        self.delay = delay;
        #[cfg(feature = "defmt")]
        debug!("[update] state={}, delay={}", self.state, self.delay);
        self.panel.show(self.state);
        self.last_update = now;
    }

    /// Advances to the next frame if the current one has been up longer than its delay.
    pub fn tick(&mut self, now: Millis) {
        if now.is_past(self.last_update, self.delay) {
            self.update(now);
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The frame currently showing.
    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// How long the current frame stays up.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub const fn last_update(&self) -> Millis {
        self.last_update
    }

    #[must_use]
    pub const fn panel(&self) -> &LetterPanel<P> {
        &self.panel
    }
}
