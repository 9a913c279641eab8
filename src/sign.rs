//! The whole sign: letters, mode button, and the loop body that ties them together.

use core::convert::Infallible;

#[cfg(feature = "defmt")]
use defmt::info;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::{
    Button, DisplayState, LetterPanel, Millis, Mode, ModeController, OutputArray, SignConfig,
    shared_constants::LETTER_COUNT,
};

/// Owns every piece of state the sign has. Build it once at startup and call
/// [`poll`](Self::poll) forever.
///
/// ```ignore
/// let mut sign = Sign::new(hardware.letters, hardware.button, &config, now());
/// loop {
///     sign.poll(now());
///     Timer::after(config.poll_interval).await;
/// }
/// ```
pub struct Sign<O, I> {
    button: Button<I>,
    controller: ModeController<O>,
}

impl<O, I> Sign<O, I>
where
    O: OutputPin<Error = Infallible>,
    I: InputPin<Error = Infallible>,
{
    /// Turns the letters off, then starts the first mode at `now`.
    #[must_use]
    pub fn new(
        letters: OutputArray<O, LETTER_COUNT>,
        button: I,
        config: &SignConfig,
        now: Millis,
    ) -> Self {
        #[cfg(feature = "defmt")]
        info!("Starting sign loop: {}", config);
        Self {
            button: Button::new(button, config.button_polarity, config.debounce),
            controller: ModeController::new(LetterPanel::new(letters), config.frame_delay, now),
        }
    }

    /// One loop iteration: read the button, switch mode on a release, then advance
    /// the animation if a frame is due.
    ///
    /// The order matters. A release that lands on the same tick as a frame deadline
    /// shows the new mode's first frame rather than one more frame of the old mode.
    pub fn poll(&mut self, now: Millis) {
        self.button.update(now);
        if self.button.released_edge() {
            let next = self.controller.mode().next();
            self.controller.set_mode(next, now);
        }
        self.controller.tick(now);
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.controller.mode()
    }

    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.controller.state()
    }

    #[must_use]
    pub const fn button(&self) -> &Button<I> {
        &self.button
    }

    #[must_use]
    pub const fn controller(&self) -> &ModeController<O> {
        &self.controller
    }
}
