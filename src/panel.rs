//! A device abstraction for the letters of the sign, one output line per letter.
//!
//! See [`LetterPanel`] for the main device abstraction and usage examples.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

use crate::{DisplayState, Letter, shared_constants::LETTER_COUNT};

mod output_array;
pub use output_array::OutputArray;

/// The sign's letters, each lit by driving its output line high.
///
/// The lines are wired in word order: G, I, R, L.
///
/// # Example
///
/// ```ignore
/// #![no_std]
/// #![no_main]
///
/// use embassy_rp::gpio::{Level, Output};
/// use word_sign::{DisplayState, Letter, LetterPanel, OutputArray};
/// # use core::panic::PanicInfo;
/// # #[panic_handler]
/// # fn panic(_: &PanicInfo) -> ! { loop {} }
///
/// fn example(p: embassy_rp::Peripherals) {
///     let mut panel = LetterPanel::new(OutputArray::new([
///         Output::new(p.PIN_2, Level::Low), // G
///         Output::new(p.PIN_3, Level::Low), // I
///         Output::new(p.PIN_4, Level::Low), // R
///         Output::new(p.PIN_5, Level::Low), // L
///     ]));
///
///     panel.show(DisplayState::single(Letter::G).with(Letter::R));
///     panel.all_on();
/// }
/// ```
pub struct LetterPanel<P> {
    outputs: OutputArray<P, LETTER_COUNT>,
    shown: DisplayState,
}

impl<P: OutputPin<Error = Infallible>> LetterPanel<P> {
    /// Takes ownership of the four letter lines and turns them all off.
    #[must_use]
    pub fn new(outputs: OutputArray<P, LETTER_COUNT>) -> Self {
        let mut panel = Self {
            outputs,
            shown: DisplayState::EMPTY,
        };
        panel.all_off();
        panel
    }

    /// Lights exactly the letters in `state`. Every line is written, so nothing from
    /// an earlier frame survives.
    pub fn show(&mut self, state: DisplayState) {
        self.outputs
            .set_states(Letter::ALL.map(|letter| PinState::from(state.contains(letter))));
        self.shown = state;
    }

    pub fn all_on(&mut self) {
        self.outputs.set_all(PinState::High);
        self.shown = DisplayState::ALL;
    }

    pub fn all_off(&mut self) {
        self.outputs.set_all(PinState::Low);
        self.shown = DisplayState::EMPTY;
    }

    /// The state most recently written to the lines.
    #[must_use]
    pub const fn shown(&self) -> DisplayState {
        self.shown
    }
}
