use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

/// Array of output pins driven as a group.
///
/// See the [`LetterPanel`](crate::LetterPanel) documentation for usage examples.
pub struct OutputArray<P, const N: usize>([P; N]);

impl<P: OutputPin<Error = Infallible>, const N: usize> OutputArray<P, N> {
    #[must_use]
    pub const fn new(outputs: [P; N]) -> Self {
        Self(outputs)
    }

    /// Drives each pin to the state at the same index.
    #[inline]
    pub fn set_states(&mut self, states: [PinState; N]) {
        for (output, state) in self.0.iter_mut().zip(states) {
            let Ok(()) = output.set_state(state);
        }
    }

    #[inline]
    pub fn set_all(&mut self, state: PinState) {
        self.set_states([state; N]);
    }
}
