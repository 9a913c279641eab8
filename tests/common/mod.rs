//! Fake pins for host-level tests.
#![allow(dead_code, reason = "Each test binary uses a different subset")]

use core::convert::Infallible;
use std::{cell::Cell, rc::Rc};

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use word_sign::{LETTER_COUNT, OutputArray};

/// An output line whose level stays readable after the pin is moved into the sign.
#[derive(Clone, Default)]
pub struct FakeOutput(Rc<Cell<bool>>);

impl FakeOutput {
    pub fn is_high(&self) -> bool {
        self.0.get()
    }
}

impl ErrorType for FakeOutput {
    type Error = Infallible;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

/// An input line the test drives from outside.
#[derive(Clone, Default)]
pub struct FakeInput(Rc<Cell<bool>>);

impl FakeInput {
    /// Starts high, like an idle pulled-up button.
    pub fn pulled_up() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn drive(&self, is_high: bool) {
        self.0.set(is_high);
    }
}

impl ErrorType for FakeInput {
    type Error = Infallible;
}

impl InputPin for FakeInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

/// Four letter lines: handles for the test, plus the array to hand to the code under test.
pub fn letter_lines() -> (
    [FakeOutput; LETTER_COUNT],
    OutputArray<FakeOutput, LETTER_COUNT>,
) {
    let lines: [FakeOutput; LETTER_COUNT] = Default::default();
    (lines.clone(), OutputArray::new(lines))
}

/// Which lines are high, in G, I, R, L order.
pub fn levels(lines: &[FakeOutput; LETTER_COUNT]) -> [bool; LETTER_COUNT] {
    lines.each_ref().map(FakeOutput::is_high)
}
