use embassy_rp::gpio::{self, Level, Pull};

use crate::{OutputArray, shared_constants::LETTER_COUNT};

/// The sign's wiring on a Raspberry Pi Pico.
pub struct Hardware {
    /// G, I, R, L on `PIN_2`..=`PIN_5`, active high.
    pub letters: OutputArray<gpio::Output<'static>, LETTER_COUNT>,
    /// Mode button on `PIN_13`, wired to ground.
    pub button: gpio::Input<'static>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let letters = OutputArray::new([
            gpio::Output::new(peripherals.PIN_2, Level::Low),
            gpio::Output::new(peripherals.PIN_3, Level::Low),
            gpio::Output::new(peripherals.PIN_4, Level::Low),
            gpio::Output::new(peripherals.PIN_5, Level::Low),
        ]);

        let button = gpio::Input::new(peripherals.PIN_13, Pull::Up);

        Self { letters, button }
    }
}
