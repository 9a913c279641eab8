//! Firmware for the GIRL word sign.
//!
//! Runs on a Raspberry Pi Pico. See [`word_sign::Hardware`] for the wiring.
#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use word_sign::{Hardware, Millis, Sign, SignConfig};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    #[cfg(feature = "defmt")]
    info!("GIRL sign starting");

    let config = SignConfig::default();
    let hardware = Hardware::default();
    let mut sign = Sign::new(hardware.letters, hardware.button, &config, now());

    loop {
        sign.poll(now());
        Timer::after(config.poll_interval).await;
    }
}

fn now() -> Millis {
    Millis::from(Instant::now())
}
