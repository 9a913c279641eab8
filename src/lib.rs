//! Animation firmware for a sign that spells "GIRL" in four separately lit letters.
//!
//! A button cycles the sign through its animation [`Mode`]s. Everything runs in one
//! cooperative loop: each tick the [`Sign`] polls the debounced [`Button`], switches
//! mode on a release, and lets the [`ModeController`] advance its [`Pattern`] when the
//! current frame's delay has passed.
//!
//! The logic is hardware-agnostic (it only needs `embedded-hal` pins and millisecond
//! timestamps), so it is tested on the host with `--no-default-features --features host`.
#![cfg_attr(not(test), no_std)]

mod button;
mod config;
mod error;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod hardware;
mod letter;
mod millis;
mod mode;
mod mode_controller;
mod panel;
pub mod pattern;
mod shared_constants;
mod sign;

// Re-export commonly used items
pub use button::{Button, Debouncer, Polarity};
pub use config::SignConfig;
pub use error::{Error, Result};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use hardware::Hardware;
pub use letter::{DisplayState, Letter};
pub use millis::Millis;
pub use mode::Mode;
pub use mode_controller::ModeController;
pub use panel::{LetterPanel, OutputArray};
pub use pattern::Pattern;
pub use shared_constants::*;
pub use sign::Sign;
