use embassy_time::Duration;

/// The sign spells a four-letter word, one output line per letter.
pub const LETTER_COUNT: usize = 4;

pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(50);
pub const FRAME_DELAY: Duration = Duration::from_millis(500);
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);
