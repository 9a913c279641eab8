//! The animation patterns, each built at compile time.
//!
//! A pattern is a fixed, non-empty list of frames that the
//! [`ModeController`](crate::ModeController) plays in a loop. Pacing comes from the
//! frames themselves (extra "off" frames), never from varying the frame delay.

use crate::{DisplayState, Letter, shared_constants::LETTER_COUNT};

const FLASH_REPEATS: usize = 3;
const FLASH_LEN: usize = 2 * FLASH_REPEATS;
const SEPARATE_LEN: usize = LETTER_COUNT + 1;
const GRADUAL_LEN: usize = LETTER_COUNT + 1;

/// Separate ×2, Flash ×3, Gradual ×2, Flash ×3.
pub const COMBINED_LEN: usize = 2 * SEPARATE_LEN + 3 * FLASH_LEN + 2 * GRADUAL_LEN + 3 * FLASH_LEN;

const STATIC_FRAMES: [DisplayState; 1] = [DisplayState::ALL];
const FLASH_FRAMES: [DisplayState; FLASH_LEN] =
    repeat(&[DisplayState::ALL, DisplayState::EMPTY]);
const SEPARATE_FRAMES: [DisplayState; SEPARATE_LEN] = separate();
const GRADUAL_FRAMES: [DisplayState; GRADUAL_LEN] = gradual();
const COMBINED_FRAMES: [DisplayState; COMBINED_LEN] = combined();

/// A looping sequence of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern(&'static [DisplayState]);

impl Pattern {
    /// Every letter lit, steadily.
    pub const STATIC: Self = Self::new(&STATIC_FRAMES);
    /// All on, all off, three times.
    pub const FLASH: Self = Self::new(&FLASH_FRAMES);
    /// Each letter alone, in word order, then a blank.
    pub const SEPARATE: Self = Self::new(&SEPARATE_FRAMES);
    /// The word spelled out one more letter at a time, then a blank.
    pub const GRADUAL: Self = Self::new(&GRADUAL_FRAMES);
    /// The other animations strung together.
    pub const COMBINED: Self = Self::new(&COMBINED_FRAMES);

    const fn new(frames: &'static [DisplayState]) -> Self {
        assert!(!frames.is_empty(), "a pattern needs at least one frame");
        Self(frames)
    }

    #[must_use]
    pub const fn frames(self) -> &'static [DisplayState] {
        self.0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for symmetry with [`len`](Self::len).
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The frame at `cursor`, counting around the loop as many times as needed.
    #[must_use]
    pub fn frame(self, cursor: usize) -> DisplayState {
        cursor
            .checked_rem(self.len())
            .and_then(|index| self.0.get(index))
            .copied()
            .unwrap_or_default()
    }

    /// The cursor that follows `cursor`, wrapping to the first frame after the last.
    #[must_use]
    pub const fn next_cursor(self, cursor: usize) -> usize {
        match cursor.checked_add(1) {
            Some(next) if next < self.len() => next,
            _ => 0,
        }
    }
}

#[expect(clippy::indexing_slicing, reason = "Const evaluation fails the build on overflow")]
#[expect(clippy::arithmetic_side_effects, reason = "Bounded by N")]
#[expect(clippy::integer_division_remainder_used, reason = "Cycling through `cycle`")]
const fn repeat<const N: usize>(cycle: &[DisplayState]) -> [DisplayState; N] {
    let mut frames = [DisplayState::EMPTY; N];
    let mut index = 0;
    while index < N {
        frames[index] = cycle[index % cycle.len()];
        index += 1;
    }
    frames
}

#[expect(clippy::indexing_slicing, reason = "Const evaluation fails the build on overflow")]
#[expect(clippy::arithmetic_side_effects, reason = "Bounded by LETTER_COUNT")]
const fn separate() -> [DisplayState; SEPARATE_LEN] {
    let mut frames = [DisplayState::EMPTY; SEPARATE_LEN];
    let mut index = 0;
    while index < LETTER_COUNT {
        frames[index] = DisplayState::single(Letter::ALL[index]);
        index += 1;
    }
    frames
}

#[expect(clippy::indexing_slicing, reason = "Const evaluation fails the build on overflow")]
#[expect(clippy::arithmetic_side_effects, reason = "Bounded by LETTER_COUNT")]
const fn gradual() -> [DisplayState; GRADUAL_LEN] {
    let mut frames = [DisplayState::EMPTY; GRADUAL_LEN];
    let mut index = 0;
    while index < LETTER_COUNT {
        frames[index] = DisplayState::prefix(index + 1);
        index += 1;
    }
    frames
}

const fn combined() -> [DisplayState; COMBINED_LEN] {
    let mut frames = [DisplayState::EMPTY; COMBINED_LEN];
    let mut len = 0;
    len = append(&mut frames, len, &SEPARATE_FRAMES, 2);
    len = append(&mut frames, len, &FLASH_FRAMES, 3);
    len = append(&mut frames, len, &GRADUAL_FRAMES, 2);
    len = append(&mut frames, len, &FLASH_FRAMES, 3);
    assert!(len == COMBINED_LEN, "combined pattern must be completely filled");
    frames
}

/// Copies `part` into `frames` at `len`, `times` times over, and returns the new length.
#[expect(clippy::indexing_slicing, reason = "Const evaluation fails the build on overflow")]
#[expect(clippy::arithmetic_side_effects, reason = "Bounded by COMBINED_LEN")]
const fn append(
    frames: &mut [DisplayState; COMBINED_LEN],
    mut len: usize,
    part: &[DisplayState],
    times: usize,
) -> usize {
    let mut repetition = 0;
    while repetition < times {
        let mut index = 0;
        while index < part.len() {
            frames[len] = part[index];
            len += 1;
            index += 1;
        }
        repetition += 1;
    }
    len
}
