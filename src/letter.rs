//! The letters of the sign and sets of lit letters.

use core::fmt;
use core::str::FromStr;

use heapless::Vec;

use crate::{Error, Result, shared_constants::LETTER_COUNT};

/// One letter of the sign, declared in word order.
///
/// The declaration order is also the wiring order: a letter's [`index`](Self::index)
/// is the index of its output line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Letter {
    G,
    I,
    R,
    L,
}

impl Letter {
    /// All letters, in word order.
    pub const ALL: [Self; LETTER_COUNT] = [Self::G, Self::I, Self::R, Self::L];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::G => 'G',
            Self::I => 'I',
            Self::R => 'R',
            Self::L => 'L',
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;

    fn try_from(character: char) -> Result<Self> {
        match character.to_ascii_uppercase() {
            'G' => Ok(Self::G),
            'I' => Ok(Self::I),
            'R' => Ok(Self::R),
            'L' => Ok(Self::L),
            _ => Err(Error::UnknownLetter(character)),
        }
    }
}

/// The set of letters lit at one instant.
///
/// Order and repetition don't matter; the empty set turns the whole sign off.
///
/// ```
/// use word_sign::{DisplayState, Letter};
///
/// let state: DisplayState = "rg".parse().unwrap();
/// assert!(state.contains(Letter::G) && state.contains(Letter::R));
/// assert_eq!(state.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DisplayState(u8);

impl DisplayState {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self::prefix(LETTER_COUNT);

    /// Only `letter` lit.
    #[must_use]
    pub const fn single(letter: Letter) -> Self {
        Self(letter.bit())
    }

    /// The first `len` letters of the word lit (all of them if `len` is larger than the word).
    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "index < LETTER_COUNT is checked by the loop")]
    #[expect(clippy::arithmetic_side_effects, reason = "index < LETTER_COUNT")]
    pub const fn prefix(len: usize) -> Self {
        let mut state = Self::EMPTY;
        let mut index = 0;
        while index < len && index < LETTER_COUNT {
            state = state.with(Letter::ALL[index]);
            index += 1;
        }
        state
    }

    #[must_use]
    pub const fn with(self, letter: Letter) -> Self {
        Self(self.0 | letter.bit())
    }

    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The lit letters, in word order.
    #[must_use]
    pub fn letters(self) -> Vec<Letter, LETTER_COUNT> {
        Letter::ALL
            .into_iter()
            .filter(|&letter| self.contains(letter))
            .collect()
    }

    /// One character per position: the letter if lit, else `-`.
    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "index < LETTER_COUNT is checked by the loop")]
    #[expect(clippy::arithmetic_side_effects, reason = "index < LETTER_COUNT")]
    pub const fn to_chars(self) -> [char; LETTER_COUNT] {
        let mut chars = ['-'; LETTER_COUNT];
        let mut index = 0;
        while index < LETTER_COUNT {
            let letter = Letter::ALL[index];
            if self.contains(letter) {
                chars[index] = letter.as_char();
            }
            index += 1;
        }
        chars
    }
}

impl From<Letter> for DisplayState {
    fn from(letter: Letter) -> Self {
        Self::single(letter)
    }
}

impl FromIterator<Letter> for DisplayState {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Parses the lit letters from text such as `"GIRL"`, `"gr"` or `""` (all off).
/// Case and whitespace are ignored.
impl FromStr for DisplayState {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        text.chars()
            .filter(|character| !character.is_whitespace())
            .try_fold(Self::EMPTY, |state, character| {
                Ok(state.with(Letter::try_from(character)?))
            })
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for character in self.to_chars() {
            fmt::Write::write_char(formatter, character)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayState {
    fn format(&self, formatter: defmt::Formatter<'_>) {
        let [g, i, r, l] = self.to_chars();
        defmt::write!(formatter, "{}{}{}{}", g, i, r, l);
    }
}
