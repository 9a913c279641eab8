use core::fmt;

use crate::pattern::Pattern;

/// The animation the sign is playing. The button steps through these in
/// declaration order, wrapping from the last back to the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Static,
    Flash,
    Separate,
    Gradual,
    Combined,
}

impl Mode {
    /// The mode the sign starts in.
    pub const FIRST: Self = Self::Static;

    pub const ALL: [Self; 5] = [
        Self::Static,
        Self::Flash,
        Self::Separate,
        Self::Gradual,
        Self::Combined,
    ];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Static => Self::Flash,
            Self::Flash => Self::Separate,
            Self::Separate => Self::Gradual,
            Self::Gradual => Self::Combined,
            Self::Combined => Self::Static,
        }
    }

    #[must_use]
    pub const fn pattern(self) -> Pattern {
        match self {
            Self::Static => Pattern::STATIC,
            Self::Flash => Pattern::FLASH,
            Self::Separate => Pattern::SEPARATE,
            Self::Gradual => Pattern::GRADUAL,
            Self::Combined => Pattern::COMBINED,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Flash => "flash",
            Self::Separate => "separate",
            Self::Gradual => "gradual",
            Self::Combined => "combined",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
