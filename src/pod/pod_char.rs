use bytemuck::{Pod, Zeroable};
use std::fmt::{Debug, Display};

/// A two-byte character: one UTF-16 code unit.
///
/// This is the fixed-width character scalar. Rust's `char` is four bytes wide
/// and rejects surrogates, so it can't be reinterpreted from arbitrary bytes;
/// a code unit can. Characters outside the basic multilingual plane take two
/// units (a surrogate pair).
#[repr(transparent)]
#[derive(Copy, Clone, Default, Pod, Zeroable, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PodChar(u16);

impl PodChar {
    /// Creates a character from a raw UTF-16 code unit.
    #[inline]
    pub const fn new(unit: u16) -> Self {
        Self(unit)
    }

    /// Returns the raw code unit.
    #[inline]
    pub const fn unit(self) -> u16 {
        self.0
    }

    /// Indicates if the unit is half of a surrogate pair.
    #[inline]
    pub const fn is_surrogate(self) -> bool {
        matches!(self.0, 0xD800..=0xDFFF)
    }

    /// Returns the `char` for this unit, or `None` for a surrogate.
    #[inline]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0 as u32)
    }
}

impl From<u16> for PodChar {
    fn from(unit: u16) -> Self {
        Self(unit)
    }
}

impl From<PodChar> for u16 {
    fn from(c: PodChar) -> Self {
        c.0
    }
}

impl TryFrom<char> for PodChar {
    type Error = char;

    /// Fails with the input when it needs a surrogate pair.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        u16::try_from(c as u32).map(Self).map_err(|_| c)
    }
}

impl Debug for PodChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_char() {
            Some(c) => Debug::fmt(&c, f),
            None => write!(f, "\\u{{{:04x}}}", self.0),
        }
    }
}

impl Display for PodChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = self.to_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        Display::fmt(&c, f)
    }
}
