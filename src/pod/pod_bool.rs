use bytemuck::{Pod, Zeroable};
use std::fmt::{Debug, Display};

/// A one-byte boolean that accepts every bit pattern.
///
/// `bool` itself can't be read from arbitrary bytes, since only `0` and `1`
/// are valid. `PodBool` stores the raw byte, so reinterpreting any buffer as
/// booleans is sound; any non-zero byte reads as `true`.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Pod, Zeroable, PartialEq, Eq, Hash)]
pub struct PodBool(u8);

impl PodBool {
    pub const TRUE: Self = Self(1);

    pub const FALSE: Self = Self(0);

    /// Returns the boolean value.
    #[inline]
    pub fn get(self) -> bool {
        self.0 != 0
    }

    /// Returns the stored byte without normalizing it.
    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }
}

impl From<bool> for PodBool {
    fn from(b: bool) -> Self {
        Self(b.into())
    }
}

impl From<&bool> for PodBool {
    fn from(b: &bool) -> Self {
        Self((*b).into())
    }
}

impl From<&PodBool> for bool {
    fn from(b: &PodBool) -> Self {
        b.0 != 0
    }
}

impl From<PodBool> for bool {
    fn from(b: PodBool) -> Self {
        b.0 != 0
    }
}

impl Debug for PodBool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.get(), f)
    }
}

impl Display for PodBool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.get(), f)
    }
}
