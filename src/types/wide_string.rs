use std::fmt::{Debug, Display, Write};

use crate::collections::CastVec;
use crate::pod::PodChar;

/// An owned string of UTF-16 code units.
///
/// The units may live in a byte buffer that was handed over to
/// [`bytes_into_wide`](crate::codec::bytes_into_wide), in which case no copy
/// was made. Unpaired surrogates are kept as they are; they only turn into
/// U+FFFD when converting to a Rust `String`.
#[derive(Clone, Default)]
pub struct WideString {
    units: CastVec<u16>,
}

impl WideString {
    /// Creates an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_cast_vec(units: CastVec<u16>) -> Self {
        Self { units }
    }

    /// Creates a string from UTF-16 code units.
    pub fn from_units(units: Vec<u16>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// Returns the code units.
    pub fn as_code_units(&self) -> &[u16] {
        &self.units
    }

    /// Returns the code units as characters.
    pub fn as_chars(&self) -> &[PodChar] {
        bytemuck::cast_slice(self.units.as_slice())
    }

    /// Returns the encoded bytes in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        self.units.as_bytes()
    }

    /// Returns the number of code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Indicates whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Indicates whether the units live in the byte buffer the string was
    /// created from.
    pub fn is_relabelled(&self) -> bool {
        self.units.is_relabelled()
    }

    /// Decodes into a `String`, or `None` if there is an unpaired surrogate.
    pub fn to_string_checked(&self) -> Option<String> {
        String::from_utf16(&self.units).ok()
    }

    /// Decodes into a `String`, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Converts into the encoded bytes.
    ///
    /// Returns the original buffer when the string was made from one.
    pub fn into_bytes(self) -> Vec<u8> {
        match self.units.try_into_source() {
            Ok(bytes) => bytes,
            Err(units) => units.as_bytes().to_vec(),
        }
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        char::decode_utf16(self.units.iter().copied())
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self::from_units(s.encode_utf16().collect())
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl Display for WideString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars().try_for_each(|c| f.write_char(c))
    }
}

impl Debug for WideString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl PartialEq for WideString {
    fn eq(&self, other: &Self) -> bool {
        self.as_code_units() == other.as_code_units()
    }
}

impl Eq for WideString {}

impl PartialEq<str> for WideString {
    fn eq(&self, other: &str) -> bool {
        self.as_code_units().iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for WideString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let s = WideString::from("ab");

        assert_eq!(s.len(), 2);
        assert_eq!(s.as_code_units(), &[0x61, 0x62]);
        assert_eq!(s.as_chars()[1].to_char(), Some('b'));
        assert_eq!(s, "ab");
        assert_eq!(s.to_string(), "ab");
        assert!(!s.is_relabelled());
    }

    #[test]
    fn test_unpaired_surrogate() {
        let s = WideString::from_units(vec![0x61, 0xD800]);

        assert_eq!(s.to_string_checked(), None);
        assert_eq!(s.to_string_lossy(), "a\u{FFFD}");
        assert_eq!(format!("{s}"), "a\u{FFFD}");
        assert_eq!(format!("{s:?}"), "\"a\u{FFFD}\"");
    }

    #[test]
    fn test_supplementary_plane() {
        let s = WideString::from("\u{1F600}");

        assert_eq!(s.len(), 2);
        assert!(s.as_chars().iter().all(|c| c.is_surrogate()));
        assert_eq!(s.to_string_checked().as_deref(), Some("\u{1F600}"));
    }

    #[test]
    fn test_into_bytes() {
        let s = WideString::from("hi");
        let expected: Vec<u8> = "hi"
            .encode_utf16()
            .flat_map(u16::to_ne_bytes)
            .collect();

        assert_eq!(s.as_bytes(), expected.as_slice());
        assert_eq!(s.into_bytes(), expected);
        assert!(WideString::new().is_empty());
    }
}
