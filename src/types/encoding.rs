use std::fmt::Display;
use std::str::FromStr;

use crate::{Error, Result};

/// Text encodings understood by the text conversions.
///
/// Byte order is always the native one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-16 code units in native byte order.
    #[default]
    Utf16,

    /// UTF-8, the layout of Rust's `str`.
    Utf8,

    /// 7-bit ASCII; anything else maps to `?`.
    Ascii,

    /// ISO-8859-1, one byte per code point up to U+00FF.
    Latin1,
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [
        Encoding::Utf16,
        Encoding::Utf8,
        Encoding::Ascii,
        Encoding::Latin1,
    ];

    /// Returns the width of a code unit in bytes.
    ///
    /// Encoded byte lengths are always a multiple of this value.
    #[inline]
    pub const fn code_unit_size(self) -> usize {
        match self {
            Encoding::Utf16 => 2,
            Encoding::Utf8 | Encoding::Ascii | Encoding::Latin1 => 1,
        }
    }

    /// Returns the canonical label of the encoding.
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf16 => "utf-16",
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "us-ascii",
            Encoding::Latin1 => "iso-8859-1",
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Parses an encoding label, ignoring case, `-` and `_`.
    fn from_str(label: &str) -> Result<Self> {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "" => Err(Error::InvalidArgument(
                "encoding label must not be empty".to_string(),
            )),
            "utf16" | "unicode" | "ucs2" => Ok(Encoding::Utf16),
            "utf8" => Ok(Encoding::Utf8),
            "ascii" | "usascii" => Ok(Encoding::Ascii),
            "latin1" | "iso88591" | "l1" => Ok(Encoding::Latin1),
            _ => Err(Error::InvalidArgument(format!(
                "unknown encoding `{}`",
                label.trim()
            ))),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
