use crate::collections::CastVec;
use crate::error::CastError;
use crate::types::{Encoding, WideString};
use crate::{Error, Result};

#[inline]
fn check_length(len: usize, encoding: Encoding) -> Result<()> {
    let element_size = encoding.code_unit_size();

    if len % element_size != 0 {
        return Err(Error::MismatchedLength { len, element_size });
    }

    Ok(())
}

fn utf8_lossy(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|error| String::from_utf8_lossy(error.as_bytes()).into_owned())
}

/// Encodes `s` as UTF-16 code units in native byte order.
pub fn string_to_bytes(s: &str) -> Vec<u8> {
    string_to_bytes_with(s, Encoding::Utf16)
}

/// Encodes `s` with `encoding`.
///
/// Characters that ASCII or Latin-1 can't represent are written as `?`.
pub fn string_to_bytes_with(s: &str, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf16 => {
            let mut bytes = Vec::with_capacity(s.len() * 2);
            for unit in s.encode_utf16() {
                bytes.extend_from_slice(bytemuck::bytes_of(&unit));
            }
            bytes
        }
        Encoding::Utf8 => s.as_bytes().to_vec(),
        Encoding::Ascii => s
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect(),
        Encoding::Latin1 => s.chars().map(|c| u8::try_from(c).unwrap_or(b'?')).collect(),
    }
}

/// Encodes `s` with `encoding`, reusing its allocation when the encoded
/// bytes are identical to the UTF-8 ones.
pub fn string_into_bytes(s: String, encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Utf8 => s.into_bytes(),
        Encoding::Ascii | Encoding::Latin1 if s.is_ascii() => s.into_bytes(),
        _ => string_to_bytes_with(&s, encoding),
    }
}

/// Decodes UTF-16 code units in native byte order, leaving `bytes` untouched.
///
/// # Errors
///
/// [`Error::MismatchedLength`] if the length of `bytes` is odd.
pub fn bytes_to_string(bytes: &[u8]) -> Result<String> {
    bytes_to_string_with(bytes, Encoding::Utf16)
}

/// Decodes `bytes` with `encoding`, leaving `bytes` untouched.
///
/// Malformed input doesn't fail: invalid UTF-8 sequences and unpaired UTF-16
/// surrogates become U+FFFD, and non-ASCII bytes become `?` under ASCII.
///
/// # Errors
///
/// [`Error::MismatchedLength`] if the length of `bytes` is not a multiple of
/// the code unit size of `encoding`.
pub fn bytes_to_string_with(bytes: &[u8], encoding: Encoding) -> Result<String> {
    check_length(bytes.len(), encoding)?;

    let s: String = match encoding {
        Encoding::Utf16 => {
            let units = bytes.chunks_exact(2).map(bytemuck::pod_read_unaligned::<u16>);
            char::decode_utf16(units)
                .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect()
        }
        Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        Encoding::Ascii => bytes
            .iter()
            .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
            .collect(),
        Encoding::Latin1 => bytes.iter().copied().map(char::from).collect(),
    };

    Ok(s)
}

/// Decodes `bytes` with `encoding`, consuming the buffer.
///
/// When the bytes already have the layout of a `str` (valid UTF-8, or ASCII)
/// the buffer becomes the `String` without copying. UTF-16 input is relabelled
/// as code units first and decoded from there.
///
/// # Errors
///
/// [`Error::MismatchedLength`] if the length of `bytes` is not a multiple of
/// the code unit size of `encoding`. The buffer is handed back inside the
/// error.
pub fn bytes_into_string(bytes: Vec<u8>, encoding: Encoding) -> Result<String, CastError> {
    if let Err(error) = check_length(bytes.len(), encoding) {
        return Err(CastError::new(error, bytes));
    }

    match encoding {
        Encoding::Utf8 => Ok(utf8_lossy(bytes)),
        Encoding::Ascii | Encoding::Latin1 if bytes.is_ascii() => Ok(utf8_lossy(bytes)),
        Encoding::Utf16 => Ok(bytes_into_wide(bytes)?.to_string_lossy()),
        _ => bytes_to_string_with(&bytes, encoding).map_err(|error| CastError::new(error, bytes)),
    }
}

/// Relabels `bytes` as UTF-16 code units in native byte order.
///
/// `bytes` is consumed and its storage backs the returned string; no decoding
/// takes place.
///
/// # Errors
///
/// [`Error::MismatchedLength`] if the length of `bytes` is odd. The buffer is
/// handed back inside the error.
pub fn bytes_into_wide(bytes: Vec<u8>) -> Result<WideString, CastError> {
    let units = CastVec::<u16>::relabel(bytes)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        len = units.len(),
        relabelled = units.is_relabelled(),
        "bytes converted to wide string"
    );

    Ok(WideString::from_cast_vec(units))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(u16::to_ne_bytes).collect()
    }

    #[test]
    fn test_utf16_round_trip() {
        let bytes = string_to_bytes("ab");

        assert_eq!(bytes, utf16("ab"));
        #[cfg(target_endian = "little")]
        assert_eq!(bytes, vec![0x61, 0x00, 0x62, 0x00]);

        assert_eq!(bytes_to_string(&bytes), Ok("ab".to_string()));
        assert_eq!(bytes_into_string(bytes, Encoding::Utf16).unwrap(), "ab");
    }

    #[test]
    fn test_empty() {
        for encoding in Encoding::ALL {
            assert!(string_to_bytes_with("", encoding).is_empty());
            assert_eq!(bytes_to_string_with(&[], encoding), Ok(String::new()));
            assert_eq!(bytes_into_string(Vec::new(), encoding).unwrap(), "");
        }
    }

    #[test]
    fn test_various_strings() {
        for s in [
            "test",
            " ",
            "\t",
            "Heloooooooooooooooooooooooo",
            "asd89asd98ahsd893598nioasop)*(AJ*(D(*SHDF(H#%*(H*F(Snsf",
            "grüße \u{1F600}",
        ] {
            assert_eq!(string_to_bytes(s), utf16(s));
            assert_eq!(bytes_to_string(&utf16(s)).as_deref(), Ok(s));
            assert_eq!(bytes_into_string(utf16(s), Encoding::Utf16).unwrap(), s);
        }
    }

    #[test]
    fn test_odd_length() {
        let error = Error::MismatchedLength {
            len: 3,
            element_size: 2,
        };

        assert_eq!(bytes_to_string(&[0x61, 0x00, 0x62]), Err(error.clone()));

        let failure = bytes_into_string(vec![0x61, 0x00, 0x62], Encoding::Utf16).unwrap_err();
        assert_eq!(failure.error(), &error);
        assert_eq!(failure.into_bytes(), vec![0x61, 0x00, 0x62]);

        assert!(bytes_into_wide(vec![0]).is_err());
        // single-byte encodings accept any length
        assert_eq!(
            bytes_to_string_with(&[0x61, 0x62, 0x63], Encoding::Ascii),
            Ok("abc".to_string())
        );
    }

    #[test]
    fn test_zero_filled_buffers() {
        for len in 0..64 {
            let bytes = vec![0u8; len * 2];
            let s = bytes_into_string(bytes, Encoding::Utf16).unwrap();

            assert_eq!(s.chars().count(), len);
            assert!(s.chars().all(|c| c == '\0'));
        }
    }

    #[test]
    fn test_utf8_is_zero_copy() {
        let bytes = "grüße".as_bytes().to_vec();
        let address = bytes.as_ptr() as usize;

        let s = bytes_into_string(bytes, Encoding::Utf8).unwrap();
        assert_eq!(s, "grüße");
        assert_eq!(s.as_ptr() as usize, address);

        let s = String::from("plain");
        let address = s.as_ptr() as usize;
        let bytes = string_into_bytes(s, Encoding::Ascii);
        assert_eq!(bytes.as_ptr() as usize, address);
    }

    #[test]
    fn test_lossy_decoding() {
        assert_eq!(
            bytes_to_string_with(&[0x61, 0xFF], Encoding::Utf8),
            Ok("a\u{FFFD}".to_string())
        );
        assert_eq!(
            bytes_into_string(vec![0x61, 0xFF], Encoding::Utf8).unwrap(),
            "a\u{FFFD}"
        );
        assert_eq!(
            bytes_to_string_with(&[0x61, 0xE9], Encoding::Ascii),
            Ok("a?".to_string())
        );
        assert_eq!(
            bytes_into_string(vec![0x61, 0xE9], Encoding::Latin1).unwrap(),
            "aé"
        );

        let units = bytemuck::cast_slice::<u16, u8>(&[0x61, 0xDC00]).to_vec();
        assert_eq!(bytes_to_string(&units), Ok("a\u{FFFD}".to_string()));
    }

    #[test]
    fn test_unrepresentable_characters() {
        assert_eq!(string_to_bytes_with("aé", Encoding::Ascii), b"a?".to_vec());
        assert_eq!(string_to_bytes_with("aé", Encoding::Latin1), vec![0x61, 0xE9]);
        assert_eq!(string_to_bytes_with("a€", Encoding::Latin1), b"a?".to_vec());
        assert_eq!(
            string_into_bytes("a€".to_string(), Encoding::Latin1),
            b"a?".to_vec()
        );
        assert_eq!(
            string_to_bytes_with("aé", Encoding::Utf8),
            "aé".as_bytes().to_vec()
        );
    }

    #[test]
    fn test_bytes_into_wide() {
        let wide = bytes_into_wide(utf16("wide")).unwrap();

        assert_eq!(wide, "wide");
        assert_eq!(wide.len(), 4);
        assert_eq!(wide.into_bytes(), utf16("wide"));
    }
}
