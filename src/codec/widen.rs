use crate::scalar::Scalar;
use crate::{Error, Result};

/// Widest value [`reinterpret_as`] accepts, in bytes.
pub const MAX_REINTERPRET_SIZE: usize = 8;

/// Reinterprets the bit pattern of `value` as a `Dst`.
///
/// Both types must be at most [`MAX_REINTERPRET_SIZE`] bytes wide. When `Dst`
/// is narrower the leading `size_of::<Dst>()` bytes of `value` are kept; when
/// it is wider the bytes of `value` are placed first and the rest is filled
/// with zeros. On little-endian targets this is truncation and
/// zero-extension of the integer value. Negative values are never
/// sign-extended: `-1i16` becomes `0x0000_FFFF` as an `i32`.
///
/// # Errors
///
/// [`Error::UnsupportedSize`] if either type is wider than 8 bytes.
#[inline]
pub fn reinterpret_as<Src: Scalar, Dst: Scalar>(value: Src) -> Result<Dst> {
    if Src::SIZE > MAX_REINTERPRET_SIZE || Dst::SIZE > MAX_REINTERPRET_SIZE {
        return Err(Error::UnsupportedSize {
            from: Src::SIZE,
            to: Dst::SIZE,
        });
    }

    let mut scratch = [0u8; MAX_REINTERPRET_SIZE];
    scratch[..Src::SIZE].copy_from_slice(bytemuck::bytes_of(&value));

    Ok(bytemuck::pod_read_unaligned(&scratch[..Dst::SIZE]))
}
