use crate::scalar::Scalar;
use crate::{Error, Result};

/// Reads a `T` from `bytes` starting at `offset`.
///
/// The bytes are taken as `T`'s native bit pattern without any conversion.
/// The offset doesn't need to be aligned.
///
/// # Arguments
///
/// * `bytes` - the buffer to read from.
/// * `offset` - index of the first byte of the value.
///
/// # Errors
///
/// [`Error::OutOfRange`] if fewer than `size_of::<T>()` bytes follow `offset`.
#[inline]
pub fn read_scalar<T: Scalar>(bytes: &[u8], offset: usize) -> Result<T> {
    let span = offset
        .checked_add(T::SIZE)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(Error::OutOfRange {
            offset,
            size: T::SIZE,
            len: bytes.len(),
        })?;

    Ok(bytemuck::pod_read_unaligned(span))
}

/// Reads a `T` from the start of `bytes`.
#[inline]
pub fn read_scalar_at_start<T: Scalar>(bytes: &[u8]) -> Result<T> {
    read_scalar(bytes, 0)
}

/// Reads a `T` from raw memory.
///
/// # Safety
///
/// `ptr` must be valid for reads of `size_of::<T>()` bytes. It doesn't need to
/// be aligned.
#[inline]
pub unsafe fn read_scalar_from_ptr<T: Scalar>(ptr: *const u8) -> T {
    // SAFETY: the caller guarantees the span is readable, and every bit
    // pattern is a valid `T`.
    unsafe { std::ptr::read_unaligned(ptr.cast::<T>()) }
}

/// Returns a new buffer holding the bytes of `value`.
#[inline]
pub fn write_scalar<T: Scalar>(value: T) -> Vec<u8> {
    bytemuck::bytes_of(&value).to_vec()
}

/// Writes the bytes of `value` into `buffer` starting at `offset`.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if there is no room for the value; the buffer is
/// left untouched in that case.
#[inline]
pub fn write_scalar_into<T: Scalar>(value: T, buffer: &mut [u8], offset: usize) -> Result<()> {
    let available = buffer.len().saturating_sub(offset);

    if available < T::SIZE {
        return Err(Error::BufferTooSmall {
            needed: T::SIZE,
            available,
        });
    }

    buffer[offset..offset + T::SIZE].copy_from_slice(bytemuck::bytes_of(&value));

    Ok(())
}
