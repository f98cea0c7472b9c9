use bytemuck::PodCastError;
use std::borrow::Cow;

use crate::collections::CastVec;
use crate::error::CastError;
use crate::scalar::Scalar;
use crate::{Error, Result};

#[inline]
fn check_length<T: Scalar>(len: usize) -> Result<()> {
    if len % T::SIZE != 0 {
        return Err(Error::MismatchedLength {
            len,
            element_size: T::SIZE,
        });
    }

    Ok(())
}

/// Converts `bytes` into an array of `T`, leaving `bytes` untouched.
///
/// Single-byte element types borrow the input as is; wider types get a new
/// allocation holding a copy of the bytes.
///
/// # Errors
///
/// [`Error::MismatchedLength`] if the length of `bytes` is not a multiple of
/// the size of `T`.
pub fn bytes_to_array<T: Scalar>(bytes: &[u8]) -> Result<Cow<'_, [T]>> {
    check_length::<T>(bytes.len())?;

    if bytes.is_empty() {
        return Ok(Cow::Owned(Vec::new()));
    }

    if T::SIZE == 1 {
        return Ok(Cow::Borrowed(bytemuck::cast_slice(bytes)));
    }

    Ok(Cow::Owned(bytemuck::pod_collect_to_vec(bytes)))
}

/// Converts `bytes` into an array of `T` reusing its allocation.
///
/// `bytes` is consumed. Its storage is relabelled as `[T]` in constant time
/// unless the allocation is not aligned for `T`, in which case the elements
/// are copied once.
///
/// # Errors
///
/// [`Error::MismatchedLength`] if the length of `bytes` is not a multiple of
/// the size of `T`. The buffer is handed back inside the error.
pub fn bytes_to_array_destructive<T: Scalar>(bytes: Vec<u8>) -> Result<CastVec<T>, CastError> {
    let values = CastVec::relabel(bytes)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(
        scalar = T::NAME,
        len = values.len(),
        relabelled = values.is_relabelled(),
        "bytes converted to array"
    );

    Ok(values)
}

/// Returns a view of `bytes` as `[T]` without copying.
///
/// # Errors
///
/// [`Error::MismatchedLength`] if the length of `bytes` is not a multiple of
/// the size of `T`, or [`Error::Misaligned`] if `bytes` doesn't start at an
/// address aligned for `T`.
pub fn bytes_as_array<T: Scalar>(bytes: &[u8]) -> Result<&[T]> {
    check_length::<T>(bytes.len())?;

    if bytes.is_empty() {
        return Ok(&[]);
    }

    bytemuck::try_cast_slice(bytes).map_err(|error| match error {
        PodCastError::TargetAlignmentGreaterAndInputNotAligned
        | PodCastError::AlignmentMismatch => Error::Misaligned {
            align: std::mem::align_of::<T>(),
        },
        _ => Error::MismatchedLength {
            len: bytes.len(),
            element_size: T::SIZE,
        },
    })
}

/// Returns the bytes of `values`, leaving `values` untouched.
///
/// Single-byte element types borrow the input as is; wider types get a new
/// allocation holding a copy of the bytes.
pub fn array_to_bytes<T: Scalar>(values: &[T]) -> Cow<'_, [u8]> {
    let bytes: &[u8] = bytemuck::cast_slice(values);

    if T::SIZE == 1 {
        return Cow::Borrowed(bytes);
    }

    Cow::Owned(bytes.to_vec())
}

/// Converts `values` into bytes reusing its allocation.
///
/// `values` is consumed; this never copies.
pub fn array_to_bytes_destructive<T: Scalar>(values: Vec<T>) -> CastVec<u8, T> {
    let bytes = CastVec::relabel_bytes(values);

    #[cfg(feature = "tracing")]
    tracing::trace!(scalar = T::NAME, len = bytes.len(), "array converted to bytes");

    bytes
}

/// Returns a view of `values` as bytes without copying.
#[inline]
pub fn array_as_bytes<T: Scalar>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pod::PodBool;

    #[test]
    fn test_empty() {
        assert_eq!(bytes_to_array::<i32>(&[]).unwrap().as_ref(), &[] as &[i32]);
        assert!(bytes_to_array_destructive::<i32>(Vec::new()).unwrap().is_empty());
        assert!(array_to_bytes::<f64>(&[]).is_empty());
        assert!(array_to_bytes_destructive::<f64>(Vec::new()).is_empty());
    }

    #[test]
    fn test_mismatched_length() {
        let error = Error::MismatchedLength {
            len: 5,
            element_size: 4,
        };

        assert_eq!(bytes_to_array::<i32>(&[0; 5]), Err(error.clone()));
        assert_eq!(bytes_as_array::<i32>(&[0; 5]), Err(error.clone()));

        let failure = bytes_to_array_destructive::<i32>(vec![9; 5]).unwrap_err();
        assert_eq!(failure.error(), &error);
        assert_eq!(failure.into_bytes(), vec![9; 5]);

        assert!(matches!(
            bytes_to_array::<i32>(&[0; 3]),
            Err(Error::MismatchedLength { len: 3, .. })
        ));
    }

    #[test]
    fn test_bytes_are_identity() {
        let bytes = [1u8, 2, 3];
        let values = bytes_to_array::<u8>(&bytes).unwrap();

        assert!(matches!(values, Cow::Borrowed(_)));
        assert_eq!(values.as_ptr(), bytes.as_ptr());

        let back = array_to_bytes(&bytes);
        assert!(matches!(back, Cow::Borrowed(_)));
        assert_eq!(back.as_ptr(), bytes.as_ptr());

        let signed = [-1i8, 5];
        assert_eq!(array_to_bytes(&signed).as_ptr(), signed.as_ptr().cast::<u8>());

        let flags = bytes_to_array::<PodBool>(&[0, 1]).unwrap();
        assert_eq!(flags.iter().map(|f| f.get()).collect::<Vec<_>>(), vec![false, true]);
    }

    #[test]
    fn test_bytes_to_array_copies() {
        let floats = [1.0f32, -2.5, 1e10];
        let bytes = array_to_bytes(&floats);
        let values = bytes_to_array::<f32>(&bytes).unwrap();

        assert!(matches!(values, Cow::Owned(_)));
        assert_eq!(values.as_ref(), &[1.0, -2.5, 1e10]);
        // the source is still usable
        assert_eq!(bytes.len(), 12);
    }

    #[test]
    fn test_destructive_matches_preserving() {
        let units = [u16::MAX, 0, 0x1234, 7];
        let bytes = array_to_bytes(&units);

        let preserving = bytes_to_array::<u16>(&bytes).unwrap().into_owned();
        let destructive = bytes_to_array_destructive::<u16>(bytes.into_owned()).unwrap();

        assert_eq!(destructive, preserving);
    }

    #[test]
    fn test_array_to_bytes_destructive_keeps_storage() {
        let values = vec![i64::MIN, 42];
        let address = values.as_ptr() as usize;
        let expected: Cow<'static, [u8]> = Cow::Owned(array_to_bytes(&values).into_owned());

        let bytes = array_to_bytes_destructive(values);

        assert!(bytes.is_relabelled());
        assert_eq!(bytes.as_ptr() as usize, address);
        assert_eq!(bytes.as_slice(), expected.as_ref());
    }

    #[test]
    fn test_views() {
        let values = [3u32, 4];
        let bytes = array_as_bytes(&values);

        assert_eq!(bytes.len(), 8);
        assert_eq!(bytes_as_array::<u32>(bytes), Ok(&values[..]));
    }

    #[test]
    fn test_view_empty_at_any_address() {
        let values = [0u32; 2];
        let bytes = array_as_bytes(&values);

        assert_eq!(bytes_as_array::<u32>(&bytes[1..1]), Ok(&[][..]));
        assert_eq!(bytes_as_array::<u64>(&bytes[3..3]), Ok(&[][..]));
    }

    #[test]
    fn test_array_to_bytes_copies_wide_types() {
        let values = [1u16, 2];
        let bytes = array_to_bytes(&values);

        assert!(matches!(bytes, Cow::Owned(_)));
        assert_eq!(bytes.as_ref(), array_as_bytes(&values));
    }

    #[test]
    fn test_view_misaligned() {
        let values = [0u32; 4];
        let bytes = &array_as_bytes(&values)[1..13];

        assert_eq!(
            bytes_as_array::<u32>(bytes),
            Err(Error::Misaligned { align: 4 })
        );
        // the copying conversion doesn't care about alignment
        assert_eq!(bytes_to_array::<u32>(bytes).unwrap().as_ref(), &[0, 0, 0]);
    }
}
