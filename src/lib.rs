//! Reinterpret byte buffers as scalar values and arrays, and back, without
//! re-encoding.
//!
//! Conversions that borrow their input leave it untouched and copy into a new
//! allocation when needed. Conversions that take a `Vec` by value reuse its
//! allocation for the result; the compiler then rules out any further use of
//! the original handle.
//!
//! ```
//! use recast::{Reinterpret, ToBytes};
//!
//! let bytes = 5i32.to_bytes();
//! assert_eq!(bytes.reinterpret::<i32>(), Ok(5));
//!
//! let values = recast::bytes_to_array_destructive::<u16>(bytes).unwrap();
//! assert_eq!(values.len(), 2);
//! ```

use std::borrow::Cow;

pub mod codec;
pub mod collections;
mod error;
pub mod pod;
pub mod scalar;
pub mod types;

pub use codec::{
    array_as_bytes, array_to_bytes, array_to_bytes_destructive, bytes_as_array, bytes_into_string,
    bytes_into_wide, bytes_to_array, bytes_to_array_destructive, bytes_to_string,
    bytes_to_string_with, read_scalar, read_scalar_at_start, read_scalar_from_ptr,
    reinterpret_as, string_into_bytes, string_to_bytes, string_to_bytes_with, write_scalar,
    write_scalar_into, MAX_REINTERPRET_SIZE,
};
pub use collections::CastVec;
pub use error::{CastError, Error, Result};
pub use pod::{PodBool, PodChar};
pub use scalar::{Scalar, ScalarDescriptor, ScalarKind};
pub use types::{Encoding, WideString};

/// Trait to read scalars, arrays and text out of borrowed bytes.
///
/// None of the methods modify or consume the buffer.
pub trait Reinterpret {
    fn reinterpret_bytes(&self) -> &[u8];

    /// Reads a `T` from the start of the buffer.
    fn reinterpret<T: Scalar>(&self) -> Result<T> {
        codec::read_scalar(self.reinterpret_bytes(), 0)
    }

    /// Reads a `T` starting at `offset`.
    fn reinterpret_at<T: Scalar>(&self, offset: usize) -> Result<T> {
        codec::read_scalar(self.reinterpret_bytes(), offset)
    }

    /// Converts the whole buffer into an array of `T`.
    fn reinterpret_to_array<T: Scalar>(&self) -> Result<Cow<'_, [T]>> {
        codec::bytes_to_array(self.reinterpret_bytes())
    }

    /// Decodes the buffer as UTF-16 text.
    fn reinterpret_to_string(&self) -> Result<String> {
        codec::bytes_to_string(self.reinterpret_bytes())
    }

    /// Decodes the buffer with `encoding`.
    fn reinterpret_to_string_with(&self, encoding: Encoding) -> Result<String> {
        codec::bytes_to_string_with(self.reinterpret_bytes(), encoding)
    }
}

impl Reinterpret for [u8] {
    #[inline]
    fn reinterpret_bytes(&self) -> &[u8] {
        self
    }
}

impl Reinterpret for Vec<u8> {
    #[inline]
    fn reinterpret_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Reinterpret for [u8; N] {
    #[inline]
    fn reinterpret_bytes(&self) -> &[u8] {
        self
    }
}

/// Trait to turn an owned byte buffer into typed data, reusing its storage.
pub trait ReinterpretInto: Sized {
    /// Relabels the buffer as an array of `T`.
    fn reinterpret_into_array<T: Scalar>(self) -> Result<CastVec<T>, CastError>;

    /// Decodes the buffer with `encoding`.
    fn reinterpret_into_string(self, encoding: Encoding) -> Result<String, CastError>;
}

impl ReinterpretInto for Vec<u8> {
    fn reinterpret_into_array<T: Scalar>(self) -> Result<CastVec<T>, CastError> {
        codec::bytes_to_array_destructive(self)
    }

    fn reinterpret_into_string(self, encoding: Encoding) -> Result<String, CastError> {
        codec::bytes_into_string(self, encoding)
    }
}

/// Trait to get the bytes of a scalar value.
pub trait ToBytes: Scalar {
    /// Returns a new buffer holding the bytes of the value.
    fn to_bytes(self) -> Vec<u8> {
        codec::write_scalar(self)
    }

    /// Writes the bytes of the value into `buffer` starting at `offset`.
    fn write_to(self, buffer: &mut [u8], offset: usize) -> Result<()> {
        codec::write_scalar_into(self, buffer, offset)
    }

    /// Reinterprets the bit pattern of the value as a `Dst`.
    fn reinterpret_as<Dst: Scalar>(self) -> Result<Dst> {
        codec::reinterpret_as(self)
    }
}

impl<T: Scalar> ToBytes for T {}

/// Trait to get the bytes of an array of scalars.
pub trait ArrayToBytes {
    /// Returns a new buffer holding the bytes of the elements.
    fn to_byte_vec(&self) -> Vec<u8>;

    /// Returns the bytes of the elements without copying.
    fn as_byte_slice(&self) -> &[u8];
}

impl<T: Scalar> ArrayToBytes for [T] {
    fn to_byte_vec(&self) -> Vec<u8> {
        codec::array_to_bytes(self).into_owned()
    }

    fn as_byte_slice(&self) -> &[u8] {
        codec::array_as_bytes(self)
    }
}
