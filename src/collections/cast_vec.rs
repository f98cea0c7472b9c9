use bytemuck::{Pod, PodCastError};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use crate::error::CastError;
use crate::Error;

/// Storage of a [`CastVec`].
enum Storage<T, S> {
    /// The original allocation, viewed as `[T]`.
    Relabelled(Vec<S>),

    /// Elements owned as `T` directly.
    Owned(Vec<T>),
}

/// An owned `[T]` backed by storage that was allocated as `Vec<S>`.
///
/// This is what the consuming conversions return: the source vector is moved
/// in and its allocation is presented as a slice of `T` without copying. The
/// allocation keeps its original element type so it is released with the
/// layout it was allocated with.
///
/// When the source allocation is not aligned for `T` the elements are copied
/// once into a `Vec<T>` instead, since a misaligned `&[T]` can't exist.
/// [`CastVec::is_relabelled`] tells the two cases apart.
pub struct CastVec<T: Pod, S: Pod = u8> {
    storage: Storage<T, S>,
}

impl<T: Pod, S: Pod> CastVec<T, S> {
    /// Takes ownership of `source` and views it as `[T]`.
    ///
    /// An empty `source` has no allocation to reuse and always yields an
    /// empty owned vector, so [`CastVec::is_relabelled`] is `false` for it.
    ///
    /// # Errors
    ///
    /// [`Error::MismatchedLength`] if the byte length of `source` is not a
    /// multiple of the size of `T`; `source` is returned inside the error.
    pub fn relabel(source: Vec<S>) -> Result<Self, CastError<Vec<S>>> {
        let len = std::mem::size_of_val(source.as_slice());
        let element_size = std::mem::size_of::<T>();

        if element_size == 0 || len % element_size != 0 {
            return Err(CastError::new(
                Error::MismatchedLength { len, element_size },
                source,
            ));
        }

        if source.is_empty() {
            return Ok(Vec::new().into());
        }

        match bytemuck::try_cast_slice::<S, T>(source.as_slice()) {
            Ok(_) => Ok(Self {
                storage: Storage::Relabelled(source),
            }),
            Err(PodCastError::TargetAlignmentGreaterAndInputNotAligned) => Ok(Self {
                storage: Storage::Owned(bytemuck::pod_collect_to_vec(source.as_slice())),
            }),
            Err(_) => Err(CastError::new(
                Error::MismatchedLength { len, element_size },
                source,
            )),
        }
    }

    /// Indicates whether the elements live in the original allocation.
    pub fn is_relabelled(&self) -> bool {
        matches!(self.storage, Storage::Relabelled(_))
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Relabelled(source) => bytemuck::cast_slice(source.as_slice()),
            Storage::Owned(values) => values,
        }
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Relabelled(source) => bytemuck::cast_slice_mut(source.as_mut_slice()),
            Storage::Owned(values) => values,
        }
    }

    /// Returns the raw bytes of the elements.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Returns the original allocation, or `self` if the elements were
    /// copied out of it.
    pub fn try_into_source(self) -> Result<Vec<S>, Self> {
        match self.storage {
            Storage::Relabelled(source) => Ok(source),
            storage => Err(Self { storage }),
        }
    }

    /// Converts into a `Vec<T>`.
    ///
    /// This reuses the allocation when `S` and `T` share an alignment, and
    /// copies otherwise.
    pub fn into_vec(self) -> Vec<T> {
        match self.storage {
            Storage::Relabelled(source) => match bytemuck::allocation::try_cast_vec(source) {
                Ok(values) => values,
                Err((_, source)) => bytemuck::pod_collect_to_vec(source.as_slice()),
            },
            Storage::Owned(values) => values,
        }
    }
}

impl<S: Pod> CastVec<u8, S> {
    /// Takes ownership of `source` and views it as bytes.
    ///
    /// This can't fail: bytes have no alignment and every size is a multiple
    /// of one.
    pub fn relabel_bytes(source: Vec<S>) -> Self {
        Self {
            storage: Storage::Relabelled(source),
        }
    }
}

impl<T: Pod, S: Pod> From<Vec<T>> for CastVec<T, S> {
    fn from(values: Vec<T>) -> Self {
        Self {
            storage: Storage::Owned(values),
        }
    }
}

impl<T: Pod, S: Pod> From<CastVec<T, S>> for Vec<T> {
    fn from(values: CastVec<T, S>) -> Self {
        values.into_vec()
    }
}

impl<T: Pod, S: Pod> Clone for CastVec<T, S> {
    /// Clones into a fresh `Vec<T>`; a copy of the source allocation would
    /// not be guaranteed to be aligned for `T`.
    fn clone(&self) -> Self {
        self.to_vec().into()
    }
}

impl<T: Pod, S: Pod> Default for CastVec<T, S> {
    fn default() -> Self {
        Vec::new().into()
    }
}

impl<T: Pod, S: Pod> Deref for CastVec<T, S> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Pod, S: Pod> DerefMut for CastVec<T, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Pod, S: Pod> AsRef<[T]> for CastVec<T, S> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T: Pod + Debug, S: Pod> Debug for CastVec<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Pod + PartialEq, S: Pod> PartialEq<[T]> for CastVec<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Pod + PartialEq, S: Pod> PartialEq<Vec<T>> for CastVec<T, S> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Pod + PartialEq, S: Pod, R: Pod> PartialEq<CastVec<T, R>> for CastVec<T, S> {
    fn eq(&self, other: &CastVec<T, R>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T: Pod, S: Pod> IntoIterator for &'a CastVec<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
