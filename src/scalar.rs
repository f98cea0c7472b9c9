//! Scalar types eligible for reinterpretation and their sizes.

use bytemuck::Pod;
use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::pod::{PodBool, PodChar};
use crate::{Error, Result};

/// Category of a scalar type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Integer,
    Float,
    Boolean,
    Character,
}

/// Byte size and category of a scalar type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScalarDescriptor {
    /// Rust name of the type.
    pub name: &'static str,

    /// Width of the type in bytes.
    pub size: usize,

    /// Category of the type.
    pub kind: ScalarKind,
}

mod private {
    pub trait Sealed {}
}

/// A fixed-size scalar whose every bit pattern is a valid value.
///
/// The trait is sealed: only the primitive integers, floats, [`PodBool`] and
/// [`PodChar`] implement it, so asking for the size of anything else fails to
/// compile.
pub trait Scalar: Pod + Debug + PartialEq + private::Sealed {
    /// Width of the type in bytes.
    const SIZE: usize = std::mem::size_of::<Self>();

    /// Category of the type.
    const KIND: ScalarKind;

    /// Rust name of the type.
    const NAME: &'static str;

    /// Descriptor of the type.
    const DESCRIPTOR: ScalarDescriptor = ScalarDescriptor {
        name: Self::NAME,
        size: Self::SIZE,
        kind: Self::KIND,
    };
}

macro_rules! impl_scalar {
    ($($t:ty => $kind:ident),*) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                const KIND: ScalarKind = ScalarKind::$kind;
                const NAME: &'static str = stringify!($t);
            }
        )*
    };
}

impl_scalar! {
    u8 => Integer,
    u16 => Integer,
    u32 => Integer,
    u64 => Integer,
    u128 => Integer,
    usize => Integer,
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    i128 => Integer,
    isize => Integer,
    f32 => Float,
    f64 => Float,
    PodBool => Boolean,
    PodChar => Character
}

/// Returns the byte width of `T`.
///
/// The value is a compile-time constant, so repeated calls always agree.
#[inline]
pub const fn size_of<T: Scalar>() -> usize {
    T::SIZE
}

/// Returns the descriptor of `T`.
#[inline]
pub const fn descriptor<T: Scalar>() -> ScalarDescriptor {
    T::DESCRIPTOR
}

static CATALOG: [ScalarDescriptor; 16] = [
    u8::DESCRIPTOR,
    u16::DESCRIPTOR,
    u32::DESCRIPTOR,
    u64::DESCRIPTOR,
    u128::DESCRIPTOR,
    usize::DESCRIPTOR,
    i8::DESCRIPTOR,
    i16::DESCRIPTOR,
    i32::DESCRIPTOR,
    i64::DESCRIPTOR,
    i128::DESCRIPTOR,
    isize::DESCRIPTOR,
    f32::DESCRIPTOR,
    f64::DESCRIPTOR,
    PodBool::DESCRIPTOR,
    PodChar::DESCRIPTOR,
];

/// Returns the descriptors of every supported scalar type.
pub fn catalog() -> &'static [ScalarDescriptor] {
    &CATALOG
}

impl ScalarDescriptor {
    /// Finds a scalar type by name.
    ///
    /// Accepts the Rust type names plus the aliases `byte`, `bool` and `char`
    /// (which resolve to `u8`, [`PodBool`] and [`PodChar`]).
    pub fn lookup(name: &str) -> Result<Self> {
        let name = name.trim();
        let canonical = match name {
            "byte" => "u8",
            "bool" => "PodBool",
            "char" => "PodChar",
            other => other,
        };

        CATALOG
            .iter()
            .find(|descriptor| descriptor.name == canonical)
            .copied()
            .ok_or_else(|| Error::NotPrimitive(name.to_string()))
    }
}

impl FromStr for ScalarDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s)
    }
}

impl Display for ScalarDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} bytes, {:?})", self.name, self.size, self.kind)
    }
}
