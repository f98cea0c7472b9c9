pub mod array;
pub mod scalar;
pub mod text;
pub mod widen;

pub use array::*;
pub use scalar::*;
pub use text::*;
pub use widen::*;
