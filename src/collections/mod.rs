pub mod cast_vec;

pub use cast_vec::CastVec;
