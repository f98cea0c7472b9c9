mod pod_bool;
mod pod_char;

pub use pod_bool::*;
pub use pod_char::*;
