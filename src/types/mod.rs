mod encoding;
mod wide_string;

pub use encoding::*;
pub use wide_string::*;
