//! Total converters from Flutter literal text to React Native style values.
//!
//! None of these fail: unrecognized input maps to a fixed default or an empty
//! style.

pub mod align;
pub mod border;
pub mod color;
pub mod font;
pub mod insets;
pub mod number;
pub mod radius;

pub use color::to_hex;
pub use number::{parse_number, to_number};
pub use radius::BorderRadius;
