//! Small, pure transforms over slices and hash maps.
//!
//! Every function borrows its input and returns a freshly allocated `Vec`.
//! Nothing here performs I/O, holds state between calls, or catches panics
//! raised by caller-supplied closures.
//!
//! - **[`seq`]**: element-wise transforms, predicate filters and
//!   first-occurrence deduplication over ordered slices.
//! - **[`map`]**: materialize the keys or values of a `HashMap` into a `Vec`.
//!   Output order follows the map's iteration order and is unspecified.

pub mod map;
pub mod seq;

pub use map::{keys, values};
pub use seq::{apply, reject, select, try_apply, unique, unique_by};
