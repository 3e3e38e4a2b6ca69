//! Track catalog: the fixed, ordered list of playable tracks.
//!
//! The catalog is validated once at construction and never changes for
//! the rest of the session. A built-in playlist ships with the binary;
//! `load` can read one from a TOML file instead.

mod builtin;
mod load;
mod model;

pub use builtin::builtin;
pub use load::from_path;
pub use model::*;
