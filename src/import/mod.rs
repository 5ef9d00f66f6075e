//! Reading roster grids into normalized shift assignments.

pub mod wide;

pub use wide::{decode, decode_file};
