//! Core definitions shared by all qresult-* crates: the error type, the result
//! alias and helper macros.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
