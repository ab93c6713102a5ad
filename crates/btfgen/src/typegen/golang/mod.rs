//! Go type declarations from a type graph.
//!
//! Output follows the Go grammar for type declarations and type literals:
//! - integers map to fixed-width `intN` / `uintN`, one-byte booleans to `bool`
//! - enums become `int32` plus a block of typed constants
//! - structs, unions and data sections become struct literals, with
//!   `_ [N]byte` padding that keeps every field at its original offset
//!
//! Constructs Go cannot express faithfully (bitfields, anonymous members,
//! sub-byte offsets, pointers, functions) are rejected with a
//! [`FormatError`](crate::FormatError) rather than approximated.

mod config;
mod emitter;
mod naming;
mod render;


pub use config::{Config, DEFAULT_MAX_DEPTH};
pub use emitter::GoFormatter;
pub use naming::{IdentifierPolicy, PascalCase, Prefixed, Verbatim};
