//! btfgen: Go type declarations from BTF type graphs.
//!
//! This crate turns nodes of a [`TypeGraph`](btfgen_core::TypeGraph) into Go
//! source text:
//! - `qualifiers` - stripping of const/volatile/restrict wrappers
//! - `layout` - member sizes and padding between members
//! - `typegen` - the Go declaration formatter
//!
//! ```
//! use btfgen::{GoFormatter, NameTable};
//! use btfgen_core::{Int, IntEncoding, Member, Struct, Type, TypeGraph};
//!
//! let mut graph = TypeGraph::new();
//! let u32_ty = graph.add(Type::Int(Int {
//!     name: "u32".into(),
//!     size: 4,
//!     encoding: IntEncoding::UNSIGNED,
//! }));
//! let stats = graph.add(Type::Struct(Struct {
//!     name: "stats".into(),
//!     size: 8,
//!     members: vec![Member::new("packets", u32_ty, 0)],
//! }));
//!
//! let names = NameTable::new();
//! let decl = GoFormatter::new(&graph, &names).declare("stats", stats).unwrap();
//! assert_eq!(decl, "type stats struct { packets uint32; _ [4]byte; }");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod error;
pub mod layout;
pub mod qualifiers;
pub mod typegen;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod layout_tests;

pub use btfgen_core::{NameTable, TypeGraph, TypeId};
pub use error::{FormatError, Location};
pub use typegen::golang::{Config, GoFormatter, IdentifierPolicy, PascalCase, Prefixed, Verbatim};

/// Longest qualifier, typedef or array chain followed when resolving a type
/// or computing its size. Matches the BTF loader's limit on type chain length.
pub const MAX_TYPE_DEPTH: usize = 32;

/// Result type for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
