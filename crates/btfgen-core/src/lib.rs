#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for btfgen.
//!
//! The type graph is the parsed, in-memory form of a BTF-style type
//! description:
//! - **Nodes** (`Type`): one variant per kind, with kind-specific payloads
//! - **Identity** (`TypeId`): handles into the arena, the only notion of
//!   "same type"
//! - **Names** (`NameTable`): externally chosen names keyed by identity
//!
//! Decoding the binary format is not done here. Graphs are built in code or
//! loaded from JSON with [`TypeGraph::from_json`].

mod graph;
pub mod kind;
pub mod types;
pub mod utils;

#[cfg(test)]
mod kind_tests;

pub use graph::{NameTable, TypeGraph, TypeId};
pub use kind::TypeKind;
pub use types::{
    Array, Datasec, Enum, EnumValue, Float, Func, FuncParam, FuncProto, Fwd, FwdKind, Int,
    IntEncoding, Linkage, Member, POINTER_SIZE, Pointer, Qualifier, QualifierKind, Struct, Type,
    Typedef, Union, Var, VarSecinfo,
};
