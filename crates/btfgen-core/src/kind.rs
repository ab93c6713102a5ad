//! Canonical type kind definitions.
//!
//! `TypeKind` is the fieldless mirror of [`Type`](crate::Type). It is what
//! errors and diagnostics carry when they need to name a kind without
//! borrowing the node itself.

use std::fmt;

/// Kinds of type graph nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    /// The `void` type (BTF type id 0).
    Void,
    /// Fixed-width integer.
    Int,
    /// Pointer to another type.
    Pointer,
    /// Fixed-length array.
    Array,
    /// Record with members at fixed offsets.
    Struct,
    /// Overlapping members sharing offset 0.
    Union,
    /// Enumeration of named 32-bit constants.
    Enum,
    /// Forward declaration of a struct or union.
    Fwd,
    /// Named alias of another type.
    Typedef,
    /// `const`, `volatile`, `restrict` or type tag wrapper.
    Qualifier,
    /// Function.
    Func,
    /// Function prototype.
    FuncProto,
    /// Variable placed in a data section.
    Var,
    /// Linker data section.
    Datasec,
    /// Floating point number.
    Float,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Int => "int",
            Self::Pointer => "pointer",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
            Self::Fwd => "fwd",
            Self::Typedef => "typedef",
            Self::Qualifier => "qualifier",
            Self::Func => "func",
            Self::FuncProto => "func_proto",
            Self::Var => "var",
            Self::Datasec => "datasec",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
