//! Type graph nodes.
//!
//! One struct per kind, joined by the closed [`Type`] enum. Nodes refer to
//! each other through [`TypeId`] handles into the owning
//! [`TypeGraph`](crate::TypeGraph).

use serde::{Deserialize, Serialize};

use crate::TypeId;
use crate::kind::TypeKind;

/// A node of the type graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Void,
    Int(Int),
    Float(Float),
    Pointer(Pointer),
    Array(Array),
    Struct(Struct),
    Union(Union),
    Enum(Enum),
    Fwd(Fwd),
    Typedef(Typedef),
    Qualifier(Qualifier),
    Func(Func),
    FuncProto(FuncProto),
    Var(Var),
    Datasec(Datasec),
}

impl Type {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Void => TypeKind::Void,
            Self::Int(_) => TypeKind::Int,
            Self::Float(_) => TypeKind::Float,
            Self::Pointer(_) => TypeKind::Pointer,
            Self::Array(_) => TypeKind::Array,
            Self::Struct(_) => TypeKind::Struct,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::Fwd(_) => TypeKind::Fwd,
            Self::Typedef(_) => TypeKind::Typedef,
            Self::Qualifier(_) => TypeKind::Qualifier,
            Self::Func(_) => TypeKind::Func,
            Self::FuncProto(_) => TypeKind::FuncProto,
            Self::Var(_) => TypeKind::Var,
            Self::Datasec(_) => TypeKind::Datasec,
        }
    }

    /// The node's own name. Empty for anonymous and nameless kinds.
    pub fn name(&self) -> &str {
        match self {
            Self::Int(t) => &t.name,
            Self::Float(t) => &t.name,
            Self::Struct(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::Fwd(t) => &t.name,
            Self::Typedef(t) => &t.name,
            Self::Func(t) => &t.name,
            Self::Var(t) => &t.name,
            Self::Datasec(t) => &t.name,
            Self::Void
            | Self::Pointer(_)
            | Self::Array(_)
            | Self::Qualifier(_)
            | Self::FuncProto(_) => "",
        }
    }

    /// Size in bytes for kinds that declare one.
    ///
    /// Pointers are always 8 bytes wide. Arrays, typedefs and qualifiers
    /// derive their size from what they wrap and return `None` here.
    pub fn declared_size(&self) -> Option<u32> {
        match self {
            Self::Int(t) => Some(t.size),
            Self::Float(t) => Some(t.size),
            Self::Pointer(_) => Some(POINTER_SIZE),
            Self::Struct(t) => Some(t.size),
            Self::Union(t) => Some(t.size),
            Self::Enum(t) => Some(t.size),
            Self::Datasec(t) => Some(t.size),
            _ => None,
        }
    }
}

/// Width of a pointer on the targets described by BTF.
pub const POINTER_SIZE: u32 = 8;

/// Integer encoding flags as stored in BTF (`BTF_INT_SIGNED` and friends).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntEncoding(u8);

impl IntEncoding {
    pub const UNSIGNED: Self = Self(0);
    pub const SIGNED: Self = Self(1);
    pub const CHAR: Self = Self(2);
    pub const BOOL: Self = Self(4);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_signed(self) -> bool {
        self.0 & Self::SIGNED.0 != 0
    }

    pub fn is_char(self) -> bool {
        self.0 & Self::CHAR.0 != 0
    }

    pub fn is_bool(self) -> bool {
        self.0 & Self::BOOL.0 != 0
    }
}

impl std::ops::BitOr for IntEncoding {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Int {
    #[serde(default)]
    pub name: String,
    /// Size in bytes.
    pub size: u32,
    #[serde(default)]
    pub encoding: IntEncoding,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Float {
    #[serde(default)]
    pub name: String,
    pub size: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    #[serde(rename = "type")]
    pub ty: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Array {
    /// Element type.
    #[serde(rename = "type")]
    pub ty: TypeId,
    pub nelems: u32,
}

/// A member of a struct or union.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Empty for anonymous members.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeId,
    /// Offset from the start of the enclosing type, in bits.
    #[serde(default)]
    pub offset_bits: u32,
    /// Zero unless the member is a bitfield.
    #[serde(default)]
    pub bitfield_size: u32,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TypeId, offset_bits: u32) -> Self {
        Self {
            name: name.into(),
            ty,
            offset_bits,
            bitfield_size: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    #[serde(default)]
    pub name: String,
    pub size: u32,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// All members of a union start at offset 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    #[serde(default)]
    pub name: String,
    pub size: u32,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i32,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    #[serde(default)]
    pub name: String,
    /// Declared width in bytes.
    #[serde(default = "default_enum_size")]
    pub size: u32,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

fn default_enum_size() -> u32 {
    4
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FwdKind {
    #[default]
    Struct,
    Union,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fwd {
    pub name: String,
    #[serde(default, rename = "fwd_kind")]
    pub kind: FwdKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualifierKind {
    Const,
    Volatile,
    Restrict,
    TypeTag,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifier {
    pub qualifier: QualifierKind,
    #[serde(rename = "type")]
    pub ty: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Func {
    pub name: String,
    /// The function's prototype.
    #[serde(rename = "type")]
    pub ty: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncProto {
    #[serde(rename = "return")]
    pub ret: TypeId,
    #[serde(default)]
    pub params: Vec<FuncParam>,
}

/// Visibility of a variable in a data section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Linkage {
    Static,
    #[default]
    Global,
    Extern,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Var {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeId,
    #[serde(default)]
    pub linkage: Linkage,
}

/// Placement of a variable inside a data section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarSecinfo {
    /// Refers to a [`Var`] node.
    pub var: TypeId,
    /// Offset in bytes from the start of the section.
    pub offset: u32,
    /// Size in bytes.
    pub size: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasec {
    pub name: String,
    pub size: u32,
    #[serde(default)]
    pub vars: Vec<VarSecinfo>,
}
