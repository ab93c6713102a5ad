//! Graph construction helpers for formatter tests.

use btfgen_core::{
    Array, Datasec, Enum, EnumValue, Int, IntEncoding, Linkage, Member, NameTable, Qualifier,
    QualifierKind, Struct, Type, TypeGraph, TypeId, Typedef, Union, Var, VarSecinfo,
};

use crate::{Config, FormatError, GoFormatter};

#[derive(Default)]
pub struct Fixture {
    pub graph: TypeGraph,
    pub names: NameTable,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn int(&mut self, size: u32, encoding: IntEncoding) -> TypeId {
        self.graph.add(Type::Int(Int {
            name: String::new(),
            size,
            encoding,
        }))
    }

    pub fn u8(&mut self) -> TypeId {
        self.int(1, IntEncoding::UNSIGNED)
    }

    pub fn u32(&mut self) -> TypeId {
        self.int(4, IntEncoding::UNSIGNED)
    }

    pub fn i32(&mut self) -> TypeId {
        self.int(4, IntEncoding::SIGNED)
    }

    pub fn u64(&mut self) -> TypeId {
        self.int(8, IntEncoding::UNSIGNED)
    }

    pub fn array(&mut self, ty: TypeId, nelems: u32) -> TypeId {
        self.graph.add(Type::Array(Array { ty, nelems }))
    }

    pub fn typedef(&mut self, name: &str, ty: TypeId) -> TypeId {
        self.graph.add(Type::Typedef(Typedef {
            name: name.into(),
            ty,
        }))
    }

    pub fn qualify(&mut self, qualifier: QualifierKind, ty: TypeId) -> TypeId {
        self.graph.add(Type::Qualifier(Qualifier { qualifier, ty }))
    }

    pub fn enumeration(&mut self, name: &str, values: &[(&str, i32)]) -> TypeId {
        self.graph.add(Type::Enum(Enum {
            name: name.into(),
            size: 4,
            values: values
                .iter()
                .map(|&(name, value)| EnumValue::new(name, value))
                .collect(),
        }))
    }

    /// Struct with byte-aligned members given as `(name, type, byte offset)`.
    pub fn structure(&mut self, name: &str, size: u32, members: &[(&str, TypeId, u32)]) -> TypeId {
        self.graph.add(Type::Struct(Struct {
            name: name.into(),
            size,
            members: members_at(members),
        }))
    }

    pub fn union(&mut self, name: &str, size: u32, members: &[(&str, TypeId)]) -> TypeId {
        self.graph.add(Type::Union(Union {
            name: name.into(),
            size,
            members: members
                .iter()
                .map(|&(name, ty)| Member::new(name, ty, 0))
                .collect(),
        }))
    }

    pub fn var(&mut self, name: &str, ty: TypeId, linkage: Linkage) -> TypeId {
        self.graph.add(Type::Var(Var {
            name: name.into(),
            ty,
            linkage,
        }))
    }

    /// Data section with entries given as `(var, offset, size)`.
    pub fn datasec(&mut self, name: &str, size: u32, vars: &[(TypeId, u32, u32)]) -> TypeId {
        self.graph.add(Type::Datasec(Datasec {
            name: name.into(),
            size,
            vars: vars
                .iter()
                .map(|&(var, offset, size)| VarSecinfo { var, offset, size })
                .collect(),
        }))
    }

    pub fn name(&mut self, id: TypeId, name: &str) {
        self.names.insert(id, name.to_string());
    }

    pub fn formatter(&self) -> GoFormatter<'_> {
        GoFormatter::new(&self.graph, &self.names)
    }

    pub fn formatter_with_depth(&self, max_depth: usize) -> GoFormatter<'_> {
        GoFormatter::with_config(&self.graph, &self.names, Config::new().max_depth(max_depth))
    }

    pub fn declare(&self, name: &str, id: TypeId) -> Result<String, FormatError> {
        self.formatter().declare(name, id)
    }
}

fn members_at(members: &[(&str, TypeId, u32)]) -> Vec<Member> {
    members
        .iter()
        .map(|&(name, ty, offset)| Member::new(name, ty, offset * 8))
        .collect()
}
