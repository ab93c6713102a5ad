//! Arena holding the type graph.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// Identity of a node in a [`TypeGraph`].
///
/// Two nodes are the same type only if their ids are equal. Structurally
/// identical nodes added separately remain distinct types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Id of the node at arena position `index`.
    ///
    /// # Panics
    /// Panics if `index` does not fit in a `u32`.
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("type graph holds at most u32::MAX + 1 nodes"))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Names chosen for types by an external naming pass.
///
/// Types present here are emitted as references instead of literals.
pub type NameTable = HashMap<TypeId, String>;

/// Append-only arena of type nodes.
///
/// Nodes may reference each other in any order, including cycles through
/// named types. The graph never validates references; consumers report
/// dangling ids when they reach them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeGraph {
    types: Vec<Type>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a graph from a JSON array of tagged nodes.
    ///
    /// Node ids are positions in the array, so a node may refer to any
    /// other node regardless of order.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Add a node and return its id.
    ///
    /// # Panics
    /// Panics if the graph already holds `u32::MAX + 1` nodes.
    pub fn add(&mut self, ty: Type) -> TypeId {
        let id = TypeId::from_index(self.types.len());
        self.types.push(ty);
        id
    }

    /// Reserve an id to be filled later with [`TypeGraph::set`].
    ///
    /// Self-referential types need their own id before they can be built.
    pub fn reserve(&mut self) -> TypeId {
        self.add(Type::Void)
    }

    /// Replace the node behind `id`. Returns `false` if `id` is out of range.
    pub fn set(&mut self, id: TypeId, ty: Type) -> bool {
        match self.types.get_mut(id.index()) {
            Some(slot) => {
                *slot = ty;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, ty)| (TypeId::from_index(i), ty))
    }

    /// Short label for diagnostics, e.g. `struct "point"` or `anonymous union`.
    pub fn describe(&self, id: TypeId) -> String {
        let Some(ty) = self.get(id) else {
            return format!("missing type {id}");
        };

        let kind = ty.kind();
        match ty.name() {
            "" => format!("anonymous {kind}"),
            name => format!("{kind} \"{name}\""),
        }
    }
}
