//! Error types for declaration formatting.

use std::fmt;

use btfgen_core::{TypeId, TypeKind};

/// Error while formatting a declaration.
///
/// Leaf variants describe what went wrong. [`FormatError::Context`] layers
/// are added while unwinding so the message names where it went wrong,
/// e.g. `anonymous struct: field 2: bitfields are not supported`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Declaration requested with an empty name.
    #[error("need a name for {0}")]
    MissingName(String),

    /// A type id does not refer to a node in the graph.
    #[error("type {0} is not in the graph")]
    MissingType(TypeId),

    /// The node has no Go rendering.
    #[error("type kind {kind} is not supported")]
    UnsupportedKind { kind: TypeKind },

    /// Literal nesting exceeds the configured depth, or a qualifier, typedef
    /// or array chain exceeds `MAX_TYPE_DEPTH`.
    #[error("nested too deep")]
    TooDeep,

    #[error("anonymous fields are not supported")]
    AnonymousField,

    #[error("bitfields are not supported (width {bits})")]
    BitfieldUnsupported { bits: u32 },

    #[error("unsupported offset {offset_bits}")]
    MisalignedOffset { offset_bits: u32 },

    #[error("empty name")]
    EmptyVariableName,

    /// The size of a type kind cannot be determined.
    #[error("unsized type kind {kind}")]
    Unsized { kind: TypeKind },

    #[error("size overflows 32 bits")]
    SizeOverflow,

    /// A member starts before the previous one ends.
    #[error("offset {offset} overlaps previous member ending at {prev_end}")]
    Overlap { offset: u32, prev_end: u32 },

    #[error("{location}: {inner}")]
    Context {
        location: Location,
        inner: Box<FormatError>,
    },
}

/// Where in a declaration an error occurred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// Index into the members of a struct or union.
    Field(usize),
    /// Index into the variables of a data section.
    Variable(usize),
    /// The type being rendered, as labelled by `TypeGraph::describe`.
    Type(String),
    /// A declaration within a batch.
    Declaration(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(i) => write!(f, "field {i}"),
            Self::Variable(i) => write!(f, "variable {i}"),
            Self::Type(desc) => f.write_str(desc),
            Self::Declaration(name) => write!(f, "declaration {name}"),
        }
    }
}

impl FormatError {
    /// Wrap `self` with a location.
    pub fn at(self, location: Location) -> Self {
        Self::Context {
            location,
            inner: Box::new(self),
        }
    }

    /// The error beneath all context layers.
    pub fn root(&self) -> &FormatError {
        let mut err = self;
        while let Self::Context { inner, .. } = err {
            err = inner;
        }
        err
    }

    /// Locations from outermost to innermost.
    pub fn locations(&self) -> Vec<&Location> {
        let mut locations = Vec::new();
        let mut err = self;
        while let Self::Context { location, inner } = err {
            locations.push(location);
            err = inner;
        }
        locations
    }
}

pub(crate) trait ResultExt<T> {
    fn at(self, location: impl FnOnce() -> Location) -> Result<T, FormatError>;
}

impl<T> ResultExt<T> for Result<T, FormatError> {
    fn at(self, location: impl FnOnce() -> Location) -> Result<T, FormatError> {
        self.map_err(|err| err.at(location()))
    }
}
