//! Formatter struct and declaration entry points.

use btfgen_core::{NameTable, Type, TypeGraph, TypeId};

use super::{Config, IdentifierPolicy, Verbatim};
use crate::qualifiers::skip_qualifiers;
use crate::{FormatError, Location};

/// Renders Go type declarations for nodes of a type graph.
///
/// Types present in the name table are referred to by that name; everything
/// else is spelled out as a type literal. Each call to
/// [`declare`](Self::declare) builds its output in a fresh buffer, so a
/// formatter can be reused for any number of declarations.
pub struct GoFormatter<'a> {
    pub(super) graph: &'a TypeGraph,
    pub(super) names: &'a NameTable,
    pub(super) config: Config,
    /// Applied to field, variable and enum constant names
    pub(super) identifier: Box<dyn IdentifierPolicy + 'a>,
}

impl<'a> GoFormatter<'a> {
    pub fn new(graph: &'a TypeGraph, names: &'a NameTable) -> Self {
        Self::with_config(graph, names, Config::default())
    }

    pub fn with_config(graph: &'a TypeGraph, names: &'a NameTable, config: Config) -> Self {
        Self {
            graph,
            names,
            config,
            identifier: Box::new(Verbatim),
        }
    }

    /// Replace the identifier policy.
    pub fn with_identifier(mut self, policy: impl IdentifierPolicy + 'a) -> Self {
        self.set_identifier(policy);
        self
    }

    pub fn set_identifier(&mut self, policy: impl IdentifierPolicy + 'a) {
        self.identifier = Box::new(policy);
    }

    /// Generate a Go type declaration named `name` for `id`.
    ///
    /// ```text
    /// type foo struct { bar uint32; }
    /// type bar int32; const ( barA bar = 0; barB bar = 1; )
    /// ```
    ///
    /// Fails on the first unsupported construct; no partial output is
    /// returned.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %name, id = %id))]
    pub fn declare(&self, name: &str, id: TypeId) -> Result<String, FormatError> {
        let mut out = String::new();
        if let Err(err) = self.write_type_decl(&mut out, name, id) {
            tracing::debug!(%err, "declaration failed");
            return Err(err);
        }
        Ok(out)
    }

    /// Generate several declarations, one per line.
    ///
    /// Stops at the first failing declaration and reports its name.
    pub fn declare_all<'n>(
        &self,
        decls: impl IntoIterator<Item = (&'n str, TypeId)>,
    ) -> Result<String, FormatError> {
        let mut out = String::new();
        for (name, id) in decls {
            let decl = self
                .declare(name, id)
                .map_err(|err| err.at(Location::Declaration(name.to_string())))?;
            out.push_str(&decl);
            out.push('\n');
        }
        Ok(out)
    }

    fn write_type_decl(&self, out: &mut String, name: &str, id: TypeId) -> Result<(), FormatError> {
        if name.is_empty() {
            return Err(FormatError::MissingName(self.graph.describe(id)));
        }

        let id = skip_qualifiers(self.graph, id)?;

        // Enums become an int32 alias plus one constant per value.
        if let Type::Enum(en) = self.lookup(id)? {
            out.push_str(&format!("type {name} int32"));
            if en.values.is_empty() {
                return Ok(());
            }

            out.push_str("; const ( ");
            for value in &en.values {
                let ident = self.identifier.apply(&value.name);
                out.push_str(&format!("{name}{ident} {name} = {}; ", value.value));
            }
            out.push(')');
            return Ok(());
        }

        out.push_str(&format!("type {name} "));
        self.write_type_lit(out, id, 0)
    }

    pub(super) fn lookup(&self, id: TypeId) -> Result<&'a Type, FormatError> {
        self.graph.get(id).ok_or(FormatError::MissingType(id))
    }
}
