//! Identifier policies for fields, variables and enum constants.

use btfgen_core::utils::to_pascal_case;

/// Transform applied to every emitted field, variable and constant name.
///
/// Must be total: the formatter passes any non-empty identifier and has no
/// way to report a failure from the policy.
pub trait IdentifierPolicy {
    fn apply(&self, ident: &str) -> String;
}

impl<F> IdentifierPolicy for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, ident: &str) -> String {
        self(ident)
    }
}

/// Use identifiers as they appear in the type graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl IdentifierPolicy for Verbatim {
    fn apply(&self, ident: &str) -> String {
        ident.to_string()
    }
}

/// Export identifiers by converting them to PascalCase (`rx_bytes` → `RxBytes`).
#[derive(Clone, Copy, Debug, Default)]
pub struct PascalCase;

impl IdentifierPolicy for PascalCase {
    fn apply(&self, ident: &str) -> String {
        let converted = to_pascal_case(ident);
        // `__` would vanish and `_1st` would start with a digit.
        match converted.chars().next() {
            Some(c) if !c.is_ascii_digit() => converted,
            _ => ident.to_string(),
        }
    }
}

/// Prepend a fixed prefix.
#[derive(Clone, Debug)]
pub struct Prefixed(pub String);

impl IdentifierPolicy for Prefixed {
    fn apply(&self, ident: &str) -> String {
        format!("{}{}", self.0, ident)
    }
}
