//! Qualifier resolution.

use btfgen_core::{Type, TypeGraph, TypeId};

use crate::{FormatError, MAX_TYPE_DEPTH};

/// Strip `const`, `volatile`, `restrict` and type tag wrappers from `id`.
///
/// Follows at most [`MAX_TYPE_DEPTH`] wrappers, independent of the
/// formatter's nesting bound. Longer chains, which includes any cycle made
/// only of qualifiers, fail with [`FormatError::TooDeep`].
pub fn skip_qualifiers(graph: &TypeGraph, id: TypeId) -> Result<TypeId, FormatError> {
    let mut current = id;
    for _ in 0..=MAX_TYPE_DEPTH {
        match graph.get(current) {
            Some(Type::Qualifier(q)) => current = q.ty,
            Some(_) => return Ok(current),
            None => return Err(FormatError::MissingType(current)),
        }
    }
    Err(FormatError::TooDeep)
}
