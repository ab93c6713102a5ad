//! Byte layout of rendered types.
//!
//! Go has no way to place a field at an explicit offset, so gaps between
//! members are filled with anonymous `_ [N]byte` fields. The helpers here
//! compute member sizes and those gaps.

use btfgen_core::{Type, TypeGraph, TypeId};

use crate::{FormatError, MAX_TYPE_DEPTH};

/// Size of `id` in bytes.
///
/// Arrays multiply their element count into the result, typedefs and
/// qualifiers are followed, and every other kind must declare its own size.
/// At most [`MAX_TYPE_DEPTH`] nodes are visited, whatever nesting bound the
/// formatter is configured with.
pub fn size_of(graph: &TypeGraph, id: TypeId) -> Result<u32, FormatError> {
    let mut count: u64 = 1;
    let mut current = id;

    for _ in 0..MAX_TYPE_DEPTH {
        let ty = graph
            .get(current)
            .ok_or(FormatError::MissingType(current))?;

        let elem = match ty {
            Type::Array(array) => {
                count = count
                    .checked_mul(u64::from(array.nelems))
                    .ok_or(FormatError::SizeOverflow)?;
                current = array.ty;
                continue;
            }
            Type::Typedef(typedef) => {
                current = typedef.ty;
                continue;
            }
            Type::Qualifier(qualifier) => {
                current = qualifier.ty;
                continue;
            }
            other => other
                .declared_size()
                .ok_or(FormatError::Unsized { kind: other.kind() })?,
        };

        let size = count
            .checked_mul(u64::from(elem))
            .ok_or(FormatError::SizeOverflow)?;
        return u32::try_from(size).map_err(|_| FormatError::SizeOverflow);
    }

    Err(FormatError::TooDeep)
}

/// Bytes between the end of the previous member and `offset`.
///
/// Members that start before the previous one ends violate the layout
/// invariants of the graph and are reported, never clamped.
pub fn gap(prev_end: u32, offset: u32) -> Result<u32, FormatError> {
    offset
        .checked_sub(prev_end)
        .ok_or(FormatError::Overlap { offset, prev_end })
}

/// Append an anonymous padding field of `bytes` bytes. Writes nothing for 0.
pub fn write_padding(out: &mut String, bytes: u32) {
    if bytes > 0 {
        tracing::trace!(bytes, "padding");
        out.push_str(&format!("_ [{bytes}]byte; "));
    }
}
