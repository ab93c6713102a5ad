//! Unit tests for size and padding computation.

use btfgen_core::{
    Array, Enum, Int, IntEncoding, Pointer, Qualifier, QualifierKind, Struct, Type, TypeGraph,
    TypeId, TypeKind, Typedef,
};

use crate::{FormatError, MAX_TYPE_DEPTH};
use crate::layout::{gap, size_of, write_padding};

fn int(graph: &mut TypeGraph, size: u32) -> TypeId {
    graph.add(Type::Int(Int {
        name: String::new(),
        size,
        encoding: IntEncoding::UNSIGNED,
    }))
}

fn array(graph: &mut TypeGraph, ty: TypeId, nelems: u32) -> TypeId {
    graph.add(Type::Array(Array { ty, nelems }))
}

#[test]
fn size_of_sized_kinds() {
    let mut graph = TypeGraph::new();
    let u16_ty = int(&mut graph, 2);
    let ptr = graph.add(Type::Pointer(Pointer { ty: u16_ty }));
    let byte_enum = graph.add(Type::Enum(Enum {
        name: "flag".into(),
        size: 1,
        values: vec![],
    }));
    let st = graph.add(Type::Struct(Struct {
        name: "s".into(),
        size: 24,
        members: vec![],
    }));

    assert_eq!(size_of(&graph, u16_ty), Ok(2));
    assert_eq!(size_of(&graph, ptr), Ok(8));
    assert_eq!(size_of(&graph, byte_enum), Ok(1));
    assert_eq!(size_of(&graph, st), Ok(24));
}

#[test]
fn size_of_multiplies_nested_arrays() {
    let mut graph = TypeGraph::new();
    let u32_ty = int(&mut graph, 4);
    let row = array(&mut graph, u32_ty, 3);
    let matrix = array(&mut graph, row, 2);

    assert_eq!(size_of(&graph, matrix), Ok(24));
}

#[test]
fn size_of_zero_length_array() {
    let mut graph = TypeGraph::new();
    let u64_ty = int(&mut graph, 8);
    let flex = array(&mut graph, u64_ty, 0);

    assert_eq!(size_of(&graph, flex), Ok(0));
}

#[test]
fn size_of_follows_typedefs_and_qualifiers() {
    let mut graph = TypeGraph::new();
    let u32_ty = int(&mut graph, 4);
    let konst = graph.add(Type::Qualifier(Qualifier {
        qualifier: QualifierKind::Const,
        ty: u32_ty,
    }));
    let alias = graph.add(Type::Typedef(Typedef {
        name: "u32_t".into(),
        ty: konst,
    }));

    assert_eq!(size_of(&graph, alias), Ok(4));
}

fn typedef_chain(graph: &mut TypeGraph, ty: TypeId, links: usize) -> TypeId {
    let mut id = ty;
    for i in 0..links {
        id = graph.add(Type::Typedef(Typedef {
            name: format!("t{i}"),
            ty: id,
        }));
    }
    id
}

#[test]
fn size_of_chain_bound() {
    let mut graph = TypeGraph::new();
    let u32_ty = int(&mut graph, 4);
    let longest = typedef_chain(&mut graph, u32_ty, MAX_TYPE_DEPTH - 1);
    let too_long = typedef_chain(&mut graph, longest, 1);

    assert_eq!(size_of(&graph, longest), Ok(4));
    assert_eq!(size_of(&graph, too_long), Err(FormatError::TooDeep));
}

#[test]
fn size_of_unsized_kind_fails() {
    let mut graph = TypeGraph::new();
    let void = graph.add(Type::Void);
    let arr = array(&mut graph, void, 4);

    assert_eq!(
        size_of(&graph, arr),
        Err(FormatError::Unsized {
            kind: TypeKind::Void
        })
    );
}

#[test]
fn size_of_overflow_fails() {
    let mut graph = TypeGraph::new();
    let u64_ty = int(&mut graph, 8);
    let big = array(&mut graph, u64_ty, u32::MAX);

    assert_eq!(size_of(&graph, big), Err(FormatError::SizeOverflow));
}

#[test]
fn size_of_typedef_cycle_fails() {
    let mut graph = TypeGraph::new();
    let a = graph.reserve();
    graph.set(
        a,
        Type::Typedef(Typedef {
            name: "loop_t".into(),
            ty: a,
        }),
    );

    assert_eq!(size_of(&graph, a), Err(FormatError::TooDeep));
}

#[test]
fn size_of_missing_type_fails() {
    let graph = TypeGraph::new();

    assert_eq!(
        size_of(&graph, TypeId(3)),
        Err(FormatError::MissingType(TypeId(3)))
    );
}

#[test]
fn gap_between_members() {
    assert_eq!(gap(0, 0), Ok(0));
    assert_eq!(gap(4, 8), Ok(4));
}

#[test]
fn gap_rejects_overlap() {
    assert_eq!(
        gap(8, 4),
        Err(FormatError::Overlap {
            offset: 4,
            prev_end: 8
        })
    );
}

#[test]
fn padding_only_for_nonzero_gap() {
    let mut out = String::new();

    write_padding(&mut out, 0);
    assert_eq!(out, "");

    write_padding(&mut out, 3);
    assert_eq!(out, "_ [3]byte; ");
}
