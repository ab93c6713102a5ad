use super::kind::TypeKind;

#[test]
fn display_uses_snake_case() {
    assert_eq!(TypeKind::FuncProto.to_string(), "func_proto");
    assert_eq!(TypeKind::Pointer.to_string(), "pointer");
    assert_eq!(TypeKind::Datasec.to_string(), "datasec");
}
