use pretty_assertions::assert_eq;

use super::*;

fn len() -> NodeId {
    NodeId::new(0)
}

#[test]
fn primitives_compare_by_discriminator() {
    assert_eq!(TypeKind::Int, TypeKind::Int);
    assert_ne!(TypeKind::Int, TypeKind::Str);
    assert_ne!(TypeKind::Bool, TypeKind::Undefined);
    assert_eq!(TypeKind::Unknown, TypeKind::Unknown);
}

#[test]
fn arrays_compare_element_types_only() {
    let a = TypeKind::array(TypeKind::Int, NodeId::new(1));
    let b = TypeKind::array(TypeKind::Int, NodeId::new(7));
    let c = TypeKind::array(TypeKind::Str, NodeId::new(1));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, TypeKind::Int);
}

#[test]
fn records_ignore_field_order() {
    let a = TypeKind::record([
        NamedType::new("a", TypeKind::Int),
        NamedType::new("b", TypeKind::Str),
    ]);
    let b = TypeKind::record([
        NamedType::new("b", TypeKind::Str),
        NamedType::new("a", TypeKind::Int),
    ]);
    assert_eq!(a, b);
}

#[test]
fn records_with_conflicting_field_types_differ() {
    let a = TypeKind::record([NamedType::new("a", TypeKind::Int)]);
    let b = TypeKind::record([NamedType::new("a", TypeKind::Bool)]);
    assert_ne!(a, b);
}

#[test]
fn records_with_extra_fields_differ_in_both_directions() {
    let small = TypeKind::record([NamedType::new("a", TypeKind::Int)]);
    let large = TypeKind::record([
        NamedType::new("a", TypeKind::Int),
        NamedType::new("b", TypeKind::Int),
    ]);
    assert_ne!(small, large);
    assert_ne!(large, small);
}

#[test]
fn nested_records_compare_recursively() {
    let inner_int = TypeKind::record([NamedType::new("x", TypeKind::Int)]);
    let inner_str = TypeKind::record([NamedType::new("x", TypeKind::Str)]);
    let a = TypeKind::record([NamedType::new("inner", inner_int.clone())]);
    let b = TypeKind::record([NamedType::new("inner", inner_int)]);
    let c = TypeKind::record([NamedType::new("inner", inner_str)]);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn functions_compare_signatures_not_bodies_or_names() {
    let a = TypeKind::function(
        [NamedType::new("x", TypeKind::Int)],
        TypeKind::Str,
        NodeId::new(1),
    );
    let b = TypeKind::function(
        [NamedType::new("y", TypeKind::Int)],
        TypeKind::Str,
        NodeId::new(9),
    );
    let other_ret = TypeKind::function([NamedType::new("x", TypeKind::Int)], TypeKind::Int, len());
    let other_arity = TypeKind::function([], TypeKind::Str, len());

    assert_eq!(a, b);
    assert_ne!(a, other_ret);
    assert_ne!(a, other_arity);
}

#[test]
fn base_type_of_array_is_element() {
    let nested = TypeKind::array(TypeKind::array(TypeKind::Bool, len()), len());
    assert_eq!(nested.base_type().kind(), Kind::Array);
    assert_eq!(nested.base_type().base_type(), &TypeKind::Bool);
    assert_eq!(TypeKind::Int.base_type(), &TypeKind::Int);
}

#[test]
fn display_forms() {
    let record = TypeKind::record([
        NamedType::new("Lol", TypeKind::Int),
        NamedType::new("name", TypeKind::Str),
    ]);
    let function = TypeKind::function(
        [
            NamedType::new("a", TypeKind::Int),
            NamedType::new("b", TypeKind::Bool),
        ],
        TypeKind::Str,
        len(),
    );

    assert_eq!(TypeKind::array(TypeKind::Int, len()).to_string(), "[]int");
    assert_eq!(record.to_string(), "struct{Lol int, name string}");
    assert_eq!(function.to_string(), "func(int, bool) string");
    assert_eq!(TypeKind::Undefined.to_string(), "undefined");
}

#[test]
fn struct_field_lookup() {
    let record = StructType::new([NamedType::new("a", TypeKind::Int)]);
    assert_eq!(record.field("a"), Some(&TypeKind::Int));
    assert_eq!(record.field("b"), None);
}
