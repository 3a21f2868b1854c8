//! End-to-end scenarios through the `Session` call entry.
//!
//! Each test builds a small program tree by hand, the way a front end
//! would, and calls into it as a host.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use harsh_eval::{CallError, ExecErrorKind, Session, Variant};
use harsh_ir::{ArrayType, BinaryOp, FieldInit, FunctionType, NamedType, Node, NodeArena, StructType, TypeKind};
use pretty_assertions::assert_eq;

fn no_args() -> Vec<(&'static str, i64)> {
    Vec::new()
}

fn session_with(arena: NodeArena, name: &str, ret: TypeKind, body: harsh_ir::NodeId) -> Session {
    harsh_eval::init_tracing();
    Session::builder(arena)
        .function(name, FunctionType::new([], ret, body))
        .build()
}

#[test]
fn return_stops_the_statement_sequence() {
    // func f() int { 11; return 44; 1 }
    let mut arena = NodeArena::new();
    let eleven = arena.alloc(Node::Int(11));
    let forty_four = arena.alloc(Node::Int(44));
    let ret = arena.alloc(Node::Return(forty_four));
    let one = arena.alloc(Node::Int(1));
    let body = arena.block([eleven, ret, one]);

    let mut session = session_with(arena, "f", TypeKind::Int, body);
    assert_eq!(session.call("f", no_args()).unwrap(), Variant::int(44));
}

#[test]
fn subscript_past_the_end() {
    // func f() int { a := [1]int{}; return a[1] }
    let mut arena = NodeArena::new();
    let len = arena.alloc(Node::Int(1));
    let array_ty = ArrayType::new(TypeKind::Int, len);
    let elements = arena.alloc_list([]);
    let literal = arena.alloc(Node::ArrayLit {
        ty: array_ty.clone(),
        elements,
    });
    let a = arena.alloc(Node::var("a", TypeKind::Array(array_ty)));
    let decl = arena.alloc(Node::Assign {
        target: a,
        value: literal,
        new_local: true,
    });
    let index = arena.alloc(Node::Int(1));
    let element = arena.alloc(Node::Subscript { base: a, index });
    let ret = arena.alloc(Node::Return(element));
    let body = arena.block([decl, ret]);

    let mut session = session_with(arena, "f", TypeKind::Int, body);
    let err = session.call("f", no_args()).unwrap_err();
    assert!(err.result().is_undefined());
    let kinds: Vec<_> = err.errors().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![ExecErrorKind::Bounds]);
}

#[test]
fn select_from_default_record() {
    // func f() int { return struct{Lol int}{}.Lol }
    let mut arena = NodeArena::new();
    let ty = StructType::new([NamedType::new("Lol", TypeKind::Int)]);
    let fields = arena.alloc_field_inits([]);
    let literal = arena.alloc(Node::StructLit { ty, fields });
    let select = arena.alloc(Node::Select {
        base: literal,
        field: "Lol".into(),
    });
    let ret = arena.alloc(Node::Return(select));
    let body = arena.block([ret]);

    let mut session = session_with(arena, "f", TypeKind::Int, body);
    assert_eq!(session.call("f", no_args()).unwrap(), Variant::int(0));
}

#[test]
fn undeclared_function() {
    let mut session = Session::builder(NodeArena::new()).build();
    let err = session.call("missing", no_args()).unwrap_err();
    assert!(matches!(err, CallError::FunctionNotFound(_)));
    assert_eq!(err.to_string(), "function not found: missing");
    assert!(err.result().is_undefined());
}

#[test]
fn function_writes_existing_global() {
    // var total int = 5
    // func set(v int) { total = v }
    let mut arena = NodeArena::new();
    let total = arena.alloc(Node::var("total", TypeKind::Int));
    let v = arena.alloc(Node::var("v", TypeKind::Int));
    let body = arena.alloc(Node::Assign {
        target: total,
        value: v,
        new_local: false,
    });
    let set = FunctionType::new([NamedType::new("v", TypeKind::Int)], TypeKind::Undefined, body);

    let mut session = Session::builder(arena)
        .function("set", set)
        .global("total", 5_i64)
        .build();
    session.call("set", [("v", 9_i64)]).unwrap();
    assert_eq!(session.globals().get("total"), Some(&Variant::int(9)));
}

#[test]
fn declaration_shadows_global_for_the_call_only() {
    // var total int = 5
    // func f() int { total := 1; return total }
    let mut arena = NodeArena::new();
    let total = arena.alloc(Node::var("total", TypeKind::Int));
    let one = arena.alloc(Node::Int(1));
    let decl = arena.alloc(Node::Assign {
        target: total,
        value: one,
        new_local: true,
    });
    let ret = arena.alloc(Node::Return(total));
    let body = arena.block([decl, ret]);

    let mut session = Session::builder(arena)
        .function("f", FunctionType::new([], TypeKind::Int, body))
        .global("total", 5_i64)
        .build();
    assert_eq!(session.call("f", no_args()).unwrap(), Variant::int(1));
    assert_eq!(session.globals().get("total"), Some(&Variant::int(5)));
}

#[test]
fn calls_between_declared_functions() {
    // func double(n int) int { return n + n }
    // func quad(n int) int { return double(double(n)) }
    let mut arena = NodeArena::new();
    let n = arena.alloc(Node::var("n", TypeKind::Int));
    let sum = arena.alloc(Node::Binary {
        op: BinaryOp::Add,
        left: n,
        right: n,
    });
    let ret = arena.alloc(Node::Return(sum));
    let double_body = arena.block([ret]);
    let double = FunctionType::new([NamedType::new("n", TypeKind::Int)], TypeKind::Int, double_body);

    let callee = arena.alloc(Node::var("double", TypeKind::Function(double.clone())));
    let inner = arena.call(callee, [n]);
    let outer = arena.call(callee, [inner]);
    let ret = arena.alloc(Node::Return(outer));
    let quad_body = arena.block([ret]);
    let quad = FunctionType::new([NamedType::new("n", TypeKind::Int)], TypeKind::Int, quad_body);

    let mut session = Session::builder(arena)
        .function("double", double)
        .function("quad", quad)
        .build();
    assert_eq!(session.call("quad", [("n", 3_i64)]).unwrap(), Variant::int(12));
}

#[test]
fn record_literal_assignment_and_update() {
    // func f() string { p := point{x: 2}; p.label = "hi"; return p.label + "!" }
    let mut arena = NodeArena::new();
    let point = StructType::new([
        NamedType::new("x", TypeKind::Int),
        NamedType::new("label", TypeKind::Str),
    ]);
    let two = arena.alloc(Node::Int(2));
    let fields = arena.alloc_field_inits([FieldInit::new("x", two)]);
    let literal = arena.alloc(Node::StructLit {
        ty: point.clone(),
        fields,
    });
    let p = arena.alloc(Node::var("p", TypeKind::Struct(point)));
    let decl = arena.alloc(Node::Assign {
        target: p,
        value: literal,
        new_local: true,
    });
    let label = arena.alloc(Node::Select {
        base: p,
        field: "label".into(),
    });
    let hi = arena.alloc(Node::str("hi"));
    let update = arena.alloc(Node::Assign {
        target: label,
        value: hi,
        new_local: false,
    });
    let bang = arena.alloc(Node::str("!"));
    let concat = arena.alloc(Node::Binary {
        op: BinaryOp::Add,
        left: label,
        right: bang,
    });
    let ret = arena.alloc(Node::Return(concat));
    let body = arena.block([decl, update, ret]);

    let mut session = session_with(arena, "f", TypeKind::Str, body);
    assert_eq!(session.call("f", no_args()).unwrap(), Variant::string("hi!"));
}

#[test]
fn independent_errors_are_all_reported() {
    // func f() { 1 / 0; "a" % "b"; ghost[0] }
    let mut arena = NodeArena::new();
    let one = arena.alloc(Node::Int(1));
    let zero = arena.alloc(Node::Int(0));
    let div = arena.alloc(Node::Binary {
        op: BinaryOp::Div,
        left: one,
        right: zero,
    });
    let a = arena.alloc(Node::str("a"));
    let b = arena.alloc(Node::str("b"));
    let modulo = arena.alloc(Node::Binary {
        op: BinaryOp::Mod,
        left: a,
        right: b,
    });
    let ghost = arena.alloc(Node::var("ghost", TypeKind::Unknown));
    let subscript = arena.alloc(Node::Subscript {
        base: ghost,
        index: zero,
    });
    let body = arena.block([div, modulo, subscript]);

    let mut session = session_with(arena, "f", TypeKind::Undefined, body);
    let err = session.call("f", no_args()).unwrap_err();
    let kinds: Vec<_> = err.errors().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![ExecErrorKind::Arithmetic, ExecErrorKind::Type, ExecErrorKind::NotFound]
    );
    assert_eq!(err.to_string(), "3 execution errors");
}

#[test]
fn parameter_reassignment_in_body_writes_a_global() {
    // func inc(p int) int { p = p + 1; return p }
    //
    // The body is a statement sequence, which is not a call frame, so the
    // assignment lands in the globals and `return p` still reads the
    // parameter.
    let mut arena = NodeArena::new();
    let p = arena.alloc(Node::var("p", TypeKind::Int));
    let one = arena.alloc(Node::Int(1));
    let sum = arena.alloc(Node::Binary {
        op: BinaryOp::Add,
        left: p,
        right: one,
    });
    let update = arena.alloc(Node::Assign {
        target: p,
        value: sum,
        new_local: false,
    });
    let ret = arena.alloc(Node::Return(p));
    let body = arena.block([update, ret]);
    let inc = FunctionType::new([NamedType::new("p", TypeKind::Int)], TypeKind::Int, body);

    let mut session = Session::builder(arena).function("inc", inc).build();
    assert_eq!(session.call("inc", [("p", 1_i64)]).unwrap(), Variant::int(1));
    assert_eq!(session.globals().get("p"), Some(&Variant::int(2)));
}
