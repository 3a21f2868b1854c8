use pretty_assertions::assert_eq;

use super::*;

#[test]
fn display_includes_code_message_and_node() {
    let diag = Diagnostic::new(ErrorCode::E6002, "subscript out of bounds", NodeId::new(4));
    assert_eq!(diag.to_string(), "error[E6002]: subscript out of bounds (at node #4)");
}

#[test]
fn display_omits_invalid_node() {
    let diag = Diagnostic::new(ErrorCode::E9002, "lost", NodeId::INVALID);
    assert_eq!(diag.to_string(), "error[E9002]: lost");
}
