//! Binary and unary operator implementations.
//!
//! Dispatch is on the pair of operand kinds. Only `int`, `string` and `bool`
//! pairs are defined; anything else is an operand type error. Both operands
//! are always evaluated by the caller; `&&` and `||` do not short-circuit.

use harsh_ir::{BinaryOp, Kind, UnaryOp};

use crate::{ExecErrorKind, Value, Variant};

/// Why an operator could not produce a value.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum OperatorError {
    #[error("Invalid types for operands: {left} and {right}")]
    Operands { left: Kind, right: Kind },
    #[error("Invalid operation for {kind} operands: {op}")]
    InvalidOp { op: BinaryOp, kind: Kind },
    #[error("Cannot perform unary operation {op} on type {kind}")]
    Unary { op: UnaryOp, kind: Kind },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {0}")]
    Overflow(&'static str),
}

impl OperatorError {
    pub fn kind(&self) -> ExecErrorKind {
        match self {
            OperatorError::Operands { .. }
            | OperatorError::InvalidOp { .. }
            | OperatorError::Unary { .. } => ExecErrorKind::Type,
            OperatorError::DivisionByZero
            | OperatorError::ModuloByZero
            | OperatorError::Overflow(_) => ExecErrorKind::Arithmetic,
        }
    }
}

pub type OperatorResult = Result<Variant, OperatorError>;

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> OperatorResult {
    result.map(Variant::int).ok_or(OperatorError::Overflow(op_name))
}

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(left: &Variant, right: &Variant, op: BinaryOp) -> OperatorResult {
    match (left.value(), right.value()) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        _ => Err(OperatorError::Operands {
            left: left.kind(),
            right: right.kind(),
        }),
    }
}

/// Division and remainder truncate toward zero.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> OperatorResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div if b == 0 => Err(OperatorError::DivisionByZero),
        BinaryOp::Div => checked_arith(a.checked_div(b), "division"),
        BinaryOp::Mod if b == 0 => Err(OperatorError::ModuloByZero),
        BinaryOp::Mod => checked_arith(a.checked_rem(b), "remainder"),
        BinaryOp::Eq => Ok(Variant::bool(a == b)),
        BinaryOp::And | BinaryOp::Or => Err(OperatorError::InvalidOp { op, kind: Kind::Int }),
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> OperatorResult {
    match op {
        BinaryOp::Add => Ok(Variant::string(format!("{a}{b}"))),
        BinaryOp::Eq => Ok(Variant::bool(a == b)),
        _ => Err(OperatorError::InvalidOp { op, kind: Kind::Str }),
    }
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> OperatorResult {
    match op {
        BinaryOp::Eq => Ok(Variant::bool(a == b)),
        BinaryOp::And => Ok(Variant::bool(a && b)),
        BinaryOp::Or => Ok(Variant::bool(a || b)),
        _ => Err(OperatorError::InvalidOp { op, kind: Kind::Bool }),
    }
}

/// Evaluate a unary operation. Only `!bool` is defined.
pub fn evaluate_unary(operand: &Variant, op: UnaryOp) -> OperatorResult {
    match (op, operand.value()) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Variant::bool(!b)),
        (UnaryOp::Not, _) => Err(OperatorError::Unary {
            op,
            kind: operand.kind(),
        }),
    }
}
