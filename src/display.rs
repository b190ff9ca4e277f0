//! Rendering of numeric results for terminal output.
//!
//! Sums, differences and products of whole operands print as whole
//! numbers (`8`), while a quotient is always shown as a float (`5.0`).

use crate::calculator::Operation;

/// Render a quotient so whole values keep a trailing `.0`.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Render the result of `op`.
pub fn format_result(op: Operation, value: f64) -> String {
    match op {
        Operation::Divide => format_float(value),
        _ => format!("{value}"),
    }
}

/// Render `<Label>: a <sym> b = result`, the line format used by the demo.
pub fn format_expression(op: Operation, a: f64, b: f64, result: f64) -> String {
    format!(
        "{}: {a} {} {b} = {}",
        op.label(),
        op.symbol(),
        format_result(op, result)
    )
}
