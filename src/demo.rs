//! The fixed demonstration run printed by the binary.

use crate::calculator::{Calculator, Operation};
use crate::display::format_expression;
use crate::error::CalcResult;
use crate::greeting::greet;

/// Operands used for each demo line, in print order.
pub const DEMO_OPERANDS: [(Operation, f64, f64); 4] = [
    (Operation::Add, 5.0, 3.0),
    (Operation::Subtract, 10.0, 4.0),
    (Operation::Multiply, 6.0, 7.0),
    (Operation::Divide, 20.0, 4.0),
];

pub const DEMO_NAME: &str = "Developer";

/// Produce the five demo lines: four arithmetic results, then the greeting.
pub fn demo_lines(calc: &Calculator) -> CalcResult<Vec<String>> {
    let mut lines = Vec::with_capacity(DEMO_OPERANDS.len() + 1);
    for (op, a, b) in DEMO_OPERANDS {
        let result = calc.apply(op, a, b)?;
        lines.push(format_expression(op, a, b, result));
    }
    lines.push(greet(DEMO_NAME));
    Ok(lines)
}
