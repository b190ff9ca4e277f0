//! Calc command.

use tracing::debug;

use crate::calculator::{Calculator, Operation};
use crate::display::format_result;

/// Run calc command - apply one operation and print the result.
pub fn run_calc(op: Operation, a: f64, b: f64) {
    match Calculator::new().apply(op, a, b) {
        Ok(result) => println!("{}", format_result(op, result)),
        Err(e) => {
            debug!(%op, a, b, "calculation rejected");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
