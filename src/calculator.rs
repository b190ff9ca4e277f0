//! Arithmetic operations provider.
//!
//! [`Calculator`] is stateless: every method is a pure function of its
//! operands. Only [`Calculator::divide`] can fail.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{CalcError, CalcResult};

/// The four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Infix symbol used when printing an expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Human readable label, e.g. `Addition`.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == needle || op.symbol() == needle)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

/// Performs binary arithmetic on `f64` operands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers together.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "add");
        a + b
    }

    /// Subtract `b` from `a`.
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "subtract");
        a - b
    }

    /// Multiply two numbers together.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "multiply");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidArgument`] when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        debug!(a, b, "divide");
        if b == 0.0 {
            return Err(CalcError::division_by_zero());
        }
        Ok(a / b)
    }

    /// Apply `op` to the operands.
    pub fn apply(&self, op: Operation, a: f64, b: f64) -> CalcResult<f64> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [0.0, 1.0, -1.0, 2.5, -7.25, 3.0, 1e-3, 12345.678, -0.5];

    #[test]
    fn test_concrete_results() {
        let calc = Calculator::new();
        assert_eq!(calc.add(5.0, 3.0), 8.0);
        assert_eq!(calc.subtract(10.0, 4.0), 6.0);
        assert_eq!(calc.multiply(6.0, 7.0), 42.0);
        assert_eq!(calc.divide(20.0, 4.0).unwrap(), 5.0);
    }

    #[test]
    fn test_add_is_commutative() {
        let calc = Calculator::new();
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(calc.add(a, b), calc.add(b, a), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_subtract_is_anticommutative() {
        let calc = Calculator::new();
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(calc.subtract(a, b), -calc.subtract(b, a), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_divide_undoes_multiply() {
        let calc = Calculator::new();
        for a in SAMPLES {
            for b in SAMPLES.into_iter().filter(|b| *b != 0.0) {
                let back = calc.divide(calc.multiply(a, b), b).unwrap();
                let tolerance = 1e-9 * a.abs().max(1.0);
                assert!((back - a).abs() <= tolerance, "a={a} b={b} got {back}");
            }
        }
    }

    #[test]
    fn test_divide_by_zero_fails() {
        let calc = Calculator::new();
        for a in SAMPLES {
            let err = calc.divide(a, 0.0).unwrap_err();
            assert_eq!(err, CalcError::InvalidArgument("Cannot divide by zero".into()));
            assert_eq!(err.to_string(), "Cannot divide by zero");
        }
        assert!(calc.divide(1.0, -0.0).is_err());
    }

    #[test]
    fn test_apply_dispatch() {
        let calc = Calculator::new();
        assert_eq!(calc.apply(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(calc.apply(Operation::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(calc.apply(Operation::Multiply, 2.0, 3.0), Ok(6.0));
        assert_eq!(calc.apply(Operation::Divide, 3.0, 2.0), Ok(1.5));
        assert!(calc.apply(Operation::Divide, 3.0, 0.0).is_err());
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("Multiply".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("/".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(CalcError::UnknownOperation("modulo".into()))
        );
    }
}
