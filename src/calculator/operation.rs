//! Operator symbols and what pressing them does.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Where a unary operation's display symbol goes relative to its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// `sym(x)`, e.g. `sin(x)`.
    Prefix,
    /// `(x)sym`, e.g. `(x)²`.
    Suffix,
}

impl Notation {
    /// Wrap an operand fragment with a display symbol.
    pub fn wrap(self, fragment: &str, symbol: &str) -> String {
        match self {
            Self::Prefix => format!("{}({})", symbol, fragment),
            Self::Suffix => format!("({}){}", fragment, symbol),
        }
    }
}

/// Behavior bound to an operator symbol.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// Replaces the accumulator with a fixed value.
    Constant(f64),
    /// Applies a function to the accumulator immediately.
    Unary {
        function: fn(f64) -> f64,
        display: &'static str,
        notation: Notation,
    },
    /// Defers a function until the second operand is known.
    Binary(fn(f64, f64) -> f64),
    /// Completes the pending binary operation.
    Equals,
    /// Resets the engine and forgets the `M` variable.
    Clear,
}

fn unary(function: fn(f64) -> f64, display: &'static str, notation: Notation) -> Operation {
    Operation::Unary {
        function,
        display,
        notation,
    }
}

lazy_static! {
    /// Every operator the engine understands, keyed by its button symbol.
    static ref OPERATIONS: HashMap<&'static str, Operation> = {
        use Notation::{Prefix, Suffix};

        HashMap::from([
            ("eˣ", unary(f64::exp, "e^", Prefix)),
            ("10ˣ", unary(|x| 10f64.powf(x), "10^", Prefix)),
            ("logₑ", unary(f64::ln, "logₑ", Prefix)),
            ("log₁₀", unary(f64::log10, "log₁₀", Prefix)),
            ("x²", unary(|x| x.powi(2), "²", Suffix)),
            ("√", unary(f64::sqrt, "√", Prefix)),
            ("x³", unary(|x| x.powi(3), "³", Suffix)),
            ("³√", unary(|x| x.powf(1.0 / 3.0), "³√", Prefix)),
            ("cos", unary(f64::cos, "cos", Prefix)),
            ("sin", unary(f64::sin, "sin", Prefix)),
            ("tan", unary(f64::tan, "tan", Prefix)),
            ("1/x", unary(|x| 1.0 / x, "⁻¹", Suffix)),
            ("⁺⁄₋", unary(|x| -x, "-", Prefix)),
            ("π", Operation::Constant(std::f64::consts::PI)),
            ("%", Operation::Binary(|a, b| a % b)),
            ("×", Operation::Binary(|a, b| a * b)),
            ("+", Operation::Binary(|a, b| a + b)),
            ("-", Operation::Binary(|a, b| a - b)),
            ("÷", Operation::Binary(|a, b| a / b)),
            ("=", Operation::Equals),
            ("AC", Operation::Clear),
        ])
    };
}

/// Look up the operation bound to a symbol.
pub fn lookup(symbol: &str) -> Option<Operation> {
    OPERATIONS.get(symbol).copied()
}

/// Check whether a symbol is a registered operator.
pub fn is_operator(symbol: &str) -> bool {
    OPERATIONS.contains_key(symbol)
}

/// All registered operator symbols, sorted.
pub fn symbols() -> Vec<&'static str> {
    let mut symbols: Vec<_> = OPERATIONS.keys().copied().collect();
    symbols.sort_unstable();
    symbols
}
