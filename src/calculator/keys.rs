//! Keypad token classification.
//!
//! Maps keys typed on a terminal to engine calls. Button symbols are accepted
//! as-is, and ASCII spellings are offered for the ones that are awkward to type.

use super::brain::CalcBrain;
use super::operation;
use lazy_static::lazy_static;
use regex::Regex;

/// ASCII spellings for operator buttons.
const ALIASES: &[(&str, &str)] = &[
    ("*", "×"),
    ("/", "÷"),
    ("pi", "π"),
    ("sqrt", "√"),
    ("cbrt", "³√"),
    ("x^2", "x²"),
    ("sq", "x²"),
    ("x^3", "x³"),
    ("+/-", "⁺⁄₋"),
    ("neg", "⁺⁄₋"),
    ("inv", "1/x"),
    ("ln", "logₑ"),
    ("log", "log₁₀"),
    ("exp", "eˣ"),
    ("10^x", "10ˣ"),
    ("C", "AC"),
    ("clear", "AC"),
];

lazy_static! {
    /// Plain decimal literals, optionally signed, with an optional exponent.
    static ref NUMBER: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();

    /// Names usable as variables.
    static ref IDENTIFIER: Regex = Regex::new(
        r"^[A-Za-z_][A-Za-z0-9_]*$"
    ).unwrap();

    /// `->NAME` or `→NAME`: store the current result in a variable.
    static ref STORE: Regex = Regex::new(
        r"^(?:->|→)([A-Za-z_][A-Za-z0-9_]*)$"
    ).unwrap();
}

/// A classified keypad token.
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    Number(f64),
    Variable(String),
    /// An operator symbol; unknown symbols are left for the engine to ignore.
    Operator(String),
    StoreResult(String),
    Undo,
}

impl Key {
    /// Feed this key to the engine.
    pub fn apply(&self, brain: &mut CalcBrain) {
        match self {
            Self::Number(value) => brain.enter_number(*value),
            Self::Variable(name) => brain.enter_variable(name),
            Self::Operator(symbol) => brain.apply_operator(symbol),
            Self::StoreResult(name) => brain.store_result_in(name),
            Self::Undo => brain.undo(),
        }
    }
}

/// Classify a single token.
///
/// Registered symbols and aliases win over variable names, so `pi` means
/// `π`; any other identifier is a variable.
pub fn parse_key(token: &str) -> Key {
    let token = token.trim();

    if token.eq_ignore_ascii_case("undo") {
        return Key::Undo;
    }

    if operation::is_operator(token) {
        return Key::Operator(token.to_string());
    }

    if let Some(symbol) = resolve_alias(token) {
        return Key::Operator(symbol.to_string());
    }

    if let Some(captures) = STORE.captures(token) {
        return Key::StoreResult(captures[1].to_string());
    }

    if NUMBER.is_match(token)
        && let Ok(value) = token.parse::<f64>()
    {
        return Key::Number(value);
    }

    if IDENTIFIER.is_match(token) {
        return Key::Variable(token.to_string());
    }

    Key::Operator(token.to_string())
}

/// Split a line on whitespace and classify each token.
pub fn parse_keys(line: &str) -> Vec<Key> {
    line.split_whitespace().map(parse_key).collect()
}

fn resolve_alias(token: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|&(_, symbol)| symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse_key("42"), Key::Number(42.0));
        assert_eq!(parse_key("-2.5"), Key::Number(-2.5));
        assert_eq!(parse_key(".5"), Key::Number(0.5));
        assert_eq!(parse_key("1e3"), Key::Number(1000.0));
    }

    #[test]
    fn test_button_symbols() {
        assert_eq!(parse_key("+"), Key::Operator("+".to_string()));
        assert_eq!(parse_key("-"), Key::Operator("-".to_string()));
        assert_eq!(parse_key("x²"), Key::Operator("x²".to_string()));
        assert_eq!(parse_key("cos"), Key::Operator("cos".to_string()));
        assert_eq!(parse_key("AC"), Key::Operator("AC".to_string()));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse_key("*"), Key::Operator("×".to_string()));
        assert_eq!(parse_key("pi"), Key::Operator("π".to_string()));
        assert_eq!(parse_key("sqrt"), Key::Operator("√".to_string()));
        assert_eq!(parse_key("+/-"), Key::Operator("⁺⁄₋".to_string()));
    }

    #[test]
    fn test_variables_and_store() {
        assert_eq!(parse_key("M"), Key::Variable("M".to_string()));
        assert_eq!(parse_key("x"), Key::Variable("x".to_string()));
        assert_eq!(parse_key("rate_2"), Key::Variable("rate_2".to_string()));
        assert_eq!(parse_key("->M"), Key::StoreResult("M".to_string()));
        assert_eq!(parse_key("→y"), Key::StoreResult("y".to_string()));
        assert_eq!(parse_key("undo"), Key::Undo);
    }

    #[test]
    fn test_unknown_forwarded_as_operator() {
        assert_eq!(parse_key("$"), Key::Operator("$".to_string()));
        assert_eq!(parse_key("1.2.3"), Key::Operator("1.2.3".to_string()));
    }

    #[test]
    fn test_drive_engine() {
        let mut brain = CalcBrain::new();
        for key in parse_keys("2 * pi = undo undo 3 =") {
            key.apply(&mut brain);
        }
        assert_eq!(brain.result(), 6.0);
        assert_eq!(brain.description(), "2×3=");
    }

    #[test]
    fn test_pending_constant_keeps_trace() {
        let mut brain = CalcBrain::new();
        for key in parse_keys("2 + pi 3 =") {
            key.apply(&mut brain);
        }
        assert_eq!(brain.result(), 5.0);
        assert_eq!(brain.description(), "2+π=");
    }

    #[test]
    fn test_graph_over_x() {
        let mut brain = CalcBrain::new();
        for key in parse_keys("x x^2") {
            key.apply(&mut brain);
        }
        assert_eq!(brain.evaluate_with_variable("x", 3.0), 9.0);
        assert_eq!(brain.description(), "(x)²=");
    }
}
