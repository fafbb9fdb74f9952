//! Display snapshot a view layer binds to.

use super::brain::CalcBrain;
use super::format::format_number;

/// What the calculator screen shows after an event.
#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    /// The raw accumulator.
    pub result: f64,
    /// The accumulator in the fixed display format.
    /// Empty if the number could not be formatted.
    pub display_result: String,
    /// The expression trace with its `...` or `=` marker.
    pub description: String,
    /// Whether a binary operation is waiting for its second operand.
    pub is_partial: bool,
    /// Whether the result is NaN or infinite.
    pub is_error: bool,
}

impl Readout {
    /// Take a snapshot of the engine.
    pub fn from_brain(brain: &CalcBrain) -> Self {
        let result = brain.result();
        Self {
            result,
            display_result: format_number(result).unwrap_or_default(),
            description: brain.description(),
            is_partial: brain.is_partial_result(),
            is_error: !result.is_finite(),
        }
    }

    /// Single line for terminal output: description, then result.
    pub fn line(&self) -> String {
        let description = self.description.trim();
        if description.is_empty() {
            self.display_result.clone()
        } else {
            format!("{}  {}", description, self.display_result)
        }
    }
}

impl From<&CalcBrain> for Readout {
    fn from(brain: &CalcBrain) -> Self {
        Self::from_brain(brain)
    }
}
