//! The human-readable trace of the expression being built.

/// Trace shown when nothing has been entered.
pub const BLANK: &str = " ";

/// Expression trace with a marker for the operand written last.
///
/// The marker lets a unary operation pull a just-written constant or variable
/// back out and wrap it, whatever its length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    text: String,
    /// Byte offset where the trailing operand fragment starts.
    operand_start: Option<usize>,
}

impl Default for Description {
    fn default() -> Self {
        Self::new()
    }
}

impl Description {
    pub fn new() -> Self {
        Self {
            text: BLANK.to_string(),
            operand_start: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text == BLANK
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Replace the whole trace with a single operand.
    pub fn replace(&mut self, operand: &str) {
        self.text = operand.to_string();
        self.operand_start = Some(0);
    }

    /// Append operator text; no operand trails the trace afterwards.
    pub fn push_operator(&mut self, symbol: &str) {
        self.text.push_str(symbol);
        self.operand_start = None;
    }

    /// Append an operand fragment and remember where it starts.
    pub fn push_operand(&mut self, operand: &str) {
        self.operand_start = Some(self.text.len());
        self.text.push_str(operand);
    }

    /// Remove the trailing operand fragment and return it.
    pub fn take_operand(&mut self) -> Option<String> {
        let start = self.operand_start.take()?;
        Some(self.text.split_off(start))
    }

    /// The trace as callers see it: `...` while an operation is pending,
    /// `=` once complete, and the blank sentinel untouched.
    pub fn render(&self, partial: bool) -> String {
        if partial {
            format!("{}...", self.text)
        } else if self.is_blank() {
            self.text.clone()
        } else {
            format!("{}=", self.text)
        }
    }
}
