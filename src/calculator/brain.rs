//! The calculator state machine.
//!
//! Operands and operator presses mutate the accumulator, extend the program
//! log and update the expression trace. Undo and program loading both reset
//! the state and replay the log through the same entry points.

use super::description::Description;
use super::format::{format_number, format_or_empty};
use super::operation::{self, Operation};
use super::program::{Program, ProgramEntry};
use super::variables::{MEMORY_VARIABLE, VariableStore};

/// A binary operation waiting for its second operand.
#[derive(Clone, Copy, Debug)]
struct PendingBinaryOperation {
    function: fn(f64, f64) -> f64,
    first_operand: f64,
}

impl PendingBinaryOperation {
    fn perform(&self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CalcBrain {
    accumulator: f64,
    pending: Option<PendingBinaryOperation>,
    /// The current operand was written to the trace as a constant or a
    /// wrapped unary result.
    is_constant: bool,
    /// The current operand was written to the trace as a variable name.
    is_variable_operand: bool,
    description: Description,
    variables: VariableStore,
    program: Program,
}

impl CalcBrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with preset variables.
    pub fn with_variables(variables: VariableStore) -> Self {
        Self {
            variables,
            ..Self::default()
        }
    }

    /// Current accumulator.
    pub fn result(&self) -> f64 {
        self.accumulator
    }

    /// Whether a binary operation is waiting for its second operand.
    pub fn is_partial_result(&self) -> bool {
        self.pending.is_some()
    }

    /// The expression trace with its `...` or `=` marker.
    pub fn description(&self) -> String {
        self.description.render(self.is_partial_result())
    }

    /// The expression trace without any marker.
    pub fn trace(&self) -> &str {
        self.description.text()
    }

    pub fn format_number(value: f64) -> Option<String> {
        format_number(value)
    }

    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.set(name, value);
    }

    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    pub fn program(&self) -> &[ProgramEntry] {
        self.program.entries()
    }

    /// Reset the engine and replay `entries` as if they had been entered.
    pub fn set_program(&mut self, entries: Vec<ProgramEntry>) {
        self.reset();
        for entry in entries {
            self.replay_entry(entry);
        }
    }

    /// Enter a number as the current operand.
    pub fn enter_number(&mut self, value: f64) {
        tracing::trace!(value, "Entering number");

        self.accumulator = value;
        self.program.push(ProgramEntry::Number(value));

        if !self.is_partial_result() {
            self.description.replace(&format_or_empty(value));
        }
    }

    /// Enter a variable as the current operand, creating it at `0.0` if unset.
    pub fn enter_variable(&mut self, name: &str) {
        tracing::trace!(name, "Entering variable");

        self.accumulator = self.variables.resolve(name);
        self.program.push(ProgramEntry::symbol(name));

        if self.is_partial_result() {
            self.description.push_operand(name);
            self.is_variable_operand = true;
        } else {
            self.description.replace(name);
        }
    }

    /// Press an operator button. Unknown symbols are ignored.
    pub fn apply_operator(&mut self, symbol: &str) {
        let Some(operation) = operation::lookup(symbol) else {
            tracing::debug!(symbol, "Ignoring unknown operator");
            return;
        };
        tracing::trace!(symbol, "Applying operator");

        match operation {
            Operation::Constant(value) => {
                if self.is_partial_result() {
                    self.description.push_operand(symbol);
                } else {
                    self.description.replace(symbol);
                }
                self.accumulator = value;
                self.is_constant = true;
            }

            Operation::Unary {
                function,
                display,
                notation,
            } => {
                if self.is_partial_result() {
                    let fragment = self
                        .take_constant_operand()
                        .unwrap_or_else(|| format_or_empty(self.accumulator));
                    self.description.push_operand(&notation.wrap(&fragment, display));
                    // The wrapped text now stands in for the second operand
                    self.is_constant = true;
                } else {
                    let fragment = if self.description.is_blank() {
                        format_or_empty(self.accumulator)
                    } else {
                        self.description.text().to_string()
                    };
                    self.description.replace(&notation.wrap(&fragment, display));
                }
                self.accumulator = function(self.accumulator);
            }

            Operation::Binary(function) => {
                self.flush_pending();
                self.description.push_operator(symbol);
                self.pending = Some(PendingBinaryOperation {
                    function,
                    first_operand: self.accumulator,
                });
            }

            Operation::Equals => self.flush_pending(),

            Operation::Clear => {
                self.clear();
                return;
            }
        }

        self.program.push(ProgramEntry::symbol(symbol));
    }

    /// Reset everything and forget the `M` variable. Other variables survive.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing calculator");
        self.variables.remove(MEMORY_VARIABLE);
        self.reset();
    }

    /// Drop the last program entry and rebuild the state from the rest.
    pub fn undo(&mut self) {
        if self.program.pop().is_none() {
            return;
        }
        tracing::debug!(remaining = self.program.len(), "Undoing last entry");
        self.rerun();
    }

    /// Replay the current program against the current variable values.
    pub fn rerun(&mut self) {
        let entries = self.program.take();
        self.set_program(entries);
    }

    /// Store the current result in `name` and replay the program, so that
    /// operands referring to `name` pick up the new value.
    pub fn store_result_in(&mut self, name: &str) {
        let value = self.accumulator;
        tracing::debug!(name, value, "Storing result in variable");
        self.variables.set(name, value);
        self.rerun();
    }

    /// Evaluate the program with `name` bound to `value`.
    ///
    /// The variable keeps the new value afterwards.
    pub fn evaluate_with_variable(&mut self, name: &str, value: f64) -> f64 {
        self.variables.set(name, value);
        self.rerun();
        self.accumulator
    }

    fn replay_entry(&mut self, entry: ProgramEntry) {
        match entry {
            ProgramEntry::Number(value) => self.enter_number(value),
            ProgramEntry::Symbol(name) if self.variables.contains(&name) => {
                self.enter_variable(&name)
            }
            ProgramEntry::Symbol(symbol) => self.apply_operator(&symbol),
        }
    }

    /// Complete the pending binary operation, writing a plain-number second
    /// operand to the trace first.
    fn flush_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        if !self.is_constant && !self.is_variable_operand {
            self.description
                .push_operand(&format_or_empty(self.accumulator));
        } else {
            self.is_constant = false;
            self.is_variable_operand = false;
        }

        self.accumulator = pending.perform(self.accumulator);
    }

    /// Pull a just-written constant back out of the trace so a unary
    /// operation can wrap it instead of repeating it.
    fn take_constant_operand(&mut self) -> Option<String> {
        if self.is_constant {
            self.description.take_operand()
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.is_constant = false;
        self.is_variable_operand = false;
        self.description.clear();
        self.program.clear();
    }
}
