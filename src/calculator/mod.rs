//! Calculator engine.
//!
//! This module provides:
//! - An operator registry and a variable store
//! - The evaluation state machine with its program log and undo
//! - The expression trace and the fixed number format
//! - Keypad token classification and a display snapshot

mod brain;
mod description;
mod format;
mod keys;
pub mod operation;
mod program;
mod readout;
mod variables;

#[cfg(test)]
mod proptests;

pub use brain::CalcBrain;
pub use description::{BLANK, Description};
pub use format::{MAX_FRACTION_DIGITS, format_number};
pub use keys::{Key, parse_key, parse_keys};
pub use operation::{Notation, Operation};
pub use program::{Program, ProgramEntry, from_json, to_json};
pub use readout::Readout;
pub use variables::{MEMORY_VARIABLE, VariableStore};
