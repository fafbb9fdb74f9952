//! An undoable calculator engine.
//!
//! [`CalcBrain`] accepts operand and operator events, keeps a running result
//! and a readable trace of the expression, and replays its program log for
//! undo and program loading.

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{CalcBrain, ProgramEntry, Readout, format_number};
