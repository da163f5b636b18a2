//! Campus navigation CLI library.
//!
//! Command handlers, terminal styling, and output formatting for the
//! `campusnav` binary.

pub mod commands;
pub mod output;
pub mod terminal;
