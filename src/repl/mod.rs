//! REPL Module
//!
//! The interactive loop: tokenizing input lines, the command registry,
//! and the session state the commands run against.

pub mod commands;
pub mod input;
pub mod session;

pub use commands::{run_command, Command, Flow};
pub use input::clean_input;
pub use session::{run, ReplState};
