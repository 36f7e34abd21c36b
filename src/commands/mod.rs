//! Command layer.
//!
//! Turns a line of text into a command and its arguments, runs it against
//! the address book, and renders the outcome as a single reply.

pub mod dispatcher;
pub mod handlers;
pub mod parser;

pub use dispatcher::{CommandDispatcher, Reply};
pub use parser::{parse_input, Command};
