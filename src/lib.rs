//! Contact Book - an interactive command-line store of names and phone numbers.
//!
//! Contacts live in memory for the length of one session; nothing is
//! persisted.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`)
//! - **models**: `Record` (one contact) and `AddressBook` (all contacts)
//! - **error**: Error kinds and their user-facing messages
//! - **config**: Configuration from environment variables
//! - **matching**: Fuzzy name and phone matching for `search`
//! - **commands**: Input parsing, handlers, and the dispatcher
//! - **repl**: The read-dispatch-print loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repl;

pub use commands::{parse_input, Command, CommandDispatcher, Reply};
pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use matching::{ContactMatcher, ContactQuery, MatchResult, MatchType};
pub use models::{AddressBook, Record};
