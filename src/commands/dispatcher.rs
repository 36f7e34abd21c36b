//! Command dispatcher.
//!
//! Owns the address book for the length of a session, routes each input
//! line to its handler, and is the single place where a [`BookError`] is
//! turned into the text the user sees.

use super::handlers;
use super::parser::{parse_input, Command};
use crate::config::Config;
use crate::error::{BookError, BookResult};
use crate::matching::ContactMatcher;
use crate::models::AddressBook;
use tracing::{debug, warn};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the loop should do after a line has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Message(String),

    /// Print the text and stop
    Exit(String),

    /// Nothing to print (blank line)
    Silent,
}

/// Routes parsed commands to handlers against one address book.
pub struct CommandDispatcher {
    book: AddressBook,
    matcher: ContactMatcher,
    config: Config,
}

impl CommandDispatcher {
    /// Create a dispatcher over an empty address book.
    pub fn new(config: Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create a dispatcher over an existing address book.
    pub fn with_book(book: AddressBook, config: Config) -> Self {
        Self {
            book,
            matcher: ContactMatcher::new(),
            config,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Hand the address book back, ending the session.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Parse and run one input line.
    pub fn dispatch(&mut self, line: &str) -> Reply {
        let Some((keyword, args)) = parse_input(line) else {
            return Reply::Silent;
        };

        let command = Command::from_keyword(&keyword);
        debug!(command = command.keyword(), args = args.len(), "Dispatching command");

        match command {
            Command::Exit => Reply::Exit(FAREWELL.to_string()),
            Command::Hello => Reply::Message(GREETING.to_string()),
            Command::Unknown(_) => Reply::Message(INVALID_COMMAND.to_string()),
            other => {
                let result = self.execute(&other, &args);
                Reply::Message(Self::render(&other, result))
            }
        }
    }

    /// Run a data command without translating its error.
    ///
    /// Loop-control commands (`hello`, `exit`) and unknown keywords are not
    /// data commands and fail with `BookError::Unexpected`.
    pub(crate) fn execute(&mut self, command: &Command, args: &[String]) -> BookResult<String> {
        match command {
            Command::Add => handlers::add_contact(&mut self.book, args),
            Command::Change => handlers::change_contact(&mut self.book, args),
            Command::Phone => handlers::show_phone(&self.book, args),
            Command::All => handlers::show_all(&self.book, args),
            Command::Delete => handlers::delete_contact(&mut self.book, args),
            Command::Search => {
                handlers::search_contacts(&self.book, args, &self.matcher, &self.config)
            }
            Command::Hello | Command::Exit | Command::Unknown(_) => Err(BookError::Unexpected(
                format!("{} is not a contact command", command.keyword()),
            )),
        }
    }

    /// Translate a handler result into user-facing text.
    fn render(command: &Command, result: BookResult<String>) -> String {
        match result {
            Ok(text) => text,
            Err(err) => {
                match &err {
                    BookError::Unexpected(_) => {
                        warn!(command = command.keyword(), error = %err, "Command failed")
                    }
                    _ => debug!(command = command.keyword(), error = %err, "Command rejected"),
                }
                err.user_message()
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(text) => text,
            other => panic!("Expected a message, got: {:?}", other),
        }
    }

    #[test]
    fn test_loop_control_commands() {
        let mut dispatcher = CommandDispatcher::default();
        assert_eq!(dispatcher.dispatch("hello"), Reply::Message(GREETING.to_string()));
        assert_eq!(dispatcher.dispatch("close"), Reply::Exit(FAREWELL.to_string()));
        assert_eq!(dispatcher.dispatch("EXIT"), Reply::Exit(FAREWELL.to_string()));
        assert_eq!(dispatcher.dispatch("   "), Reply::Silent);
    }

    #[test]
    fn test_unknown_command() {
        let mut dispatcher = CommandDispatcher::default();
        assert_eq!(message(dispatcher.dispatch("fly away")), INVALID_COMMAND);
    }

    #[test]
    fn test_errors_are_translated() {
        let mut dispatcher = CommandDispatcher::default();
        assert_eq!(message(dispatcher.dispatch("phone Nobody")), "Contact not found.");
        assert_eq!(message(dispatcher.dispatch("add Alice 123")), "Invalid value provided.");
        assert_eq!(message(dispatcher.dispatch("add")), "Missing required arguments.");
        assert_eq!(
            message(dispatcher.dispatch("all now")),
            "An unexpected error occurred: all takes 0 argument(s) but 1 were given"
        );
    }

    #[test]
    fn test_execute_returns_raw_errors() {
        let mut dispatcher = CommandDispatcher::default();
        assert_eq!(
            dispatcher.execute(&Command::Phone, &["Nobody".to_string()]),
            Err(BookError::NotFound("Nobody".to_string()))
        );
        assert!(matches!(
            dispatcher.execute(&Command::Hello, &[]),
            Err(BookError::Unexpected(_))
        ));
    }

    #[test]
    fn test_dispatcher_owns_book() {
        let mut dispatcher = CommandDispatcher::default();
        assert_eq!(message(dispatcher.dispatch("add Alice 1234567890")), "Contact added.");
        assert_eq!(dispatcher.book().len(), 1);

        let book = dispatcher.into_book();
        assert!(book.find("Alice").is_ok());
    }
}
