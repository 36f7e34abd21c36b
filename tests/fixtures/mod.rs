//! Shared helpers for contact book integration tests.

use contact_book::{repl, CommandDispatcher, Config, Reply};
use std::io::Cursor;

/// Dispatch a line and return the printed text.
///
/// Panics if the line ended the session or printed nothing.
#[allow(dead_code)]
pub fn say(dispatcher: &mut CommandDispatcher, line: &str) -> String {
    match dispatcher.dispatch(line) {
        Reply::Message(text) => text,
        other => panic!("Expected a message for {:?}, got: {:?}", line, other),
    }
}

/// A dispatcher with default configuration and the given contacts added.
#[allow(dead_code)]
pub fn dispatcher_with(contacts: &[(&str, &str)]) -> CommandDispatcher {
    let mut dispatcher = CommandDispatcher::new(Config::default());
    for (name, phone) in contacts {
        let reply = say(&mut dispatcher, &format!("add {} {}", name, phone));
        assert_eq!(reply, "Contact added.");
    }
    dispatcher
}

/// Run a full scripted session and return everything written to stdout.
#[allow(dead_code)]
pub fn run_script(script: &str) -> String {
    let mut dispatcher = CommandDispatcher::new(Config::default());
    let mut output = Vec::new();
    repl::run(&mut dispatcher, Cursor::new(script), &mut output).expect("session failed");
    String::from_utf8(output).expect("output is UTF-8")
}
