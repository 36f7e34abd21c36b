//! Interactive loop.
//!
//! Reads one line at a time, dispatches it, and prints the reply. The loop
//! is generic over its input and output so sessions can be scripted.

use crate::commands::{CommandDispatcher, Reply};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run a session until `close`/`exit` or end of input.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the session with an error;
/// command failures are printed and the loop continues.
pub fn run<R, W>(dispatcher: &mut CommandDispatcher, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                debug!("End of input");
                writeln!(output)?;
                break;
            }
        };

        match dispatcher.dispatch(&line) {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
            Reply::Silent => {}
        }
    }

    info!(contacts = dispatcher.book().len(), "Session ended");
    Ok(())
}
