//! Command handlers.
//!
//! Each handler takes the address book and the positional arguments of one
//! command and returns either the success text or a [`BookError`]. Handlers
//! never format error text themselves; that happens once, in the dispatcher.

use crate::config::Config;
use crate::domain::Phone;
use crate::error::{BookError, BookResult};
use crate::matching::{ContactMatcher, ContactQuery};
use crate::models::{AddressBook, Record};
use tracing::info;

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const NO_CONTACTS: &str = "No contacts found.";

/// Split off the leading name argument.
fn split_name<'a>(command: &str, args: &'a [String]) -> BookResult<(&'a str, &'a [String])> {
    match args.split_first() {
        Some((name, rest)) => Ok((name.as_str(), rest)),
        None => Err(BookError::MissingArguments(command.to_string())),
    }
}

/// Reject surplus arguments to a fixed-arity command.
fn check_at_most(command: &str, args: &[String], max: usize) -> BookResult<()> {
    if args.len() > max {
        return Err(BookError::Unexpected(format!(
            "{} takes {} argument(s) but {} were given",
            command,
            max,
            args.len()
        )));
    }
    Ok(())
}

fn render_lines<'a>(records: impl Iterator<Item = &'a Record>) -> String {
    let lines: Vec<String> = records.map(Record::to_string).collect();
    if lines.is_empty() {
        NO_CONTACTS.to_string()
    } else {
        lines.join("\n")
    }
}

/// `add <name> [phone...]`: create a record, replacing any existing one.
///
/// Nothing is stored unless every phone is valid.
pub fn add_contact(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    let (name, phones) = split_name("add", args)?;

    let mut record = Record::new(name)?;
    for phone in phones {
        record.add_phone(phone)?;
    }

    let phone_count = record.phones().len();
    if book.add_record(record).is_some() {
        info!(name = %name, phones = phone_count, "Replaced existing contact");
    } else {
        info!(name = %name, phones = phone_count, "Contact added");
    }
    Ok(CONTACT_ADDED.to_string())
}

/// `change <name> <phone> [phone...]`: edit every given phone to the last one.
///
/// `change Bob 1111111111 2222222222` replaces `1111111111` with
/// `2222222222`. The name is looked up first. Old values are only lookup
/// keys; the target is validated before the record is touched, and every
/// edit writes the target, so a bad target changes nothing.
pub fn change_contact(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    let (name, phones) = split_name("change", args)?;
    let record = book.find_mut(name)?;
    let target = phones
        .last()
        .ok_or_else(|| BookError::MissingArguments("change".to_string()))?;

    Phone::validate(target)?;

    for phone in phones {
        record.edit_phone(phone, target)?;
    }

    info!(name = %name, phone = %target, "Contact updated");
    Ok(CONTACT_UPDATED.to_string())
}

/// `phone <name>`: render one record.
pub fn show_phone(book: &AddressBook, args: &[String]) -> BookResult<String> {
    check_at_most("phone", args, 1)?;
    let (name, _) = split_name("phone", args)?;
    Ok(book.find(name)?.to_string())
}

/// `all`: render every record, one per line.
pub fn show_all(book: &AddressBook, args: &[String]) -> BookResult<String> {
    check_at_most("all", args, 0)?;
    Ok(render_lines(book.iter()))
}

/// `delete <name>`: remove a record.
pub fn delete_contact(book: &mut AddressBook, args: &[String]) -> BookResult<String> {
    check_at_most("delete", args, 1)?;
    let (name, _) = split_name("delete", args)?;
    book.delete(name)?;
    info!(name = %name, "Contact deleted");
    Ok(CONTACT_DELETED.to_string())
}

/// `search <query...>`: fuzzy lookup by name, or by phone digits.
pub fn search_contacts(
    book: &AddressBook,
    args: &[String],
    matcher: &ContactMatcher,
    config: &Config,
) -> BookResult<String> {
    if args.is_empty() {
        return Err(BookError::MissingArguments("search".to_string()));
    }

    let query = ContactQuery::parse(&args.join(" "));
    let matches = matcher.find_matches(
        &query,
        book.iter(),
        config.max_search_results,
        config.match_threshold,
    );
    Ok(render_lines(matches.iter().map(|m| m.record)))
}
