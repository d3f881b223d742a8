//! The interactive half of the front end: ask for a namespace choice and a
//! name, then print what was derived. Input goes through [`Prompt`] so the
//! session can run against the line editor or a scripted source.

use std::io::Write;

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{info, instrument};

use crate::{config::Config, error::SessionError, menu::{MENU, MenuChoice, Selection}, report::{Derivation, write_result}};

pub enum Reply {
	Line(String),
	Cancelled,
}

pub trait Prompt {
	fn ask(&mut self, message: &str) -> Result<Reply, SessionError>;
}

impl Prompt for DefaultEditor {
	fn ask(&mut self, message: &str) -> Result<Reply, SessionError> {
		match self.readline(message) {
			Ok(line) => Ok(Reply::Line(line)),
			Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(Reply::Cancelled),
			Err(e) => Err(SessionError::Prompt(e)),
		}
	}
}

/// Runs one round of the menu. Returns `None` when the user cancels at either
/// prompt; nothing is derived in that case.
#[instrument(skip_all)]
pub fn run_session<P: Prompt, W: Write>(
	prompt: &mut P,
	out: &mut W,
	config: &Config,
) -> Result<Option<Derivation>, SessionError> {
	for line in MENU {
		writeln!(out, "{line}")?;
	}
	out.flush()?;

	let Reply::Line(choice) = prompt.ask("Enter choice (1-3): ")? else {
		return cancelled(out);
	};
	let Reply::Line(name) = prompt.ask("Enter the name/string to generate UUID from: ")? else {
		return cancelled(out);
	};

	let choice = MenuChoice::parse(&choice);
	if let MenuChoice::Invalid(_) = choice {
		writeln!(out, "Invalid choice, using {} namespace", config.fallback_namespace)?;
	}

	let derivation = Selection::from_choice(&choice, config.fallback_namespace).derive(name.trim());
	info!("Derived {} for {:?}", derivation.uuid, derivation.name);

	write_result(out, &derivation, config.format)?;
	Ok(Some(derivation))
}

fn cancelled<W: Write>(out: &mut W) -> Result<Option<Derivation>, SessionError> {
	writeln!(out)?;
	writeln!(out, "Operation cancelled.")?;
	Ok(None)
}
