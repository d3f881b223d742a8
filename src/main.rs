use std::{io::{self, Write}, path::Path, process::ExitCode};

use colored::Colorize;
use eyre::WrapErr;
use rustyline::DefaultEditor;
use tracing::error;
use uuidv5::{config::{CONFIG_FILE, Config}, error::SessionError, interactive::run_session, logging, report::{example_derivations, write_examples}};

fn print_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
	writeln!(out, "{}", title.bold())?;
	writeln!(out, "{}", "=".repeat(title.len()))
}

fn run(config: &Config) -> Result<(), SessionError> {
	let stdout = io::stdout();
	let mut out = stdout.lock();

	print_banner(&mut out, "UUIDv5 Generator")?;
	writeln!(out)?;

	if config.show_examples {
		write_examples(&mut out, &example_derivations(), config.format)?;
		writeln!(out)?;
	}

	print_banner(&mut out, "Interactive Generator:")?;

	let mut editor = DefaultEditor::new()?;
	run_session(&mut editor, &mut out, config)?;
	Ok(())
}

fn main() -> color_eyre::Result<ExitCode> {
	color_eyre::install()?;

	let config = Config::load(Path::new(CONFIG_FILE)).wrap_err("Failed to load configuration")?;
	logging::init(config.level()?);

	match run(&config) {
		Ok(()) => Ok(ExitCode::SUCCESS),
		Err(e) => {
			error!("Session failed: {}", e);
			eprintln!("{} {}", "Error:".red(), e);
			Ok(ExitCode::FAILURE)
		}
	}
}
