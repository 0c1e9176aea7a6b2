//! Command dispatch
//!
//! Each command reads its inputs, runs them through the core library and
//! writes one line per input, as plain text or as a JSON object.

use anyhow::{Context, Result};
use daxie_core::{extract, format_with, parse_match, Amount, AmountMatch};
use log::info;
use serde::Serialize;
use std::io::{self, BufRead, Write};

use crate::cli::{Cli, Command, ExtractArgs, FormatArgs, OutputFormat};
use crate::session::Session;

/// Main command dispatcher
pub struct Dispatcher {
    session: Session,
}

#[derive(Serialize)]
struct ExtractRecord<'a> {
    input: &'a str,
    amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    uppercase: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched: Option<&'a AmountMatch>,
}

#[derive(Serialize)]
struct FormatRecord<'a> {
    input: &'a str,
    uppercase: &'a str,
}

impl Dispatcher {
    /// Create a new dispatcher with the given session
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Execute the command specified in the CLI arguments
    pub fn execute(&mut self, cli: &Cli) -> Result<i32> {
        if self.session.verbose_enabled {
            if let Some(path) = self.session.init_file() {
                eprintln!("Using init file {}", path.display());
            }
        }
        info!("running {}", cli.command.command_name());

        let stdout = io::stdout();
        let mut out = stdout.lock();

        let code = match &cli.command {
            Command::Extract(args) => self.run_extract(args, false, &mut out)?,
            Command::Format(args) => self.run_format(args, &mut out)?,
            Command::Convert(args) => self.run_extract(args, true, &mut out)?,
        };

        out.flush().context("Failed to flush output")?;
        Ok(code)
    }

    /// Resolve the amount in each input; with `convert`, also write it in uppercase
    pub fn run_extract<W: Write>(&self, args: &ExtractArgs, convert: bool, out: &mut W) -> Result<i32> {
        let inputs = read_inputs(&args.text)?;

        for input in &inputs {
            let found = extract(input);
            let amount = found.as_ref().map_or(Amount::ZERO, parse_match).normalized();

            let uppercase = if convert {
                let text = format_with(&amount, &self.session.format)
                    .with_context(|| format!("Cannot convert the amount in {:?}", input))?;
                Some(text)
            } else {
                None
            };

            match self.session.output {
                OutputFormat::Text => {
                    let value = uppercase.clone().unwrap_or_else(|| amount.to_string());
                    match (&found, args.show_match) {
                        (Some(m), true) => {
                            writeln!(out, "{}\t{}\t{}..{}\t{}", value, m.kind, m.start, m.end, m.text)?
                        }
                        (None, true) => writeln!(out, "{}\t-", value)?,
                        (_, false) => writeln!(out, "{}", value)?,
                    }
                }
                OutputFormat::Json => {
                    let record = ExtractRecord {
                        input,
                        amount,
                        uppercase: uppercase.as_deref(),
                        matched: if args.show_match { found.as_ref() } else { None },
                    };
                    serde_json::to_writer(&mut *out, &record)?;
                    writeln!(out)?;
                }
            }
        }

        Ok(0)
    }

    /// Write each decimal argument in uppercase
    pub fn run_format<W: Write>(&self, args: &FormatArgs, out: &mut W) -> Result<i32> {
        for input in &args.amounts {
            let amount = input
                .parse::<Amount>()
                .with_context(|| format!("Invalid amount: {}", input))?;
            let uppercase = format_with(&amount, &self.session.format)
                .with_context(|| format!("Cannot format {}", input))?;

            match self.session.output {
                OutputFormat::Text => writeln!(out, "{}", uppercase)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &FormatRecord { input, uppercase: &uppercase })?;
                    writeln!(out)?;
                }
            }
        }

        Ok(0)
    }
}

/// Positional texts when given, otherwise every line of standard input
fn read_inputs(texts: &[String]) -> Result<Vec<String>> {
    if !texts.is_empty() {
        return Ok(texts.to_vec());
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read standard input")
}
