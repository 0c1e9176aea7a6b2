//! Command-line interface definitions using Clap
//!
//! Global options configure formatting and logging; each subcommand works on
//! its positional inputs, or on standard input lines when none are given.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// daxie - read and write Chinese uppercase currency amounts
#[derive(Parser)]
#[command(name = "daxie")]
#[command(version, about = "Extract amounts from text and write them as Chinese uppercase numerals", long_about = None)]
pub struct Cli {
    /// Initialization file to use
    #[arg(short = 'i', long = "init-file", global = true)]
    pub init_file: Option<String>,

    /// Ignore DAXIE_* environment variables and init files
    #[arg(long = "args-only", global = true)]
    pub args_only: bool,

    /// Rounding applied below li precision (half-even, half-up)
    #[arg(long = "rounding", global = true)]
    pub rounding: Option<String>,

    /// Glyph closing amounts without jiao/fen/li (整 or 正)
    #[arg(long = "terminal", global = true)]
    pub terminal: Option<String>,

    /// Prefix written in front of negative amounts
    #[arg(long = "negative-prefix", global = true)]
    pub negative_prefix: Option<String>,

    /// Output format
    #[arg(long = "output", short = 'o', global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    /// Enable trace logging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Print the amount found in each text, in yuan (alias: x)
    #[command(name = "extract", aliases = &["x"])]
    Extract(ExtractArgs),

    /// Write decimal amounts as uppercase numerals (alias: f)
    #[command(name = "format", aliases = &["f"])]
    Format(FormatArgs),

    /// Extract the amount from each text and write it as uppercase numerals (alias: c)
    #[command(name = "convert", aliases = &["c"])]
    Convert(ExtractArgs),
}

impl Command {
    /// Get the command name as a string
    pub fn command_name(&self) -> &'static str {
        match &self {
            Command::Extract(_) => "extract",
            Command::Format(_) => "format",
            Command::Convert(_) => "convert",
        }
    }
}

#[derive(Args)]
pub struct ExtractArgs {
    /// Texts to search; standard input lines are read when omitted
    pub text: Vec<String>,

    /// Also show which substring was matched and where
    #[arg(long = "show-match", short = 'm')]
    pub show_match: bool,
}

#[derive(Args)]
pub struct FormatArgs {
    /// Decimal amounts such as 1105000.00 or -3.5
    #[arg(required = true, allow_hyphen_values = true)]
    pub amounts: Vec<String>,
}

/// How results are written to standard output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One plain line per input
    #[default]
    Text,
    /// One JSON object per input
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow::anyhow!("Unknown output format: {}", other)),
        }
    }
}
