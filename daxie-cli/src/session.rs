//! Session state and configuration management
//!
//! Settings are layered: built-in defaults, then `DAXIE_*` environment
//! variables, then the init file, then command-line flags.

use crate::cli::{Cli, OutputFormat};
use anyhow::{Context, Result};
use daxie_core::{FormatConfig, Rounding};
use log::debug;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Global session state for the daxie application
pub struct Session {
    /// Configuration loaded from files and environment
    pub config: Config,

    /// Formatting options resolved from every configuration layer
    pub format: FormatConfig,

    /// Output format resolved from every configuration layer
    pub output: OutputFormat,

    /// Whether verbose mode is enabled
    pub verbose_enabled: bool,
}

/// Configuration loaded from init files and environment variables
#[derive(Debug, Default)]
pub struct Config {
    /// Key-value configuration options
    pub options: HashMap<String, String>,

    /// Init file that was read, if any
    pub init_file: Option<PathBuf>,
}

impl Session {
    /// Create a new session from command-line arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut config = Config::default();

        // Load configuration if not in args-only mode
        if !cli.args_only {
            config.load_environment()?;
            config.load_init_file(cli)?;
        }
        config.apply_cli(cli);

        let format = config.format_config()?;
        let output = match config.options.get("output") {
            Some(value) => value.parse::<OutputFormat>().context("Invalid output option")?,
            None => OutputFormat::default(),
        };

        debug!("session options: {:?}", config.options);

        Ok(Session { config, format, output, verbose_enabled: cli.verbose })
    }

    /// Init file the settings were read from, if any
    pub fn init_file(&self) -> Option<&Path> {
        self.config.init_file.as_deref()
    }
}

impl Config {
    /// Load configuration from environment variables
    fn load_environment(&mut self) -> Result<()> {
        if let Ok(init_file) = env::var("DAXIE_INIT") {
            self.options.insert("init-file".to_string(), init_file);
        }

        for (key, value) in env::vars() {
            if let Some(name) = key.strip_prefix("DAXIE_") {
                if key != "DAXIE_INIT" {
                    self.options.insert(name.to_lowercase().replace('_', "-"), value);
                }
            }
        }

        Ok(())
    }

    /// Load configuration from init file
    fn load_init_file(&mut self, cli: &Cli) -> Result<()> {
        let explicit = cli
            .init_file
            .as_ref()
            .or_else(|| self.options.get("init-file"))
            .map(PathBuf::from);

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Init file not found: {}", path.display());
                }
                path
            }
            None => match default_init_file() {
                Some(path) => path,
                None => return Ok(()),
            },
        };

        self.parse_init_file(&path)?;
        self.init_file = Some(path);
        Ok(())
    }

    /// Parse an init file and load its configuration
    fn parse_init_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read init file: {}", path.display()))?;

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            self.parse_init_option(line).with_context(|| {
                format!("Error parsing init file {} at line {}", path.display(), line_num + 1)
            })?;
        }

        Ok(())
    }

    /// Parse a single `--option value` line from init file
    fn parse_init_option(&mut self, line: &str) -> Result<()> {
        let Some(option_line) = line.strip_prefix("--") else {
            anyhow::bail!("Expected an option starting with --, found {:?}", line);
        };

        let (option, value) = match option_line.split_once(char::is_whitespace) {
            Some((option, value)) => (option, value.trim().to_string()),
            None => (option_line, "true".to_string()),
        };

        self.options.insert(option.to_string(), value);
        Ok(())
    }

    /// Command-line flags override every other source
    fn apply_cli(&mut self, cli: &Cli) {
        let overrides = [
            ("rounding", cli.rounding.clone()),
            ("terminal", cli.terminal.clone()),
            ("negative-prefix", cli.negative_prefix.clone()),
            ("output", cli.output.map(|o| format!("{:?}", o).to_lowercase())),
        ];

        for (key, value) in overrides {
            if let Some(value) = value {
                self.options.insert(key.to_string(), value);
            }
        }
    }

    /// Build the formatter configuration from the collected options
    pub fn format_config(&self) -> Result<FormatConfig> {
        let mut format = FormatConfig::new();

        if let Some(rounding) = self.options.get("rounding") {
            let rounding = rounding.parse::<Rounding>().context("Invalid rounding option")?;
            format = format.with_rounding(rounding);
        }

        if let Some(terminal) = self.options.get("terminal") {
            let mut chars = terminal.trim().chars();
            let glyph = match (chars.next(), chars.next()) {
                (Some(glyph), None) => glyph,
                _ => anyhow::bail!("Invalid terminal option: expected one glyph, got {:?}", terminal),
            };
            format = format.with_terminal(glyph).context("Invalid terminal option")?;
        }

        if let Some(prefix) = self.options.get("negative-prefix") {
            format = format.with_negative_prefix(prefix.clone());
        }

        Ok(format)
    }
}

/// First existing init file among the default locations
fn default_init_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Check for XDG config directory
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        candidates.push(PathBuf::from(xdg_config).join("daxie").join("daxierc"));
    }

    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(".daxierc"));
        candidates.push(home_dir.join(".config").join("daxie").join("daxierc"));
    }

    candidates.into_iter().find(|p| p.exists())
}
