pub mod seed;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::output::OutputFormat;
use crate::utils::validation::Validate;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lab-registry")]
#[command(about = "Laboratory registry backed by an in-memory store")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// JSON seed file loaded into the store at startup
    #[arg(long)]
    pub seed: Option<String>,

    /// Output format: table, json or csv
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every lab in insertion order
    List,
    /// Validate a JSON form and register it as a new lab
    Add {
        #[arg(long)]
        input: String,
    },
    /// Validate a JSON form and replace the lab with the given id
    Update {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        input: String,
    },
    /// Print the id the next new lab would receive
    NextId,
}

/// TOML 與命令列合併後的設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed_path: Option<String>,
    pub format: OutputFormat,
    pub verbose: bool,
    pub log_json: bool,
}

impl Settings {
    /// Command line values win over the file; absent flags keep file values.
    pub fn resolve(
        file: TomlConfig,
        seed: Option<String>,
        format: Option<String>,
        verbose: bool,
        log_json: bool,
    ) -> Result<Self> {
        file.validate()?;

        let format = match format {
            Some(format) => format.parse()?,
            None => file.output_format().parse()?,
        };

        Ok(Self {
            seed_path: seed.or(file.seed.path),
            format,
            verbose: verbose || file.logging.verbose,
            log_json: log_json || file.logging.json,
        })
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Settings::resolve(
            file,
            self.seed.clone(),
            self.format.clone(),
            self.verbose,
            self.log_json,
        )
    }
}
