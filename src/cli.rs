use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::segment::{Locale, MountMode, ZeroTotalPolicy};

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// TOML, as it would appear in a config file (default)
    #[default]
    Toml,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "segment-bar")]
#[command(author, version, about = "Render segmented horizontal bar charts")]
#[command(long_about = "Render a list of values as a proportional, segmented bar.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Input data could not be read or parsed\n  \
    2 - Configuration error, or the output could not be written")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default `env_logger` filter for the verbosity flags. `RUST_LOG` still wins.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render chart data to html, svg or json
    Render(RenderArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Default)]
pub struct RenderArgs {
    /// Chart data file (.json or .toml); reads JSON from stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output format [possible values: html, fragment, svg, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bar width as a CSS length (overrides input and config)
    #[arg(long)]
    pub width: Option<String>,

    /// Bar height as a CSS length (overrides input and config)
    #[arg(long)]
    pub height: Option<String>,

    /// Locale for value labels, e.g. en-US, de-DE, fr-FR, plain
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Segments below this percentage get the small marker
    #[arg(long)]
    pub small_threshold: Option<f64>,

    /// Behavior when all values are zero [possible values: zero-width, propagate]
    #[arg(long)]
    pub zero_total: Option<ZeroTotalPolicy>,

    /// Whether existing children are kept [possible values: append, replace]
    #[arg(long)]
    pub mount: Option<MountMode>,

    /// Document title for html and svg output
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".segment-bar.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file (default: .segment-bar.toml)
        #[arg(default_value = ".segment-bar.toml")]
        path: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
