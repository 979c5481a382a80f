// Command-line interface definitions and parsing for urlformat

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// URLs to classify ('-' reads one per line from stdin)
    pub urls: Vec<String>,

    // Input
    /// Read URLs from a file, one per line ('#' starts a comment)
    #[arg(short = 'f', long = "file", value_name = "FILE", help_heading = "Input")]
    pub files: Vec<PathBuf>,

    /// Read values from a file holding a JSON array
    #[arg(long = "json", value_name = "FILE", help_heading = "Input")]
    pub json_files: Vec<PathBuf>,

    // Policy
    /// Allowed scheme (repeatable or comma-separated, default: http,https)
    #[arg(
        short = 's',
        long = "scheme",
        value_name = "SCHEME",
        value_delimiter = ',',
        help_heading = "Policy"
    )]
    pub schemes: Vec<String>,

    /// Accept null values
    #[arg(long, help_heading = "Policy")]
    pub allow_nil: bool,

    /// Accept empty and whitespace-only values
    #[arg(long, help_heading = "Policy")]
    pub allow_blank: bool,

    /// Reject loopback, private and local-network hosts
    #[arg(long, help_heading = "Policy")]
    pub no_local: bool,

    /// Check domains against the public suffix list
    #[arg(long, help_heading = "Policy")]
    pub public_suffix: bool,

    /// Path to public_suffix_list.dat
    #[arg(long, value_name = "FILE", help_heading = "Policy")]
    pub psl_file: Option<String>,

    // Performance
    /// Worker threads (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Performance")]
    pub concurrency: Option<usize>,

    // Output & Verbosity
    /// Suppress all log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    /// True when no input source was given at all
    pub fn has_no_input(&self) -> bool {
        self.urls.is_empty() && self.files.is_empty() && self.json_files.is_empty()
    }
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    // Policy
    let schemes: Vec<String> = cli
        .schemes
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if !schemes.is_empty() {
        cli_config.schemes = Some(schemes);
    }
    cli_config.allow_nil = cli.allow_nil;
    cli_config.allow_blank = cli.allow_blank;
    cli_config.no_local = cli.no_local;
    cli_config.public_suffix = cli.public_suffix;
    cli_config.public_suffix_list = cli.psl_file.clone();

    // Performance
    cli_config.threads = cli.concurrency;

    // Output & format
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.output_format = cli.format.clone();

    // Configuration
    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    cli_config
}
