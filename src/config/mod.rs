//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::classifier::{MessageTable, Options, Outcome};
use crate::core::constants::{files, output_formats, schemes, threads};
use crate::core::error::{Result, UrlFormatError};
use crate::reporting::logging::log_warning;
use crate::suffix::PublicSuffixList;
use crate::uri::is_scheme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Allowed URL schemes
    pub schemes: Option<Vec<String>>,

    /// Accept absent values
    pub allow_nil: Option<bool>,

    /// Accept empty and whitespace-only values
    pub allow_blank: Option<bool>,

    /// Reject local and private hosts
    pub no_local: Option<bool>,

    /// Check domains against the public suffix list
    pub public_suffix: Option<bool>,

    /// Path to a `public_suffix_list.dat` file
    pub public_suffix_list: Option<String>,

    /// Message overrides keyed by reason code
    pub messages: Option<BTreeMap<String, String>>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Number of worker threads for batch classification
    pub threads: Option<usize>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schemes: None, // http and https
            allow_nil: Some(false),
            allow_blank: Some(false),
            no_local: Some(false),
            public_suffix: Some(false),
            public_suffix_list: None,
            messages: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            threads: None, // Will default to CPU core count
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlFormatError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::load_from_ancestors(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three of its parents.
    pub fn load_from_ancestors(dir: &Path) -> Self {
        let mut candidate = PathBuf::from(dir);
        for depth in 0..=files::CONFIG_SEARCH_DEPTH {
            if depth > 0 {
                candidate.push("..");
            }
            let path = candidate.join(files::CONFIG_FILE_NAME);
            if !path.is_file() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => log_warning(&format!("Ignoring {}: {e}", path.display())),
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Policy
        if let Some(ref schemes) = cli_config.schemes {
            self.schemes = Some(schemes.clone());
        }
        if cli_config.allow_nil {
            self.allow_nil = Some(true);
        }
        if cli_config.allow_blank {
            self.allow_blank = Some(true);
        }
        if cli_config.no_local {
            self.no_local = Some(true);
        }
        if cli_config.public_suffix {
            self.public_suffix = Some(true);
        }
        if let Some(ref list) = cli_config.public_suffix_list {
            self.public_suffix_list = Some(list.clone());
        }

        // Performance
        if let Some(threads) = cli_config.threads {
            self.threads = Some(threads);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref configured) = self.schemes {
            if configured.is_empty() {
                return Err(UrlFormatError::Config(
                    "Scheme list cannot be empty. Remove the key to use http and https."
                        .to_string(),
                ));
            }
            if let Some(bad) = configured.iter().find(|scheme| !is_scheme(scheme)) {
                return Err(UrlFormatError::Config(format!(
                    "'{bad}' is not a valid URL scheme. Expected a letter followed by letters, digits, '+', '-' or '.'."
                )));
            }
        }

        if let Some(count) = self.threads {
            if count == 0 {
                return Err(UrlFormatError::Config(
                    "Thread count cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if count > threads::MAX_THREADS {
                return Err(UrlFormatError::Config(format!(
                    "Thread count of {count} is extremely high and may cause system instability. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(UrlFormatError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref messages) = self.messages
            && let Some(unknown) = messages.keys().find(|k| Outcome::from_code(k).is_none())
        {
            let codes: Vec<&str> = Outcome::ALL.iter().map(|o| o.code()).collect();
            return Err(UrlFormatError::Config(format!(
                "Unknown reason code '{unknown}' in messages. Expected one of: {}.",
                codes.join(", ")
            )));
        }

        if self.public_suffix == Some(true) && self.public_suffix_list.is_none() {
            return Err(UrlFormatError::Config(
                "Public suffix checks need a list. Set public_suffix_list to a public_suffix_list.dat path."
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Build classifier options, loading the public suffix list when enabled.
    pub fn to_options(&self) -> Result<Options> {
        let mut options = Options::default()
            .allow_nil(self.allow_nil.unwrap_or(false))
            .allow_blank(self.allow_blank.unwrap_or(false))
            .filter_local(self.no_local.unwrap_or(false));

        options = match self.schemes {
            Some(ref configured) => options.with_schemes(configured),
            None => options.with_schemes(schemes::DEFAULT),
        };

        if self.public_suffix.unwrap_or(false) {
            options = match self.public_suffix_list {
                Some(ref path) => {
                    let list = PublicSuffixList::load_from_file(path)?;
                    options.with_suffix_list(Arc::new(list))
                }
                None => options.check_public_suffix(true),
            };
        }

        Ok(options)
    }

    /// Build the message table with configured overrides applied.
    pub fn message_table(&self) -> Result<MessageTable> {
        let mut table = MessageTable::default();
        if let Some(ref messages) = self.messages {
            for (code, message) in messages {
                let outcome = Outcome::from_code(code).ok_or_else(|| {
                    UrlFormatError::Config(format!("Unknown reason code '{code}' in messages"))
                })?;
                table = table.with_message(outcome, message.clone());
            }
        }
        Ok(table)
    }

    /// Output format, falling back to the default
    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Policy
    pub schemes: Option<Vec<String>>,        // --scheme
    pub allow_nil: bool,                     // --allow-nil
    pub allow_blank: bool,                   // --allow-blank
    pub no_local: bool,                      // --no-local
    pub public_suffix: bool,                 // --public-suffix
    pub public_suffix_list: Option<String>,  // --psl-file

    // Performance
    pub threads: Option<usize>, // --concurrency

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
