use clap::{CommandFactory, Parser};
use urlformat::batch::{self, Candidate};
use urlformat::config::{CliConfig, Config};
use urlformat::core::constants::exit_codes;
use urlformat::core::error::Result;
use urlformat::reporting::logging;
use urlformat::ui::completion::print_completions;
use urlformat::ui::output;
use urlformat::ui::{Cli, Commands, cli_to_config};

use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    if cli.has_no_input() {
        eprintln!("Error: No URLs provided");
        eprintln!("\nFor more information, try '--help'.");
        std::process::exit(exit_codes::ERROR);
    }

    match run_urlformat_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(exit_codes::SUCCESS)
        }
        None => None,
    }
}

/// Main classification logic extracted from main()
pub fn run_urlformat_logic(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;
    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let options = config.to_options()?;
    let messages = config.message_table()?;
    let threads = config.threads.unwrap_or_else(num_cpus::get);
    logging::log_options(&options, threads);

    let candidates = collect_candidates(cli)?;

    let start = Instant::now();
    let reports = batch::classify_all(candidates, &options, threads)?;
    let summary = batch::summarize(&reports);
    logging::log_classification_complete(
        summary.total,
        summary.rejected,
        start.elapsed().as_millis(),
    );

    output::display_results(&reports, &summary, &messages, config.output_format())?;

    Ok(determine_exit_code(&summary))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Gather candidates from arguments, stdin, text files and JSON files
pub fn collect_candidates(cli: &Cli) -> Result<Vec<Candidate>> {
    let stdin = std::io::stdin();
    let mut candidates = batch::collect_from_args(&cli.urls, stdin.lock())?;
    candidates.extend(batch::collect_from_files(
        &cli.files,
        batch::collect_from_file,
    )?);
    candidates.extend(batch::collect_from_files(
        &cli.json_files,
        batch::collect_from_json_file,
    )?);

    let mut sources = Vec::new();
    if !cli.urls.is_empty() {
        sources.push(batch::ARGUMENT_SOURCE.to_string());
    }
    sources.extend(
        cli.files
            .iter()
            .chain(&cli.json_files)
            .map(|path| path.display().to_string()),
    );
    logging::log_input_summary(candidates.len(), &sources);

    Ok(candidates)
}

/// Exit code for a finished batch
pub fn determine_exit_code(summary: &batch::Summary) -> i32 {
    if summary.all_valid() {
        exit_codes::SUCCESS
    } else {
        exit_codes::REJECTED
    }
}
