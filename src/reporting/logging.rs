use crate::classifier::Options;
use log::{debug, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the effective classification policy
pub fn log_options(options: &Options, actual_threads: usize) {
    let mut schemes: Vec<&str> = options.allowed_schemes().iter().map(String::as_str).collect();
    schemes.sort_unstable();

    info!(
        "Configuration: threads={actual_threads}, schemes=[{}]",
        schemes.join(", ")
    );
    info!(
        "Policy: allow_nil={}, allow_blank={}, no_local={}, public_suffix={}",
        options.allows_nil(),
        options.allows_blank(),
        options.filters_local(),
        options.checks_public_suffix()
    );
}

/// Log how many candidates were collected and from how many sources
pub fn log_input_summary(candidates: usize, sources: &[String]) {
    info!("Collected {candidates} candidate(s) from {} source(s)", sources.len());
    for (i, source) in sources.iter().enumerate() {
        debug!("  {}. {}", i + 1, source);
    }
}

/// Log classification completion
pub fn log_classification_complete(total: usize, rejected: usize, duration_ms: u128) {
    if rejected == 0 {
        info!("Classification complete: {total}/{total} valid ({duration_ms}ms)");
    } else {
        warn!(
            "Classification complete: {}/{} valid, {} rejected ({}ms)",
            total - rejected,
            total,
            rejected,
            duration_ms
        );
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
