/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the default tables the classifier is built from,
/// so none of them is mutated at runtime.
/// URI scheme constants
pub mod schemes {
    /// Plain HTTP
    pub const HTTP: &str = "http";
    /// HTTP over TLS
    pub const HTTPS: &str = "https";

    /// Schemes accepted when none are configured
    pub const DEFAULT: [&str; 2] = [HTTP, HTTPS];
}

/// Top-level labels reserved for non-public networks
pub mod local_domains {
    /// Labels that mark a domain as local when it is the last one
    pub const TOP_LEVEL: [&str; 9] = [
        "local",
        "localhost",
        "intranet",
        "internet",
        "internal",
        "private",
        "corp",
        "home",
        "lan",
    ];
}

/// Default human-readable messages, keyed by reason code
pub mod messages {
    pub const VALID_URL: &str = "is a valid URL";
    pub const INVALID_URL: &str = "is not a valid URL";
    pub const NIL_OR_BLANK_URL: &str = "is nil or blank URL";
    pub const INVALID_SCHEME: &str = "a URL has invalid scheme";
    pub const INVALID_USERINFO: &str = "a URL has invalid user info";
    pub const LOCAL_URL: &str = "is a local URL";
    pub const SPACE_SYMBOL: &str = "a URL has space symbol";
    pub const PUBLIC_SUFFIX: &str = "a URL is invalid by public suffix";
}

/// Domain grammar limits
pub mod domain {
    /// Shortest accepted top-level label
    pub const MIN_TLD_LENGTH: usize = 2;
    /// Longest accepted top-level label
    pub const MAX_TLD_LENGTH: usize = 63;
}

/// Output format constants
pub mod output_formats {
    /// Text output format - every candidate with its reason code
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - rejected candidates only
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Process exit codes
pub mod exit_codes {
    /// Every candidate was classified as a valid URL
    pub const SUCCESS: i32 = 0;
    /// At least one candidate was rejected
    pub const REJECTED: i32 = 1;
    /// Configuration, input or usage error
    pub const ERROR: i32 = 2;
}

/// File processing constants
pub mod files {
    /// Name of the configuration file searched in standard locations
    pub const CONFIG_FILE_NAME: &str = ".urlformat.toml";
    /// How many parent directories are searched for a configuration file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Lines starting with this marker are skipped in candidate files
    pub const COMMENT_MARKER: char = '#';
    /// Argument that stands for standard input
    pub const STDIN_ARG: &str = "-";
}

/// Thread pool constants
pub mod threads {
    /// Upper bound accepted for the worker count
    pub const MAX_THREADS: usize = 1000;
}
