/// Constants used throughout the application
///
/// This module centralises the application's identity, its command-line help
/// texts and its defaults.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name used to locate the per-user configuration directory.
pub const APPLICATION: &str = "namely";

/// Help text for the files argument
pub const FILES_HELP: &str = "Files to preview, glob patterns are expanded";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read the rename plan from a YAML file";

/// Help text for the replace command-line option
pub const REPLACE_HELP: &str = "Replace every occurrence of ORIGINAL with REPLACEMENT";

/// Help text for the swap command-line option
pub const SWAP_HELP: &str = "Swap the parts of the name around a single SEPARATOR character";

/// Help text for the spacing command-line option
pub const SPACING_HELP: &str = "Put a space on both sides of the separator when swapping";

/// Help text for the reverse command-line option
pub const REVERSE_HELP: &str = "Reverse the name, keeping its extension";

/// Help text for the case command-line option
pub const CASE_HELP: &str = "Change letter case: lower, upper or invert";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Keep the log file path as given instead of placing it in the config directory";

/// Default log file; empty means no log file
pub const LOG_FILE_DEFAULT: &str = "";
