use std::path::PathBuf;
use std::str::FromStr;

use clap::{command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches, Command};
use glob::glob;
use log::debug;

use crate::config::{find_project_folder, resolve_config_path, Config};
use crate::constants::{
    CASE_HELP, CONFIG_HELP, FILES_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP,
    REPLACE_HELP, REVERSE_HELP, SPACING_HELP, SWAP_HELP, VERBOSE_HELP,
};
use crate::errors::{
    file_operation_error, generic_error, glob_pattern_error, invalid_argument_error, Result,
};
use crate::logging::LogLevel;
use crate::transform::{CaseMode, Operation};

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `files`: Files or glob patterns to preview
/// - `config`: Path to a YAML rename plan
/// - `replace`, `swap`, `spacing`, `reverse`, `case`: Inline operations
/// - `verbose`, `log_file`, `log_locally`: Logging
pub fn build_command() -> Command {
    let arg_files = Arg::new("files")
        .help(FILES_HELP)
        .value_name("FILES")
        .num_args(1..)
        .required(true);

    // define arg for reading the rename plan from a file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PLAN")
        .help(CONFIG_HELP);

    let arg_replace = Arg::new("replace")
        .long("replace")
        .value_names(["ORIGINAL", "REPLACEMENT"])
        .num_args(2)
        .allow_hyphen_values(true)
        .help(REPLACE_HELP);

    let arg_swap = Arg::new("swap")
        .long("swap")
        .value_name("SEPARATOR")
        .allow_hyphen_values(true)
        .help(SWAP_HELP);

    let arg_spacing = Arg::new("spacing")
        .long("spacing")
        .help(SPACING_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_reverse = Arg::new("reverse")
        .long("reverse")
        .help(REVERSE_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_case = Arg::new("case")
        .long("case")
        .value_name("MODE")
        .help(CASE_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    // define arg for local logging
    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_files)
        .arg(arg_config)
        .arg(arg_replace)
        .arg(arg_swap)
        .arg(arg_spacing)
        .arg(arg_reverse)
        .arg(arg_case)
        .arg(arg_verbose)
        .arg(log_file)
        .arg(log_locally)
}

/// Parses the process arguments, exiting with a usage message when they are invalid
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path, or an empty string when no log file was asked for
///
/// Unless `--log-locally` is given, the file is placed in the per-user
/// configuration directory.
pub fn get_log_file(matches: &ArgMatches) -> Result<String> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() || matches.get_flag("log_locally") {
        return Ok(filename);
    }

    let folder = find_project_folder()?;
    let path = folder.config_dir().join(filename);
    let path_str = path
        .to_str()
        .ok_or_else(|| generic_error(&format!("Failed to convert path to string: {path:?}")))?;
    Ok(path_str.to_string())
}

/// Collects the operations to apply
///
/// Operations from the rename plan come first, followed by the inline ones
/// in the order replace, swap, reverse, case.
///
/// # Errors
/// * Returns an error if the rename plan cannot be read or parsed
/// * Returns an invalid argument error for a malformed separator or case mode
pub fn get_operations(matches: &ArgMatches) -> Result<Vec<Operation>> {
    let mut operations = match matches.get_one::<String>("config") {
        Some(config) => Config::load(&resolve_config_path(config)?)?.operations,
        None => Vec::new(),
    };

    if let Some(mut values) = matches.get_many::<String>("replace") {
        if let (Some(original), Some(replacement)) = (values.next(), values.next()) {
            operations.push(Operation::Replace {
                original: original.clone(),
                replacement: replacement.clone(),
            });
        }
    }

    if let Some(separator) = matches.get_one::<String>("swap") {
        operations.push(Operation::Swap {
            separator: parse_separator(separator)?,
            spacing: matches.get_flag("spacing"),
        });
    }

    if matches.get_flag("reverse") {
        operations.push(Operation::Reverse);
    }

    if let Some(mode) = matches.get_one::<String>("case") {
        let mode = CaseMode::from_str(mode).map_err(|e| invalid_argument_error("case", &e))?;
        operations.push(Operation::Case { mode });
    }

    debug!("Operations to apply: {operations:?}");
    Ok(operations)
}

fn parse_separator(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(invalid_argument_error(
            "swap",
            "the separator must be exactly one character",
        )),
    }
}

/// Expands the file arguments
///
/// Each argument is treated as a glob pattern. An argument that matches
/// nothing is kept as given so that the preview reports it.
pub fn get_files(matches: &ArgMatches) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in matches.get_many::<String>("files").into_iter().flatten() {
        let mut matched = glob(pattern)
            .map_err(|e| glob_pattern_error(e, pattern))?
            .map(|entry| {
                entry.map_err(|e| {
                    let path = e.path().to_path_buf();
                    file_operation_error(e.into_error(), path, "access")
                })
            })
            .collect::<Result<Vec<PathBuf>>>()?;

        if matched.is_empty() {
            files.push(PathBuf::from(pattern));
        } else {
            files.append(&mut matched);
        }
    }

    Ok(files)
}
