//! Rename plan loading
//!
//! A rename plan is a YAML file listing the operations to apply.

use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{config_parsing_error, file_operation_error, generic_error, Result};
use crate::transform::Operation;

/// A rename plan
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Config {
    /// Loads a rename plan from a file
    ///
    /// # Errors
    /// * Returns a file operation error if the file cannot be read
    /// * Returns a config parsing error if the YAML is not a valid plan
    pub fn load(file: &Path) -> Result<Config> {
        let content = fs::read_to_string(file)
            .map_err(|e| file_operation_error(e, file.to_path_buf(), "read"))?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            config_parsing_error(
                e,
                &format!("failed to parse {}, please check the YAML syntax", file.display()),
            )
        })?;

        debug!(
            "Loaded {} operation(s) from {}",
            config.operations.len(),
            file.display()
        );
        Ok(config)
    }

    /// Parses a rename plan from YAML text
    ///
    /// # Errors
    /// Returns a config parsing error if the YAML is not a valid plan
    pub fn from_yaml(content: &str) -> Result<Config> {
        serde_yaml::from_str(content)
            .map_err(|e| config_parsing_error(e, "please check the YAML syntax"))
    }
}

/// Resolves the path of a rename plan given on the command line
///
/// A leading `~` is expanded. A relative path that does not exist is looked
/// up in the per-user configuration directory instead.
pub fn resolve_config_path(config: &str) -> Result<PathBuf> {
    let path = PathBuf::from(shellexpand::tilde(config).as_ref());
    if path.exists() || path.is_absolute() {
        return Ok(path);
    }

    let folder = project_dirs()?;
    let candidate = folder.config_dir().join(&path);
    if candidate.exists() {
        debug!("Using rename plan from {}", candidate.display());
        Ok(candidate)
    } else {
        Ok(path)
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}

/// Gets the per-user configuration directory, creating it when missing
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = project_dirs()?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
