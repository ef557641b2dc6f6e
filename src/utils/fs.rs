// Directory creation helpers

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::utils::error::{DirgenError, Result};
use crate::utils::validation::is_valid_directory_name;

/// Hard cap on directories created by a single batch run.
pub const MAX_DIRECTORIES_PER_RUN: usize = 20;

/// Create a directory under the current working directory after
/// validating its name. Succeeds idempotently if the directory already
/// exists; fails if the path is occupied by a non-directory.
pub fn create_directory(name: &str) -> Result<()> {
    create_directory_in(Path::new("."), name)
}

/// Like [`create_directory`], with an explicit parent directory.
pub fn create_directory_in(parent: &Path, name: &str) -> Result<()> {
    if !is_valid_directory_name(name) {
        return Err(DirgenError::Validation(format!(
            "invalid directory name: {name}"
        )));
    }

    fs::create_dir_all(parent.join(name))?;
    debug!(name, "created directory");

    Ok(())
}

pub fn directory_exists(name: &str) -> bool {
    Path::new(name).exists()
}

/// Bounds-check a batch directory count (1..=MAX_DIRECTORIES_PER_RUN).
pub fn validate_directory_count(count: usize) -> Result<()> {
    if count < 1 {
        return Err(DirgenError::Validation(
            "count must be at least 1".to_string(),
        ));
    }
    if count > MAX_DIRECTORIES_PER_RUN {
        return Err(DirgenError::Validation(format!(
            "cannot create more than {MAX_DIRECTORIES_PER_RUN} directories at once"
        )));
    }
    Ok(())
}
