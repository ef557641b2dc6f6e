// Common error types for dirgen

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// An assembled name failed filesystem-safety validation. The only
    /// error originating in the generation core.
    #[error("generated name '{0}' is not valid for a filesystem")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, DirgenError>;

/// User-facing rendering of a [`DirgenError`] with a process exit code.
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_dirgen_error(err: &DirgenError) -> Self {
        let exit_code = match err {
            DirgenError::Validation(_) | DirgenError::InvalidName(_) => 1,
            DirgenError::Config(_) => 2,
            DirgenError::Io(_) => 3,
        };

        Self {
            message: err.to_string(),
            exit_code,
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
    }
}
