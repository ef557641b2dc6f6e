// Dirgen - scratch directory name generator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::catalog::WordCatalog;
pub use models::generation::{GenerationConfig, SuffixKind};
pub use services::generator::NameGenerator;
