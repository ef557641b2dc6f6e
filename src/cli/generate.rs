use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::catalog::WordCatalog;
use crate::models::generation::{GenerationConfig, SuffixKind};
use crate::services::generator::NameGenerator;
use crate::utils::error::{DirgenError, Result};
use crate::utils::fs;

/// Generate simple folder names of the form `{word}-{suffix}`
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Category to draw words from (tech, food, animals, pop, silly, dev, all)
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Suffix kind (alpha, numeric, mixed, timestamp)
    #[arg(short, long, default_value = "mixed")]
    pub suffix: String,

    /// Suffix length (1-8, clamped per suffix kind)
    #[arg(short, long, default_value_t = 4)]
    pub length: usize,

    /// Number of names to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Random seed for reproducible results (0 = time-derived)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Create a directory for each generated name
    #[arg(long)]
    pub create: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the generate command
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub count: usize,
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Vec<String>>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn run(&self, catalog: WordCatalog) -> Result<()> {
        let config = self.generation_config();
        let mut generator = NameGenerator::new(config, catalog);
        let names = generator.generate();

        let created = if self.create {
            Some(create_directories(&names)?)
        } else {
            None
        };

        if self.json {
            let response = GenerateResponse {
                count: names.len(),
                names,
                created,
            };
            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                DirgenError::Validation(format!("failed to serialize JSON response: {e}"))
            })?;
            println!("{json_output}");
        } else {
            print_names(&names);
            if let Some(created) = created {
                for name in created {
                    println!("Created directory: {name}");
                }
            }
        }

        Ok(())
    }

    /// Translate CLI flags into a generation config, normalizing
    /// unrecognized suffix kinds and out-of-range lengths to defaults.
    fn generation_config(&self) -> GenerationConfig {
        let suffix_kind = SuffixKind::from_name(&self.suffix).unwrap_or_else(|| {
            warn!(kind = %self.suffix, "unknown suffix kind, using mixed");
            SuffixKind::Mixed
        });

        let suffix_length = if (1..=8).contains(&self.length) {
            self.length
        } else {
            warn!(
                length = self.length,
                "suffix length out of range, using default 4"
            );
            4
        };

        GenerationConfig {
            category: self.category.clone(),
            suffix_kind,
            suffix_length,
            count: self.count,
            seed: self.seed,
        }
    }
}

/// Create a directory per name, skipping individual failures. Errors only
/// when the batch is out of bounds or nothing could be created.
fn create_directories(names: &[String]) -> Result<Vec<String>> {
    fs::validate_directory_count(names.len())?;

    let mut created = Vec::with_capacity(names.len());
    for name in names {
        match fs::create_directory(name) {
            Ok(()) => created.push(name.clone()),
            Err(err) => warn!(name = %name, %err, "skipping directory"),
        }
    }

    if created.is_empty() {
        return Err(DirgenError::Validation(
            "failed to create any directories".to_string(),
        ));
    }

    Ok(created)
}

fn print_names(names: &[String]) {
    if let [name] = names {
        println!("Generated folder name: {name}");
    } else {
        println!("Generated folder names:");
        for (i, name) in names.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
    }
}
