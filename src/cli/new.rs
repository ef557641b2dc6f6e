use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::catalog::WordCatalog;
use crate::models::generation::{GenerationConfig, SuffixKind, CATEGORY_ALL};
use crate::services::generator::NameGenerator;
use crate::utils::error::{DirgenError, Result};
use crate::utils::fs;

/// Generate an enhanced four-part name: `{stack}-{framework}-{word}-{suffix}`
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Tech stack code (see `dirgen stacks`)
    #[arg(short = 't', long)]
    pub stack: String,

    /// Framework code compatible with the tech stack
    #[arg(short, long)]
    pub framework: String,

    /// Category to draw the theme word from
    #[arg(short, long, default_value = CATEGORY_ALL)]
    pub category: String,

    /// Suffix kind (alpha, numeric, mixed, timestamp)
    #[arg(short, long, default_value = "mixed")]
    pub suffix: String,

    /// Suffix length (1-8, clamped per suffix kind)
    #[arg(short, long, default_value_t = 4)]
    pub length: usize,

    /// Random seed for reproducible results (0 = time-derived)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Create a directory for the generated name
    #[arg(long)]
    pub create: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the new command
#[derive(Debug, Serialize, Deserialize)]
pub struct NewResponse {
    pub name: String,
    pub stack: String,
    pub framework: String,
    pub created: bool,
}

impl NewCommand {
    /// Execute the new command
    pub fn run(&self, catalog: WordCatalog) -> Result<()> {
        // Stack and framework codes end up as the leading components of
        // the name, so typos here are rejected instead of normalized.
        if !catalog.has_stack(&self.stack) {
            return Err(DirgenError::Validation(format!(
                "unknown tech stack '{}' (run 'dirgen stacks' to list codes)",
                self.stack
            )));
        }
        if !catalog.is_compatible(&self.stack, &self.framework) {
            return Err(DirgenError::Validation(format!(
                "framework '{}' is not compatible with tech stack '{}' \
                 (run 'dirgen stacks --stack {}' to list compatible frameworks)",
                self.framework, self.stack, self.stack
            )));
        }

        let suffix_kind = SuffixKind::from_name(&self.suffix).unwrap_or_else(|| {
            warn!(kind = %self.suffix, "unknown suffix kind, using mixed");
            SuffixKind::Mixed
        });

        let config = GenerationConfig {
            seed: self.seed,
            ..GenerationConfig::default()
        };
        let mut generator = NameGenerator::new(config, catalog);
        let name = generator.generate_enhanced(
            &self.stack,
            &self.framework,
            &self.category,
            suffix_kind,
            self.length,
        )?;

        if self.create {
            fs::create_directory(&name)?;
        }

        if self.json {
            let response = NewResponse {
                name: name.clone(),
                stack: self.stack.clone(),
                framework: self.framework.clone(),
                created: self.create,
            };
            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                DirgenError::Validation(format!("failed to serialize JSON response: {e}"))
            })?;
            println!("{json_output}");
        } else {
            println!("Generated folder name: {name}");
            if self.create {
                println!("Created directory: {name}");
            }
        }

        Ok(())
    }
}
