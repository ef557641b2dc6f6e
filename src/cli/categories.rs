use clap::Args;
use serde::{Deserialize, Serialize};

use crate::models::catalog::WordCatalog;
use crate::utils::error::{DirgenError, Result};

/// List the available word categories
#[derive(Debug, Args)]
pub struct CategoriesCommand {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// One category row in the JSON listing
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    pub description: String,
    pub words: usize,
}

impl CategoriesCommand {
    /// Execute the categories command
    pub fn run(&self, catalog: WordCatalog) -> Result<()> {
        let infos: Vec<CategoryInfo> = catalog
            .category_names()
            .map(|name| CategoryInfo {
                name: name.to_string(),
                description: catalog.description_for_category(name).to_string(),
                words: catalog.words_for_category(name).len(),
            })
            .collect();

        if self.json {
            let json_output = serde_json::to_string_pretty(&infos).map_err(|e| {
                DirgenError::Validation(format!("failed to serialize JSON response: {e}"))
            })?;
            println!("{json_output}");
        } else {
            println!("Available categories:");
            for info in &infos {
                println!(
                    "  {} - {} ({} words)",
                    info.name, info.description, info.words
                );
            }
            println!("  all - One random category per generated name");
            println!();
            println!("Use 'dirgen generate -c <category>' to generate names from a specific category.");
        }

        Ok(())
    }
}
