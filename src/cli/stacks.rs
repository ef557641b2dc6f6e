use clap::Args;
use serde::{Deserialize, Serialize};

use crate::models::catalog::WordCatalog;
use crate::utils::error::{DirgenError, Result};

/// List tech stacks, or the frameworks compatible with one stack
#[derive(Debug, Args)]
pub struct StacksCommand {
    /// Show the frameworks compatible with this tech stack code
    #[arg(short, long)]
    pub stack: Option<String>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// One code/description row in the JSON listing
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeInfo {
    pub code: String,
    pub description: String,
}

impl StacksCommand {
    /// Execute the stacks command
    pub fn run(&self, catalog: WordCatalog) -> Result<()> {
        match &self.stack {
            Some(stack) => self.list_frameworks(&catalog, stack),
            None => self.list_stacks(&catalog),
        }
    }

    fn list_stacks(&self, catalog: &WordCatalog) -> Result<()> {
        let infos: Vec<CodeInfo> = catalog
            .tech_stacks()
            .iter()
            .map(|(code, description)| CodeInfo {
                code: code.clone(),
                description: description.clone(),
            })
            .collect();

        if self.json {
            print_json(&infos)?;
        } else {
            println!("Available tech stacks:");
            for info in &infos {
                println!("  {} - {}", info.code, info.description);
            }
            println!();
            println!("Use 'dirgen stacks --stack <code>' to list compatible frameworks.");
        }

        Ok(())
    }

    fn list_frameworks(&self, catalog: &WordCatalog, stack: &str) -> Result<()> {
        let description = catalog.describe_stack(stack).ok_or_else(|| {
            DirgenError::Validation(format!(
                "unknown tech stack '{stack}' (run 'dirgen stacks' to list codes)"
            ))
        })?;

        let infos: Vec<CodeInfo> = catalog
            .frameworks_for_stack(stack)
            .iter()
            .map(|code| CodeInfo {
                code: code.clone(),
                description: catalog
                    .describe_framework(code)
                    .unwrap_or("Custom framework")
                    .to_string(),
            })
            .collect();

        if self.json {
            print_json(&infos)?;
        } else {
            println!("Frameworks compatible with {stack} ({description}):");
            for info in &infos {
                println!("  {} - {}", info.code, info.description);
            }
        }

        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json_output = serde_json::to_string_pretty(value)
        .map_err(|e| DirgenError::Validation(format!("failed to serialize JSON response: {e}")))?;
    println!("{json_output}");
    Ok(())
}
