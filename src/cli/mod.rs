// CLI module for command-line interface

pub mod categories;
pub mod generate;
pub mod new;
pub mod stacks;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::config::CatalogSource;
use crate::utils::error::Result;

use self::categories::CategoriesCommand;
use self::generate::GenerateCommand;
use self::new::NewCommand;
use self::stacks::StacksCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "dirgen")]
#[command(about = "Generate memorable, filesystem-safe scratch directory names")]
#[command(long_about = r#"dirgen generates human-readable, randomized directory names from curated
word lists and optionally creates the directories.

Names come in two shapes:
  • Simple:   {word}-{suffix}                        e.g. tech-a1b2
  • Enhanced: {stack}-{framework}-{word}-{suffix}    e.g. bepy-dja-pizza-x9k2

Suffixes can be alphabetic, numeric, mixed alphanumeric, or a timestamp,
and every generated name is checked against filesystem naming rules.

Examples:
  dirgen generate -c food -n 5          Five names themed on food
  dirgen generate --seed 42             Reproducible output
  dirgen new -t bepy -f dja --create    Enhanced name, directory created
  dirgen categories                     List word categories
  dirgen stacks --stack bens            Frameworks for Backend Node.js

Custom categories, stacks and frameworks can be added in
~/.dirgen/catalog.toml (see --config)."#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a catalog extension file (default: ~/.dirgen/catalog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate simple folder names
    #[command(long_about = r#"Generate folder names of the form {word}-{suffix}.

The theme word is drawn from the chosen category ("all" picks a random
category per name). Suffix kinds: alpha (a-z, length 3-8), numeric (no
leading zero, length 1-6), mixed (a-z0-9, length 3-8), timestamp (epoch
seconds, length ignored). A non-zero --seed makes the output reproducible.

Examples:
  dirgen generate -c tech
  dirgen generate -c food -n 5
  dirgen generate -c silly -s numeric -l 6
  dirgen generate -c all -n 10 --json
  dirgen generate -c dev --create"#)]
    Generate {
        /// Category to draw words from (tech, food, animals, pop, silly, dev, all)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Suffix kind (alpha, numeric, mixed, timestamp)
        #[arg(short, long, default_value = "mixed")]
        suffix: String,

        /// Suffix length (1-8, clamped per suffix kind)
        #[arg(short, long, default_value_t = 4)]
        length: usize,

        /// Number of names to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Random seed for reproducible results (0 = time-derived)
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Create a directory for each generated name
        #[arg(long)]
        create: bool,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Generate an enhanced four-part project name
    #[command(long_about = r#"Generate a name of the form {stack}-{framework}-{word}-{suffix}.

The stack and framework codes lead the name and must be a compatible
pair; `dirgen stacks` lists the codes. The theme word and suffix follow
the same rules as `dirgen generate`.

Examples:
  dirgen new -t bepy -f dja
  dirgen new -t bens -f exp -c animals -s alpha -l 5
  dirgen new -t fsts -f nxt --create
  dirgen new -t mlpy -f pt --json"#)]
    New {
        /// Tech stack code (see `dirgen stacks`)
        #[arg(short = 't', long)]
        stack: String,

        /// Framework code compatible with the tech stack
        #[arg(short, long)]
        framework: String,

        /// Category to draw the theme word from
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Suffix kind (alpha, numeric, mixed, timestamp)
        #[arg(short, long, default_value = "mixed")]
        suffix: String,

        /// Suffix length (1-8, clamped per suffix kind)
        #[arg(short, long, default_value_t = 4)]
        length: usize,

        /// Random seed for reproducible results (0 = time-derived)
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Create a directory for the generated name
        #[arg(long)]
        create: bool,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// List all available word categories
    #[command(long_about = r#"List all available word categories with description and word count.

Custom categories from the catalog file are included.

Examples:
  dirgen categories
  dirgen categories --json"#)]
    Categories {
        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// List tech stacks and their compatible frameworks
    #[command(long_about = r#"List tech stack codes, or the frameworks compatible with one stack.

Examples:
  dirgen stacks
  dirgen stacks --stack bepy
  dirgen stacks --json"#)]
    Stacks {
        /// Show the frameworks compatible with this tech stack code
        #[arg(short, long)]
        stack: Option<String>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(cli: Cli) -> Result<()> {
        let catalog = CatalogSource::load_catalog(cli.config.as_deref())?;

        match cli.command {
            Commands::Generate {
                category,
                suffix,
                length,
                count,
                seed,
                create,
                json,
            } => {
                let cmd = GenerateCommand {
                    category,
                    suffix,
                    length,
                    count,
                    seed,
                    create,
                    json,
                };
                cmd.run(catalog)
            }

            Commands::New {
                stack,
                framework,
                category,
                suffix,
                length,
                seed,
                create,
                json,
            } => {
                let cmd = NewCommand {
                    stack,
                    framework,
                    category,
                    suffix,
                    length,
                    seed,
                    create,
                    json,
                };
                cmd.run(catalog)
            }

            Commands::Categories { json } => {
                let cmd = CategoriesCommand { json };
                cmd.run(catalog)
            }

            Commands::Stacks { stack, json } => {
                let cmd = StacksCommand { stack, json };
                cmd.run(catalog)
            }
        }
    }
}
