use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{stacks, words};

/// A user-defined tech stack or framework entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub description: String,
}

/// User-supplied catalog additions, deserialized from the optional
/// catalog file. Custom frameworks are keyed by the tech stack code they
/// are compatible with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogExtensions {
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    #[serde(default, rename = "tech-stacks")]
    pub tech_stacks: Vec<CodeEntry>,
    #[serde(default)]
    pub frameworks: BTreeMap<String, Vec<CodeEntry>>,
}

impl CatalogExtensions {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tech_stacks.is_empty() && self.frameworks.is_empty()
    }
}

/// Categorized word lists plus tech stack / framework reference data.
///
/// Lookups are pure and total: unknown keys yield empty results, never
/// errors. Built-in and user-supplied entries are merged at construction
/// time rather than branched over per call.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    categories: BTreeMap<String, Vec<String>>,
    tech_stacks: BTreeMap<String, String>,
    frameworks: BTreeMap<String, String>,
    compatibility: BTreeMap<String, Vec<String>>,
}

impl WordCatalog {
    /// Build a catalog holding only the built-in data.
    pub fn builtin() -> Self {
        let categories = words::BUILTIN_CATEGORIES
            .iter()
            .map(|name| {
                let list = words::builtin_words(name)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                ((*name).to_string(), list)
            })
            .collect();

        let tech_stacks = stacks::TECH_STACKS
            .iter()
            .map(|(code, description)| ((*code).to_string(), (*description).to_string()))
            .collect();

        let frameworks = stacks::FRAMEWORKS
            .iter()
            .map(|(code, description)| ((*code).to_string(), (*description).to_string()))
            .collect();

        let compatibility = stacks::STACK_FRAMEWORKS
            .iter()
            .map(|(code, frameworks)| {
                let list = frameworks.iter().map(ToString::to_string).collect();
                ((*code).to_string(), list)
            })
            .collect();

        Self {
            categories,
            tech_stacks,
            frameworks,
            compatibility,
        }
    }

    /// Merge user-supplied additions into the catalog. Words for an
    /// existing category are appended; new categories, stacks and
    /// frameworks are inserted. Custom frameworks extend the
    /// compatibility relation of the stack they are registered under.
    pub fn merge(&mut self, extensions: CatalogExtensions) {
        for (name, extra) in extensions.categories {
            let list = self.categories.entry(name).or_default();
            for word in extra {
                if !word.is_empty() && !list.contains(&word) {
                    list.push(word);
                }
            }
        }

        for entry in extensions.tech_stacks {
            self.tech_stacks.insert(entry.code.clone(), entry.description);
            self.compatibility.entry(entry.code).or_default();
        }

        for (stack, entries) in extensions.frameworks {
            let compatible = self.compatibility.entry(stack).or_default();
            for entry in entries {
                if !compatible.contains(&entry.code) {
                    compatible.push(entry.code.clone());
                }
                self.frameworks.insert(entry.code, entry.description);
            }
        }
    }

    /// Word list for a category; empty for unknown names.
    pub fn words_for_category(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All category names known to this catalog (built-in plus custom).
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn description_for_category(&self, category: &str) -> &'static str {
        words::builtin_description(category).unwrap_or("Custom category")
    }

    /// Tech stack code → description map.
    pub fn tech_stacks(&self) -> &BTreeMap<String, String> {
        &self.tech_stacks
    }

    /// Framework code → description map.
    pub fn frameworks(&self) -> &BTreeMap<String, String> {
        &self.frameworks
    }

    pub fn has_stack(&self, code: &str) -> bool {
        self.tech_stacks.contains_key(code)
    }

    pub fn describe_stack(&self, code: &str) -> Option<&str> {
        self.tech_stacks.get(code).map(String::as_str)
    }

    pub fn describe_framework(&self, code: &str) -> Option<&str> {
        self.frameworks.get(code).map(String::as_str)
    }

    /// Framework codes compatible with a tech stack; empty for unknown
    /// stacks.
    pub fn frameworks_for_stack(&self, code: &str) -> &[String] {
        self.compatibility
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_compatible(&self, stack: &str, framework: &str) -> bool {
        self.frameworks_for_stack(stack)
            .iter()
            .any(|code| code == framework)
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
