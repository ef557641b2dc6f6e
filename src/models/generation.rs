use serde::{Deserialize, Serialize};
use std::fmt;

/// Category selector meaning "pick one of the built-in categories at
/// random".
pub const CATEGORY_ALL: &str = "all";

/// Fallback word substituted when a category resolves to an empty list.
pub const FALLBACK_WORD: &str = "folder";

/// Upper bound on names produced by a single generation run.
pub const MAX_NAMES_PER_RUN: usize = 100;

/// Algorithm used for the randomized trailing token of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixKind {
    /// Lowercase letters a-z, length clamped to [3, 8].
    Alpha,
    /// Decimal digits without a leading zero, length clamped to [1, 6].
    Numeric,
    /// Lowercase letters and digits, length clamped to [3, 8].
    Mixed,
    /// Unix epoch seconds modulo 100 000 000; requested length ignored.
    Timestamp,
}

impl SuffixKind {
    /// Parse a kind name. Unknown names yield `None`; callers normalize
    /// to [`SuffixKind::Mixed`] rather than failing.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "alpha" => Some(Self::Alpha),
            "numeric" => Some(Self::Numeric),
            "mixed" => Some(Self::Mixed),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Numeric => "numeric",
            Self::Mixed => "mixed",
            Self::Timestamp => "timestamp",
        }
    }

    /// Clamp a requested suffix length to the legal range for this kind.
    pub fn clamp_length(self, requested: usize) -> usize {
        match self {
            Self::Alpha | Self::Mixed => requested.clamp(3, 8),
            Self::Numeric => requested.clamp(1, 6),
            Self::Timestamp => requested,
        }
    }
}

impl fmt::Display for SuffixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable-per-call generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Category name, or [`CATEGORY_ALL`] for a random pick per name.
    pub category: String,
    pub suffix_kind: SuffixKind,
    pub suffix_length: usize,
    /// Names per run; non-positive values are treated as 1.
    pub count: usize,
    /// PRNG seed. Zero means time-derived (non-reproducible); any other
    /// value makes the output sequence deterministic.
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            suffix_kind: SuffixKind::Mixed,
            suffix_length: 4,
            count: 1,
            seed: 0,
        }
    }
}
