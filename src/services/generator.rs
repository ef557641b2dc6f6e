// Name generation engine

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::models::catalog::WordCatalog;
use crate::models::generation::{
    GenerationConfig, SuffixKind, CATEGORY_ALL, FALLBACK_WORD, MAX_NAMES_PER_RUN,
};
use crate::models::words::BUILTIN_CATEGORIES;
use crate::utils::error::{DirgenError, Result};
use crate::utils::validation::is_valid_directory_name;

const ALPHA_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const MIXED_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Produces composite directory names from a [`WordCatalog`].
///
/// Each generator owns a single seeded PRNG; every random decision
/// (category, word, suffix symbols) draws from it in the documented order
/// category → word → suffix. Two generators constructed with the same
/// non-zero seed produce identical output for identical call sequences.
/// The RNG is not synchronized: concurrent callers need one generator
/// each.
pub struct NameGenerator {
    config: GenerationConfig,
    catalog: WordCatalog,
    rng: ChaCha8Rng,
}

impl NameGenerator {
    pub fn new(config: GenerationConfig, catalog: WordCatalog) -> Self {
        let seed = if config.seed == 0 {
            time_derived_seed()
        } else {
            config.seed
        };
        debug!(seed, "seeding name generator");

        Self {
            config,
            catalog,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate `config.count` simple names of the form `{word}-{suffix}`.
    ///
    /// Never fails: non-positive counts produce one name, counts above
    /// [`MAX_NAMES_PER_RUN`] are capped, and empty categories fall back to
    /// the placeholder word.
    pub fn generate(&mut self) -> Vec<String> {
        let count = self.config.count.clamp(1, MAX_NAMES_PER_RUN);

        (0..count)
            .map(|_| {
                let category = self.select_category();
                let word = self.select_word(&category);
                let suffix = self.suffix(self.config.suffix_kind, self.config.suffix_length);
                format!("{word}{suffix}")
            })
            .collect()
    }

    /// Generate one validated simple name with explicit parameters,
    /// bypassing the configured category/suffix settings.
    pub fn generate_single(
        &mut self,
        category: &str,
        kind: SuffixKind,
        length: usize,
    ) -> Result<String> {
        let category = self.resolve_category(category);
        let word = self.select_word(&category);
        let suffix = self.suffix(kind, length);
        let name = format!("{word}{suffix}");

        if !is_valid_directory_name(&name) {
            return Err(DirgenError::InvalidName(name));
        }

        Ok(name)
    }

    /// Generate a validated four-part name
    /// `{stack}-{framework}-{word}-{suffix}`.
    ///
    /// Stack and framework codes are used verbatim; compatibility between
    /// them is the caller's concern. Validation failure is the only error
    /// path.
    pub fn generate_enhanced(
        &mut self,
        stack: &str,
        framework: &str,
        category: &str,
        kind: SuffixKind,
        length: usize,
    ) -> Result<String> {
        let category = self.resolve_category(category);
        let word = self.select_word(&category);
        let suffix = self.suffix(kind, length);
        let name = format!("{stack}-{framework}-{word}{suffix}");

        if !is_valid_directory_name(&name) {
            return Err(DirgenError::InvalidName(name));
        }

        Ok(name)
    }

    /// The configured category, or a uniformly random built-in category
    /// when the selector is "all" or empty.
    fn select_category(&mut self) -> String {
        let selector = self.config.category.clone();
        self.resolve_category(&selector)
    }

    fn resolve_category(&mut self, selector: &str) -> String {
        if selector == CATEGORY_ALL || selector.is_empty() {
            let index = self.rng.random_range(0..BUILTIN_CATEGORIES.len());
            return BUILTIN_CATEGORIES[index].to_string();
        }
        selector.to_string()
    }

    /// A uniformly random word from the category list, or the literal
    /// fallback word when the list is empty.
    fn select_word(&mut self, category: &str) -> String {
        let words = self.catalog.words_for_category(category);
        if words.is_empty() {
            debug!(category, "empty word list, using fallback word");
            return FALLBACK_WORD.to_string();
        }

        let index = self.rng.random_range(0..words.len());
        words[index].clone()
    }

    fn suffix(&mut self, kind: SuffixKind, length: usize) -> String {
        match kind {
            SuffixKind::Alpha => self.symbol_suffix(ALPHA_CHARS, kind.clamp_length(length)),
            SuffixKind::Mixed => self.symbol_suffix(MIXED_CHARS, kind.clamp_length(length)),
            SuffixKind::Numeric => self.numeric_suffix(kind.clamp_length(length)),
            SuffixKind::Timestamp => timestamp_suffix(),
        }
    }

    fn symbol_suffix(&mut self, alphabet: &[u8], length: usize) -> String {
        let mut suffix = String::with_capacity(length + 1);
        suffix.push('-');
        for _ in 0..length {
            let index = self.rng.random_range(0..alphabet.len());
            suffix.push(alphabet[index] as char);
        }
        suffix
    }

    /// A random integer occupying exactly `length` decimal digits. No
    /// leading zero, except that a length of 1 allows 0-9.
    fn numeric_suffix(&mut self, length: usize) -> String {
        let exp = u32::try_from(length).unwrap_or(1);
        let min = if length == 1 { 0 } else { 10_u64.pow(exp - 1) };
        let max = 10_u64.pow(exp) - 1;

        let number = self.rng.random_range(min..=max);
        format!("-{number}")
    }
}

/// Unix epoch seconds modulo 100 000 000, so the suffix stays at 8 digits
/// or fewer.
fn timestamp_suffix() -> String {
    let timestamp = Utc::now().timestamp() % 100_000_000;
    format!("-{timestamp}")
}

fn time_derived_seed() -> u64 {
    // Nanosecond timestamps overflow i64 around year 2262; fall back to
    // milliseconds rather than a constant seed.
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_millis());
    nanos as u64
}
