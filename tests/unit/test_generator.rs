use regex::Regex;

use dirgen::models::catalog::WordCatalog;
use dirgen::models::generation::{GenerationConfig, SuffixKind};
use dirgen::models::words::{builtin_words, BUILTIN_CATEGORIES};
use dirgen::services::generator::NameGenerator;
use dirgen::utils::validation::is_valid_directory_name;

fn generator(config: GenerationConfig) -> NameGenerator {
    NameGenerator::new(config, WordCatalog::builtin())
}

fn split_name(name: &str) -> (&str, &str) {
    let cut = name.rfind('-').expect("name has a suffix separator");
    (&name[..cut], &name[cut + 1..])
}

#[test]
fn test_identical_seeds_reproduce_identical_sequences() {
    let config = GenerationConfig {
        seed: 1234,
        count: 25,
        ..GenerationConfig::default()
    };

    let first = generator(config.clone()).generate();
    let second = generator(config).generate();
    assert_eq!(first, second);

    let mut a = generator(GenerationConfig {
        seed: 77,
        ..GenerationConfig::default()
    });
    let mut b = generator(GenerationConfig {
        seed: 77,
        ..GenerationConfig::default()
    });
    for _ in 0..5 {
        let x = a
            .generate_enhanced("bens", "exp", "animals", SuffixKind::Alpha, 5)
            .expect("generation succeeds");
        let y = b
            .generate_enhanced("bens", "exp", "animals", SuffixKind::Alpha, 5)
            .expect("generation succeeds");
        assert_eq!(x, y);
    }
}

#[test]
fn test_alpha_suffix_shape() {
    let pattern = Regex::new(r"^-[a-z]{3,8}$").unwrap();
    for length in [0, 3, 5, 8, 50] {
        let config = GenerationConfig {
            suffix_kind: SuffixKind::Alpha,
            suffix_length: length,
            seed: 4,
            count: 10,
            ..GenerationConfig::default()
        };
        for name in generator(config).generate() {
            let (_, suffix) = split_name(&name);
            assert!(
                pattern.is_match(&format!("-{suffix}")),
                "bad alpha suffix in '{}'",
                name
            );
        }
    }
}

#[test]
fn test_mixed_suffix_shape() {
    let pattern = Regex::new(r"^-[a-z0-9]{3,8}$").unwrap();
    let config = GenerationConfig {
        suffix_kind: SuffixKind::Mixed,
        suffix_length: 4,
        seed: 8,
        count: 30,
        ..GenerationConfig::default()
    };
    for name in generator(config).generate() {
        let (_, suffix) = split_name(&name);
        assert_eq!(suffix.len(), 4);
        assert!(
            pattern.is_match(&format!("-{suffix}")),
            "bad mixed suffix in '{}'",
            name
        );
    }
}

#[test]
fn test_numeric_suffix_shape() {
    let pattern = Regex::new(r"^-[0-9]{1,6}$").unwrap();
    for length in [1, 2, 6, 9] {
        let config = GenerationConfig {
            suffix_kind: SuffixKind::Numeric,
            suffix_length: length,
            seed: 15,
            count: 30,
            ..GenerationConfig::default()
        };
        let expected_len = length.clamp(1, 6);
        for name in generator(config).generate() {
            let (_, suffix) = split_name(&name);
            assert_eq!(suffix.len(), expected_len, "in '{}'", name);
            assert!(pattern.is_match(&format!("-{suffix}")));
            if expected_len > 1 {
                assert!(!suffix.starts_with('0'), "leading zero in '{}'", name);
            }
        }
    }
}

#[test]
fn test_timestamp_suffix_is_at_most_eight_digits() {
    let config = GenerationConfig {
        suffix_kind: SuffixKind::Timestamp,
        suffix_length: 3,
        seed: 16,
        ..GenerationConfig::default()
    };
    let names = generator(config).generate();
    let (_, suffix) = split_name(&names[0]);
    assert!(suffix.len() <= 8);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_all_category_draws_from_builtin_lists() {
    let config = GenerationConfig {
        category: "all".to_string(),
        count: 5,
        seed: 23,
        ..GenerationConfig::default()
    };
    let names = generator(config).generate();
    assert_eq!(names.len(), 5);

    for name in &names {
        let (word, suffix) = split_name(name);
        let known = BUILTIN_CATEGORIES
            .iter()
            .any(|category| builtin_words(category).contains(&word));
        assert!(known, "word '{}' belongs to no built-in category", word);
        assert_eq!(suffix.len(), 4);
        assert!(is_valid_directory_name(name));
    }
}

#[test]
fn test_enhanced_name_end_to_end() {
    let mut gen = generator(GenerationConfig {
        seed: 31,
        ..GenerationConfig::default()
    });
    let name = gen
        .generate_enhanced("bepy", "dja", "food", SuffixKind::Mixed, 4)
        .expect("generation succeeds");

    let pattern = Regex::new(r"^bepy-dja-[a-z]+-[a-z0-9]{4}$").unwrap();
    assert!(pattern.is_match(&name), "unexpected shape: '{}'", name);

    let word = name.split('-').nth(2).expect("word part");
    assert!(builtin_words("food").contains(&word));
    assert!(is_valid_directory_name(&name));
}

#[test]
fn test_empty_category_selector_behaves_like_all() {
    let names = generator(GenerationConfig {
        category: String::new(),
        seed: 40,
        count: 10,
        ..GenerationConfig::default()
    })
    .generate();

    for name in &names {
        let (word, _) = split_name(name);
        let known = BUILTIN_CATEGORIES
            .iter()
            .any(|category| builtin_words(category).contains(&word));
        assert!(known, "word '{}' belongs to no built-in category", word);
    }
}

#[test]
fn test_misspelled_category_yields_fallback_word() {
    let names = generator(GenerationConfig {
        category: "fod".to_string(),
        seed: 41,
        count: 3,
        ..GenerationConfig::default()
    })
    .generate();

    for name in names {
        let (word, _) = split_name(&name);
        assert_eq!(word, "folder");
    }
}
