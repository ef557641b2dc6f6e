use dirgen::models::catalog::WordCatalog;
use dirgen::utils::config::CatalogSource;

#[test]
fn test_builtin_catalog_reference_data() {
    let catalog = WordCatalog::builtin();

    assert_eq!(catalog.tech_stacks().len(), 28);
    assert_eq!(catalog.describe_stack("bepy"), Some("Backend Python"));
    assert_eq!(catalog.describe_framework("dja"), Some("Django"));
    assert!(catalog.describe_stack("zzz").is_none());
}

#[test]
fn test_compatibility_is_directional_per_stack() {
    let catalog = WordCatalog::builtin();

    assert!(catalog.is_compatible("bepy", "dja"));
    assert!(catalog.is_compatible("fejs", "rct"));
    assert!(!catalog.is_compatible("berb", "dja"));
    assert!(!catalog.is_compatible("bepy", "unknown"));

    let ruby = catalog.frameworks_for_stack("berb");
    assert_eq!(ruby, ["rls", "sin", "grap", "pad", "han"].map(String::from));
}

#[test]
fn test_every_mapped_framework_is_described() {
    let catalog = WordCatalog::builtin();
    let stacks: Vec<String> = catalog.tech_stacks().keys().cloned().collect();

    for stack in stacks {
        for framework in catalog.frameworks_for_stack(&stack) {
            assert!(
                catalog.describe_framework(framework).is_some(),
                "stack '{}' maps to undescribed framework '{}'",
                stack,
                framework
            );
        }
    }
}

#[test]
fn test_catalog_file_round_trips_into_lookups() {
    let content = r#"
[categories]
ocean = ["tide", "reef"]
food = ["ramen"]

[[tech-stacks]]
code = "behx"
description = "Backend Haskell"

[frameworks]
behx = [{ code = "yesod", description = "Yesod" }]
"#;
    let extensions = CatalogSource::parse_extensions(content).expect("parses");
    let mut catalog = WordCatalog::builtin();
    catalog.merge(extensions);

    assert_eq!(
        catalog.words_for_category("ocean"),
        ["tide", "reef"].map(String::from)
    );
    assert!(catalog
        .words_for_category("food")
        .contains(&"ramen".to_string()));
    assert_eq!(catalog.describe_stack("behx"), Some("Backend Haskell"));
    assert!(catalog.is_compatible("behx", "yesod"));
    // Built-in relations are untouched
    assert!(catalog.is_compatible("bepy", "dja"));
    assert!(!catalog.is_compatible("bepy", "yesod"));
}
