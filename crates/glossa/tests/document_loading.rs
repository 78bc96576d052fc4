//! Integration tests for loading content documents.

use std::io::Write;

use glossa::{LoadError, LoadWarning, PhraseTable, StaticNode, StyleFlags, TextNode, resolve, vars};
use tempfile::NamedTempFile;

const SITE: &str = r#"{
    "repositoryId": "site",
    "version": "7",
    "locales": [
        { "localeCode": "EN", "name": "English", "defaultFallbackCode": null, "isGlobalDefault": true },
        { "localeCode": "FR", "name": "Français", "defaultFallbackCode": "EN", "isGlobalDefault": false }
    ],
    "phrases": {
        "greeting": {
            "EN": [{ "type": "text", "content": "Hello, ", "styles": { "isBold": true },
                     "children": [{ "type": "text", "content": "{$name}" }] }]
        },
        "steps": {
            "EN": [{ "type": "ol", "children": [
                { "type": "li", "children": [{ "type": "text", "content": "Install" }] },
                { "type": "li", "children": [{ "type": "text", "content": "Run" }] }
            ] }]
        }
    },
    "debugInfo": {
        "greeting": { "groupName": "home", "phraseKey": "greeting" },
        "steps": { "groupName": "docs", "phraseKey": "steps" }
    }
}"#;

// =========================================================================
// Successful loads
// =========================================================================

#[test]
fn loads_locales_and_metadata() {
    let (table, warnings) = PhraseTable::from_json_str(SITE).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(table.repository_id(), Some("site"));
    assert_eq!(table.version(), Some("7"));
    assert_eq!(table.locale_codes(), vec!["EN", "FR"]);
    assert_eq!(table.global_default().locale_code, "EN");
    assert_eq!(
        table.locale("FR").unwrap().default_fallback_code.as_deref(),
        Some("EN")
    );
    assert_eq!(table.debug_info("steps").unwrap().group_name, "docs");
}

#[test]
fn loaded_entry_instantiates_with_variables() {
    let (table, _) = PhraseTable::from_json_str(SITE).unwrap();
    let nodes = resolve(&table, "EN", "greeting", &vars! { "name" => "Ada" }).unwrap();

    assert_eq!(
        nodes,
        vec![StaticNode::Text(
            TextNode::styled("Hello, ", StyleFlags::bold())
                .with_children(vec![StaticNode::text("Ada")])
        )]
    );
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SITE.as_bytes()).unwrap();

    let (table, _) = PhraseTable::from_json_file(file.path()).unwrap();
    assert_eq!(table.phrase_keys().collect::<Vec<_>>(), vec!["greeting", "steps"]);
}

// =========================================================================
// Warnings
// =========================================================================

#[test]
fn lint_warnings_are_reported() {
    let (_, warnings) = PhraseTable::from_json_str(
        r#"{
        "locales": [
            { "localeCode": "EN", "name": "English", "isGlobalDefault": true },
            { "localeCode": "DE", "name": "Deutsch", "defaultFallbackCode": "NL" }
        ],
        "phrases": {
            "only_de": { "DE": [{ "type": "text", "content": "Hallo" }] },
            "ghost": { "XX": [{ "type": "text", "content": "?" }] }
        },
        "debugInfo": { "only_de": { "groupName": "g", "phraseKey": "only_de" } }
    }"#,
    )
    .unwrap();

    assert!(warnings.contains(&LoadWarning::UnknownEntryLocale {
        phrase_key: "ghost".into(),
        locale_code: "XX".into(),
    }));
    assert!(warnings.contains(&LoadWarning::UnknownFallback {
        locale_code: "DE".into(),
        fallback_code: "NL".into(),
    }));
    assert!(warnings.contains(&LoadWarning::MissingInGlobalDefault {
        phrase_key: "only_de".into(),
        global_default: "EN".into(),
    }));
}

#[test]
fn list_child_that_is_not_an_item_is_wrapped() {
    let (table, warnings) = PhraseTable::from_json_str(
        r#"{
        "locales": [{ "localeCode": "EN", "name": "English", "isGlobalDefault": true }],
        "phrases": { "l": { "EN": [{ "type": "ul", "children": [{ "type": "text", "content": "bare" }] }] } },
        "debugInfo": { "l": { "groupName": "g", "phraseKey": "l" } }
    }"#,
    )
    .unwrap();

    assert_eq!(
        warnings,
        vec![LoadWarning::NonItemInList {
            phrase_key: "l".into(),
            locale_code: "EN".into(),
        }]
    );
    let nodes = resolve(&table, "EN", "l", &vars! {}).unwrap();
    assert_eq!(
        nodes,
        vec![StaticNode::unordered(vec![glossa::ListItemNode::new(vec![
            StaticNode::text("bare")
        ])])]
    );
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn invalid_json_reports_location() {
    let err = PhraseTable::from_json_str("{\n  \"locales\": [,]\n}").unwrap_err();
    let LoadError::Json { line, .. } = err else {
        panic!("expected JSON error, got {err:?}");
    };
    assert_eq!(line, 2);
}

#[test]
fn template_error_names_phrase_and_locale() {
    let err = PhraseTable::from_json_str(
        r#"{
        "locales": [{ "localeCode": "EN", "name": "English", "isGlobalDefault": true }],
        "phrases": { "broken": { "EN": [{ "type": "text", "content": "Hi {name}" }] } }
    }"#,
    )
    .unwrap_err();

    match err {
        LoadError::Template {
            phrase_key,
            locale_code,
            column,
            ..
        } => {
            assert_eq!(phrase_key, "broken");
            assert_eq!(locale_code, "EN");
            assert_eq!(column, 4);
        }
        other => panic!("expected template error, got {other:?}"),
    }
}

#[test]
fn table_without_global_default_is_rejected() {
    let err = PhraseTable::from_json_str(
        r#"{ "locales": [{ "localeCode": "EN", "name": "English" }] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::NoGlobalDefault));
}

#[test]
fn table_with_two_global_defaults_is_rejected() {
    let err = PhraseTable::from_json_str(
        r#"{ "locales": [
            { "localeCode": "EN", "name": "English", "isGlobalDefault": true },
            { "localeCode": "FR", "name": "Français", "isGlobalDefault": true }
        ] }"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("EN, FR"));
}

#[test]
fn duplicate_locale_code_is_rejected() {
    let err = PhraseTable::from_json_str(
        r#"{ "locales": [
            { "localeCode": "EN", "name": "English", "isGlobalDefault": true },
            { "localeCode": "EN", "name": "English again" }
        ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::DuplicateLocale { code } if code == "EN"));
}

#[test]
fn missing_file_is_io_error() {
    let err = PhraseTable::from_json_file("/nonexistent/glossa/site.json").unwrap_err();
    let LoadError::Io { path, .. } = err else {
        panic!("expected io error");
    };
    assert!(path.ends_with("site.json"));
}
