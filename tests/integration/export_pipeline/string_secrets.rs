//! String secrets: JSON documents rendered as export lines

use secret_manager_env::{CatalogEntry, ExporterConfig};

use super::{payments_prod, run, tagged, InMemorySecrets};

#[tokio::test]
async fn test_exports_matching_secret_with_unescaped_quote() {
    let store = InMemorySecrets::new().with_string(
        tagged("prod/payments/db"),
        r#"{"DB_USER":"svc","DB_PASS":"x'y"}"#,
    );

    let (result, stdout) = run(&store, &payments_prod(), &ExporterConfig::default()).await;

    let summary = result.unwrap();
    assert_eq!(summary.exported, 2);
    assert_eq!(stdout, "export DB_USER='svc'\nexport DB_PASS='x'y'\n");
}

#[tokio::test]
async fn test_only_matching_secrets_are_fetched() {
    let store = InMemorySecrets::new()
        .with_string(CatalogEntry::new("untagged"), r#"{"A":"1"}"#)
        .with_string(
            CatalogEntry::new("staging/payments").with_tag("team", "payments").with_tag("env", "staging"),
            r#"{"B":"2"}"#,
        )
        .with_string(
            tagged("prod/payments/api").with_tag("owner", "alice"),
            r#"{"C":"3"}"#,
        );

    let (result, stdout) = run(&store, &payments_prod(), &ExporterConfig::default()).await;

    let summary = result.unwrap();
    assert_eq!(summary.listed, 3);
    assert_eq!(summary.matched, 1);
    assert_eq!(store.fetched_ids(), vec!["prod/payments/api".to_string()]);
    assert_eq!(stdout, "export C='3'\n");
}

#[tokio::test]
async fn test_lines_follow_catalog_then_document_order() {
    let store = InMemorySecrets::new()
        .with_string(tagged("prod/b"), r#"{"Z":"1","A":"2"}"#)
        .with_string(tagged("prod/a"), r#"{"M":"3"}"#);

    let (result, stdout) = run(&store, &payments_prod(), &ExporterConfig::default()).await;

    result.unwrap();
    assert_eq!(stdout, "export Z='1'\nexport A='2'\nexport M='3'\n");
}

#[tokio::test]
async fn test_malformed_json_is_skipped_without_aborting() {
    let store = InMemorySecrets::new()
        .with_string(tagged("prod/broken"), "{not json")
        .with_string(tagged("prod/typed"), r#"{"PORT":5432}"#)
        .with_string(tagged("prod/good"), r#"{"TOKEN":"abc"}"#);

    let (result, stdout) = run(&store, &payments_prod(), &ExporterConfig::default()).await;

    let summary = result.unwrap();
    assert_eq!(summary.matched, 3);
    assert_eq!(summary.exported, 1);
    assert_eq!(stdout, "export TOKEN='abc'\n");
}

#[tokio::test]
async fn test_configured_version_stage_is_requested() {
    let store = InMemorySecrets::new().with_string(tagged("prod/db"), r#"{"A":"b"}"#);
    let config = ExporterConfig {
        version_stage: "AWSPREVIOUS".to_string(),
        ..ExporterConfig::default()
    };

    let (result, _) = run(&store, &payments_prod(), &config).await;

    result.unwrap();
    let fetched = store.fetched.lock().unwrap().clone();
    assert_eq!(fetched, vec![("prod/db".to_string(), "AWSPREVIOUS".to_string())]);
}

#[tokio::test]
async fn test_no_matches_prints_nothing() {
    let store = InMemorySecrets::new()
        .with_string(CatalogEntry::new("other").with_tag("team", "search"), r#"{"A":"1"}"#);

    let (result, stdout) = run(&store, &payments_prod(), &ExporterConfig::default()).await;

    assert_eq!(result.unwrap().matched, 0);
    assert!(stdout.is_empty());
    assert!(store.fetched_ids().is_empty());
}
