//! Tests for the init command.

use super::scaffolding::*;
use crate::config::Config;
use crate::schema::{self, DocumentType};
use crate::test_support::test_context;
use tempfile::TempDir;

fn statuses(report: &[ScaffoldEntry]) -> Vec<Scaffold> {
    report.iter().map(|entry| entry.status).collect()
}

#[test]
fn test_scaffold_creates_everything() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(temp_dir.path());

    let report = scaffold(&ctx, false).unwrap();

    assert_eq!(report.len(), DocumentType::ALL.len() + 3);
    assert!(statuses(&report).iter().all(|s| *s == Scaffold::Created));

    for doc_type in DocumentType::ALL {
        // Every scaffolded schema must load back.
        let loaded = schema::load(ctx.templates_dir(), doc_type).unwrap();
        assert_eq!(loaded.doc_type(), doc_type);
    }
    assert!(temp_dir.path().join(".env.example").is_file());
    assert!(temp_dir.path().join(".env").is_file());
    assert!(temp_dir.path().join("output").is_dir());

    let config = Config::load(temp_dir.path().join("coverkit.yaml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_scaffold_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(temp_dir.path());

    scaffold(&ctx, false).unwrap();
    let second = scaffold(&ctx, false).unwrap();

    assert!(statuses(&second).iter().all(|s| *s == Scaffold::Kept));
}

#[test]
fn test_scaffold_keeps_user_edits() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(temp_dir.path());
    scaffold(&ctx, false).unwrap();

    let schema_path = temp_dir.path().join("formats").join("summary-short.yaml");
    std::fs::write(&schema_path, "body:\n  line1: Custom.\n").unwrap();

    scaffold(&ctx, false).unwrap();

    assert_eq!(
        std::fs::read_to_string(&schema_path).unwrap(),
        "body:\n  line1: Custom.\n"
    );
}

#[test]
fn test_force_overwrites_but_keeps_env() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(temp_dir.path());
    scaffold(&ctx, false).unwrap();

    let env_path = temp_dir.path().join(".env");
    std::fs::write(&env_path, "EMAIL=mine@example.com\n").unwrap();

    let report = scaffold(&ctx, true).unwrap();

    let env_entry = report.iter().find(|entry| entry.path == env_path).unwrap();
    assert_eq!(env_entry.status, Scaffold::Kept);
    assert_eq!(
        std::fs::read_to_string(&env_path).unwrap(),
        "EMAIL=mine@example.com\n"
    );

    let overwritten = report
        .iter()
        .filter(|entry| entry.status == Scaffold::Overwritten)
        .count();
    assert_eq!(overwritten, DocumentType::ALL.len() + 2);
}

#[test]
fn test_existing_json_schema_is_kept() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = test_context(temp_dir.path());
    let formats = temp_dir.path().join("formats");
    std::fs::create_dir_all(&formats).unwrap();
    std::fs::write(
        formats.join("summary-medium.json"),
        r#"{"body": {"line1": "From JSON."}}"#,
    )
    .unwrap();

    let report = scaffold(&ctx, false).unwrap();

    let entry = report
        .iter()
        .find(|entry| entry.path.ends_with("summary-medium.json"))
        .unwrap();
    assert_eq!(entry.status, Scaffold::Kept);
    assert!(!formats.join("summary-medium.yaml").exists());
}
