// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end runs of the generator against temporary source trees.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command
};

use entity_crudgen::{
    Error, GENERATED_HEADER, GenerationRequest, Target, generate, implementation_path, prepare,
    test_path
};
use tempfile::TempDir;

const USER: &str = r#"
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct User {
    #[db = "id"]
    pub id: String,
    #[db = "name"]
    pub name: String,
}

pub enum Status {
    Active,
    Banned,
}
"#;

const TAG: &str = r#"
#[derive(Debug, Default)]
pub struct Tag {
    #[db = "id"]
    pub id: String,
    #[db = "label,unique"]
    pub label: String,
    pub cached: bool,
}
"#;

fn source(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn user_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);

    let files = generate(GenerationRequest::new("User", &path, "models")).unwrap();
    assert_eq!(files.implementation, dir.path().join("user_generated.rs"));
    assert_eq!(files.tests, dir.path().join("user_generated_test.rs"));

    let implementation = read(&files.implementation);
    assert!(implementation.starts_with(GENERATED_HEADER));
    assert!(implementation.contains("INSERT INTO user (id, name) VALUES (:id, :name)"));
    assert!(implementation.contains("UPDATE user SET id=:id, name=:name WHERE id=:id"));
    assert!(
        implementation.contains("SELECT * FROM user WHERE id=$1 AND deleted_at IS NULL LIMIT 1")
    );
    assert!(implementation.contains("let mut u = User::default();"));
    assert!(implementation.contains("use crate::models::User;"));

    let tests = read(&files.tests);
    assert!(tests.starts_with(GENERATED_HEADER));
    assert!(tests.contains("use super::user_generated::*;"));
    assert!(tests.contains("let mut t = MockQueryable::new();"));
    assert!(tests.contains("let mut u = User::default();"));
}

#[test]
fn tag_avoids_the_harness_variable() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "tag.rs", TAG);

    let ctx = prepare(&GenerationRequest::new("Tag", &path, "models").with_table("tag")).unwrap();
    assert_eq!(ctx.model_var, "ta");
    assert_eq!(ctx.create_stmt, "INSERT INTO tag (id, label) VALUES (:id, :label)");

    let files = generate(GenerationRequest::new("Tag", &path, "models")).unwrap();
    let tests = read(&files.tests);
    assert!(tests.contains("let mut ta = Tag::default();"));
    assert!(!tests.contains("let mut t = Tag::default();"));
}

#[test]
fn explicit_table_and_named_functions() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);

    let request = GenerationRequest::new("User", &path, "domain::models")
        .with_table("accounts")
        .single_name(false);
    let files = generate(request).unwrap();

    let implementation = read(&files.implementation);
    assert!(implementation.contains("INSERT INTO accounts (id, name)"));
    assert!(implementation.contains("pub fn get_user_by_id("));
    assert!(implementation.contains("pub fn get_any_user_by_id("));
    assert!(implementation.contains("pub fn join_user_sql("));
    assert!(implementation.contains("use crate::domain::models::User;"));
}

#[test]
fn exclusions_remove_members_from_both_files() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);

    let full = generate(GenerationRequest::new("User", &path, "models")).unwrap();
    let full_implementation = read(&full.implementation);
    let full_tests = read(&full.tests);

    let request =
        GenerationRequest::new("User", &path, "models").with_excluded(["is_zero", "nothing"]);
    let files = generate(request).unwrap();
    let implementation = read(&files.implementation);
    let tests = read(&files.tests);

    assert!(full_implementation.contains("pub fn is_zero("));
    assert!(!implementation.contains("pub fn is_zero("));
    assert!(full_tests.contains("fn user_is_zero()"));
    assert!(!tests.contains("fn user_is_zero()"));

    assert_eq!(
        implementation.matches("pub fn ").count() + 1,
        full_implementation.matches("pub fn ").count()
    );
}

#[test]
fn type_starting_with_q_keeps_the_backend_parameter() {
    let dir = TempDir::new().unwrap();
    let path = source(
        &dir,
        "quote.rs",
        "#[derive(Default)]\npub struct Quote {\n    #[db = \"id\"]\n    pub id: String,\n}\n"
    );

    let files = generate(GenerationRequest::new("Quote", &path, "models")).unwrap();
    let implementation = read(&files.implementation);
    assert!(!implementation.contains("q.get(&mut q,"));
    assert!(implementation.contains("q.get(&mut qu, stmt, id)?;"));
    assert!(read(&files.tests).contains("let mut qu = Quote::default();"));
}

#[test]
fn hyphenated_stem_still_writes_the_implementation() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user-model.rs", USER);

    let err = generate(GenerationRequest::new("User", &path, "models")).unwrap_err();
    let Error::Targets(failures) = err else {
        panic!("expected target failures, got {err}");
    };
    let targets: Vec<_> = failures.iter().map(|f| f.target).collect();
    assert_eq!(targets, [Target::Tests]);

    let implementation = dir.path().join("user-model_generated.rs");
    assert!(implementation.is_file());
    assert!(read(&implementation).contains("pub fn get_by_id("));
    assert!(!dir.path().join("user-model_generated_test.rs").exists());
}

#[test]
fn manual_id_mode() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);

    let files = generate(GenerationRequest::new("User", &path, "models").auto_id(false)).unwrap();
    let implementation = read(&files.implementation);
    assert!(!implementation.contains("self.id = Uuid::new_v4().to_string();"));
    assert!(!implementation.contains("use uuid::Uuid;"));

    let tests = read(&files.tests);
    assert!(tests.contains("u.id = Uuid::new_v4().to_string();"));
    assert!(!tests.contains("fn user_save_new()"));
    assert!(!tests.contains("fn user_create_with_id()"));
}

#[test]
fn runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);
    let request = GenerationRequest::new("User", &path, "models").with_excluded(["save"]);

    let first = generate(request.clone()).unwrap();
    let (implementation, tests) = (read(&first.implementation), read(&first.tests));

    let second = generate(request).unwrap();
    assert_eq!(read(&second.implementation), implementation);
    assert_eq!(read(&second.tests), tests);
}

#[test]
fn previous_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);
    fs::write(implementation_path(&path), "stale content longer than the output").unwrap();
    fs::write(test_path(&path), "stale").unwrap();

    generate(GenerationRequest::new("User", &path, "models")).unwrap();
    assert!(!read(&implementation_path(&path)).contains("stale"));
    assert!(!read(&test_path(&path)).contains("stale"));
}

#[test]
fn unknown_type_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);

    let err = generate(GenerationRequest::new("Account", &path, "models")).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!implementation_path(&path).exists());
    assert!(!test_path(&path).exists());
}

#[test]
fn non_struct_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);

    let err = generate(GenerationRequest::new("Status", &path, "models")).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { found: "enum", .. }));
    assert!(!implementation_path(&path).exists());
}

#[test]
fn missing_source_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = generate(GenerationRequest::new("User", dir.path().join("absent.rs"), "models"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { action: "read", .. }));
}

#[test]
fn invalid_package_fails_both_targets() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);

    let err = generate(GenerationRequest::new("User", &path, "not a path")).unwrap_err();
    let Error::Targets(failures) = err else {
        panic!("expected target failures, got {err}");
    };
    let targets: Vec<_> = failures.iter().map(|f| f.target).collect();
    assert_eq!(targets, [Target::Implementation, Target::Tests]);
    assert!(!implementation_path(&path).exists());
}

#[test]
fn unwritable_output_fails_only_that_target() {
    let dir = TempDir::new().unwrap();
    let path = source(&dir, "user.rs", USER);
    fs::create_dir(test_path(&path)).unwrap();

    let err = generate(GenerationRequest::new("User", &path, "models")).unwrap_err();
    let Error::Targets(failures) = err else {
        panic!("expected target failures, got {err}");
    };
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].target, Target::Tests);
    assert!(implementation_path(&path).is_file());
}

#[test]
fn command_line_generates_relative_to_working_directory() {
    let dir = TempDir::new().unwrap();
    source(&dir, "user.rs", USER);

    let status = Command::new(env!("CARGO_BIN_EXE_entity-crudgen"))
        .current_dir(dir.path())
        .args(["User", "-f", "user.rs", "-p", "models", "-e", " save , delete"])
        .env_remove("CRUDGEN_FILE")
        .env_remove("CRUDGEN_PACKAGE")
        .status()
        .unwrap();
    assert!(status.success());

    let implementation = read(&dir.path().join("user_generated.rs"));
    assert!(!implementation.contains("pub fn save("));
    assert!(!implementation.contains("pub fn delete("));
    assert!(implementation.contains("pub fn update("));
}

#[test]
fn command_line_fails_without_package() {
    let dir = TempDir::new().unwrap();
    source(&dir, "user.rs", USER);

    let output = Command::new(env!("CARGO_BIN_EXE_entity-crudgen"))
        .current_dir(dir.path())
        .args(["User", "-f", "user.rs"])
        .env_remove("CRUDGEN_PACKAGE")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("package (use -p to specify one) missing"));
    assert!(!dir.path().join("user_generated.rs").exists());
}
