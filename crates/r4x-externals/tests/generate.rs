//! Source generation against the filesystem.

use proptest::prelude::*;
use r4x_externals::{generate, render_source, ExternalsMap, GenerateError, GenerateOutcome, SkipReason};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("generated source")
}

#[test]
fn writes_imports_and_assignments() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("_externals_.es6");
    let externals = json!({ "react": "React", "react-dom": "ReactDOM" });

    let outcome = generate(Some(&externals), &target).unwrap();
    assert_eq!(outcome, GenerateOutcome::Generated(target.clone()));

    let source = read(&target);
    assert!(source.starts_with("// AUTO-GENERATED by r4x-externals\n"));
    assert!(source.contains("import React from 'react';\nimport ReactDOM from 'react-dom';\n"));
    assert!(source.contains("\twindow.React = React;\n\twindow.ReactDOM = ReactDOM;\n"));
    assert!(source.ends_with("} )(typeof window !== 'undefined' ? window : global);\n"));
}

#[test]
fn non_ascii_global_keeps_the_whole_chunk() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("_externals_.es6");
    let externals = json!({ "react": "React", "lib": "Æsir" });

    let outcome = generate(Some(&externals), &target).unwrap();
    assert!(outcome.is_generated());

    let source = read(&target);
    assert!(source.contains("import React from 'react';\nimport Æsir from 'lib';\n"));
    assert!(source.contains("\twindow.Æsir = Æsir;\n"));
}

#[test]
fn overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("_externals_.es6");
    fs::write(&target, "stale content").unwrap();

    generate(Some(&json!({ "react": "React" })), &target).unwrap();

    let source = read(&target);
    assert!(!source.contains("stale content"));
    assert!(source.contains("import React from 'react';"));
}

#[test]
fn creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested").join("deeper").join("_externals_.es6");

    let outcome = generate(Some(&json!({ "react": "React" })), &target).unwrap();
    assert!(outcome.is_generated());
    assert!(target.is_file());
}

#[test]
fn empty_output_path_skips_without_writing() {
    let outcome = generate(Some(&json!({ "react": "React" })), Path::new("")).unwrap();
    assert_eq!(outcome, GenerateOutcome::Skipped(SkipReason::EmptyOutputPath));

    let outcome = generate(Some(&json!({ "react": "React" })), Path::new("   ")).unwrap();
    assert_eq!(outcome, GenerateOutcome::Skipped(SkipReason::EmptyOutputPath));
}

#[test]
fn empty_output_path_wins_over_malformed_json() {
    let outcome = generate(Some(&json!("not valid json")), Path::new("")).unwrap();
    assert_eq!(outcome, GenerateOutcome::Skipped(SkipReason::EmptyOutputPath));
}

#[test]
fn empty_map_skips_without_writing() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("_externals_.es6");

    let outcome = generate(Some(&json!({})), &target).unwrap();
    assert_eq!(outcome, GenerateOutcome::Skipped(SkipReason::NoEntries));
    assert!(!target.exists());

    let outcome = generate(None, &target).unwrap();
    assert_eq!(outcome, GenerateOutcome::Skipped(SkipReason::MissingExternals));
    assert!(!target.exists());
}

#[test]
fn json_string_matches_object_input() {
    let dir = TempDir::new().unwrap();
    let from_string = dir.path().join("string.es6");
    let from_object = dir.path().join("object.es6");

    generate(Some(&json!(r#"{"a":"A"}"#)), &from_string).unwrap();
    generate(Some(&json!({ "a": "A" })), &from_object).unwrap();

    assert_eq!(read(&from_string), read(&from_object));
}

#[test]
fn malformed_json_string_is_an_error() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("_externals_.es6");

    let err = generate(Some(&json!("not valid json")), &target).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidExternalsJson { .. }));
    assert!(!target.exists());
}

#[test]
fn unwritable_target_is_an_error() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should go.
    let target = dir.path().join("taken");
    fs::create_dir(&target).unwrap();

    let err = generate(Some(&json!({ "react": "React" })), &target).unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));
}

fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z_$][A-Za-z0-9_$]{0,12}"
}

fn library_id() -> impl Strategy<Value = String> {
    "(@[a-z]{1,6}/)?[a-z][a-z0-9.-]{0,14}"
}

fn externals_object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec((library_id(), identifier()), 1..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(lib, global)| (lib, Value::String(global)))
            .collect()
    })
}

proptest! {
    #[test]
    fn one_import_and_assignment_per_entry(object in externals_object()) {
        let value = Value::Object(object.clone());
        let map = ExternalsMap::from_value(Some(&value)).expect("valid map");
        let source = render_source(&map);

        let imports: Vec<&str> = source.lines().filter(|l| l.starts_with("import ")).collect();
        let assignments: Vec<&str> = source.lines().filter(|l| l.starts_with("\twindow.")).collect();
        prop_assert_eq!(imports.len(), object.len());
        prop_assert_eq!(assignments.len(), object.len());

        for ((library, global), (import, assignment)) in
            object.iter().zip(imports.iter().zip(assignments.iter()))
        {
            let global = global.as_str().expect("string global");
            let expected_import = format!("import {} from '{}';", global, library);
            let expected_assignment = format!("\twindow.{} = {};", global, global);
            prop_assert_eq!(*import, expected_import.as_str());
            prop_assert_eq!(*assignment, expected_assignment.as_str());
        }
    }

    #[test]
    fn generation_is_deterministic(object in externals_object()) {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.es6");
        let second = dir.path().join("second.es6");
        let value = Value::Object(object);

        generate(Some(&value), &first).unwrap();
        generate(Some(&value), &second).unwrap();
        prop_assert_eq!(read(&first), read(&second));
    }
}
