use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn sudoku_export() -> Command {
    Command::cargo_bin("sudoku-export").unwrap()
}

fn write_library(dir: &Path) -> PathBuf {
    let library = json!({
        "folders": [
            { "id": 7, "name": "Easy" },
            { "id": 8, "name": "Hard" }
        ],
        "puzzles": [
            { "id": 1, "folder_id": 7, "cells": "0".repeat(81) },
            { "id": 2, "folder_id": 7, "cells": "1".repeat(81) },
            { "id": 3, "folder_id": 8, "cells": "2".repeat(81) }
        ]
    });
    let path = dir.join("library.json");
    fs::write(&path, library.to_string()).unwrap();
    path
}

fn parse_export(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).expect("Failed to parse export file")
}

#[test]
fn test_missing_scope_exits_without_exporting() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--dir", out_dir.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No export scope provided"));

    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn test_unknown_folder_exits_without_exporting() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--folder", "99"])
        .args(["--dir", out_dir.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn test_export_all_folders() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--all", "--yes"])
        .args(["--dir", dir.path().to_str().unwrap()])
        .args(["--name", "everything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("have been exported"));

    let export = parse_export(&dir.path().join("everything.opensudoku"));
    assert_eq!(export["version"], 1);
    assert_eq!(export["folders"].as_array().unwrap().len(), 2);
}

#[test]
fn test_export_single_folder_with_suggested_name() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--folder", "7", "--yes"])
        .args(["--dir", dir.path().to_str().unwrap()])
        .assert()
        .success();

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d");
    let expected = dir.path().join(format!("Easy-{today}.opensudoku"));
    let export = parse_export(&expected);
    let folders = export["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["folder"]["name"], "Easy");
    assert_eq!(folders[0]["puzzles"].as_array().unwrap().len(), 2);
}

#[test]
fn test_declined_overwrite_leaves_file_untouched() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    let existing = dir.path().join("everything.opensudoku");
    fs::write(&existing, "original contents").unwrap();

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--all"])
        .args(["--dir", dir.path().to_str().unwrap()])
        .args(["--name", "everything"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&existing).unwrap(), "original contents");
}

#[test]
fn test_confirmed_overwrite_replaces_file() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    let existing = dir.path().join("everything.opensudoku");
    fs::write(&existing, "original contents").unwrap();

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--all"])
        .args(["--dir", dir.path().to_str().unwrap()])
        .args(["--name", "everything"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("have been exported"));

    let export = parse_export(&existing);
    assert_eq!(export["folders"].as_array().unwrap().len(), 2);
}

#[test]
fn test_denied_permission_fails_without_exporting() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--all", "--yes", "--assume-denied"])
        .args(["--dir", out_dir.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Storage permission denied"));

    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
}

#[test]
fn test_missing_destination_dir_is_storage_unavailable() {
    let dir = tempdir().unwrap();
    let library = write_library(dir.path());

    sudoku_export()
        .args(["--library", library.to_str().unwrap()])
        .args(["--all", "--yes"])
        .args(["--dir", dir.path().join("no-such-dir").to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Storage is not available"));
}
