#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::test_utils::write_file;
use std::fs;
use tempfile::TempDir;

#[test]
fn collects_only_stylesheet_files() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("site.css"), "a {}\n");
    write_file(&tmp.path().join("theme.scss"), "b {}\n");
    write_file(&tmp.path().join("readme.md"), "# hi\n");
    write_file(&tmp.path().join("script.js"), "let x;\n");

    let walker = StylesheetWalker::new(WalkerConfig::default()).unwrap();
    let names: Vec<String> = walker
        .collect(tmp.path())
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["site.css", "theme.scss"]);
}

#[test]
fn respects_gitignore() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("keep.css"), "a {}\n");
    write_file(&tmp.path().join("dist/skip.css"), "b {}\n");
    fs::write(tmp.path().join(".gitignore"), "dist/\n").unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();

    let walker = StylesheetWalker::new(WalkerConfig::default()).unwrap();
    assert_eq!(walker.collect(tmp.path()), [tmp.path().join("keep.css")]);
}

#[test]
fn exclude_globs_match_path_components() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("site.css"), "a {}\n");
    write_file(&tmp.path().join("vendor/lib.css"), "b {}\n");

    let walker = StylesheetWalker::new(WalkerConfig {
        exclude_patterns: vec!["vendor".to_string()],
        ..WalkerConfig::default()
    })
    .unwrap();
    assert_eq!(walker.collect(tmp.path()), [tmp.path().join("site.css")]);
}

#[test]
fn respects_depth_limit() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("shallow.css"), "a {}\n");
    write_file(&tmp.path().join("a/b/c/deep.css"), "b {}\n");

    let walker = StylesheetWalker::new(WalkerConfig {
        max_depth: Some(2),
        ..WalkerConfig::default()
    })
    .unwrap();
    assert_eq!(walker.collect(tmp.path()), [tmp.path().join("shallow.css")]);
}

#[test]
fn skips_hidden_files() {
    let tmp = TempDir::new().unwrap();
    write_file(&tmp.path().join("visible.css"), "a {}\n");
    write_file(&tmp.path().join(".hidden.css"), "b {}\n");

    let walker = StylesheetWalker::new(WalkerConfig::default()).unwrap();
    assert_eq!(walker.collect(tmp.path()), [tmp.path().join("visible.css")]);
}

#[test]
fn results_are_sorted_by_path() {
    let tmp = TempDir::new().unwrap();
    for name in ["zebra.css", "alpha.css", "mid.less"] {
        write_file(&tmp.path().join(name), "a {}\n");
    }

    let walker = StylesheetWalker::new(WalkerConfig::default()).unwrap();
    assert_eq!(
        walker.collect(tmp.path()),
        [
            tmp.path().join("alpha.css"),
            tmp.path().join("mid.less"),
            tmp.path().join("zebra.css"),
        ]
    );
}

#[test]
fn bad_exclude_glob_is_an_error() {
    let result = StylesheetWalker::new(WalkerConfig {
        exclude_patterns: vec!["a/**[".to_string()],
        ..WalkerConfig::default()
    });
    assert!(result.is_err());
}
