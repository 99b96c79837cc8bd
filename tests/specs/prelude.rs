//! Test helpers for behavioral specifications.
//!
//! These run the real binary; a small shell script stands in for Node so
//! no Node.js installation is needed on the test machine.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Returns a Command configured to run the combfmt binary
pub fn combfmt_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("combfmt"))
}

/// Write an executable shell script standing in for the Node binary and
/// return its path, ready for `--node-path`.
#[cfg(unix)]
pub fn fake_node(dir: &Path, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-node");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path.display().to_string()
}

/// Lay out a small project: config at the root, stylesheets under src/.
pub fn project_tree(root: &Path) {
    fs::create_dir_all(root.join("src/nested")).unwrap();
    fs::write(root.join(".csscomb.json"), "{ \"quotes\": \"single\" }\n").unwrap();
    fs::write(root.join("src/site.css"), "a { color: red }\n").unwrap();
    fs::write(root.join("src/nested/deep.scss"), "b { color: blue }\n").unwrap();
}
