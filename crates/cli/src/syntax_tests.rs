#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn detects_each_dialect_by_extension() {
    assert_eq!(Syntax::from_path(Path::new("site.css")), Some(Syntax::Css));
    assert_eq!(Syntax::from_path(Path::new("theme.scss")), Some(Syntax::Scss));
    assert_eq!(Syntax::from_path(Path::new("layout.sass")), Some(Syntax::Sass));
    assert_eq!(Syntax::from_path(Path::new("vars.less")), Some(Syntax::Less));
}

#[test]
fn extension_match_is_case_insensitive() {
    assert_eq!(Syntax::from_path(Path::new("SITE.CSS")), Some(Syntax::Css));
    assert_eq!(Syntax::from_path(Path::new("theme.Scss")), Some(Syntax::Scss));
}

#[test]
fn unknown_or_missing_extension_is_none() {
    assert_eq!(Syntax::from_path(Path::new("notes.txt")), None);
    assert_eq!(Syntax::from_path(Path::new("Makefile")), None);
    // A leading dot alone is a hidden file name, not an extension.
    assert_eq!(Syntax::from_path(Path::new(".css")), None);
}

#[test]
fn wire_names_match_the_engine() {
    assert_eq!(Syntax::Css.as_str(), "css");
    assert_eq!(Syntax::Scss.as_str(), "scss");
    assert_eq!(Syntax::Sass.as_str(), "sass");
    assert_eq!(Syntax::Less.as_str(), "less");
    assert_eq!(Syntax::Less.to_string(), "less");
}
