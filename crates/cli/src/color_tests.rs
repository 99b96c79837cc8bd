#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn always_and_never_are_unconditional() {
    assert_eq!(ColorMode::Always.stdout_choice(), ColorChoice::Always);
    assert_eq!(ColorMode::Never.stdout_choice(), ColorChoice::Never);
}

#[test]
fn default_mode_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
