//! Tests for counted verbosity flags on the command line.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rstest::rstest;
use tracing::level_filters::LevelFilter;

use crate::ServiceConfig;
use crate::config::expand_verbosity_flags;

/// Helper to build an `OsString` argument vector from string slices.
fn args(values: &[&str]) -> Vec<OsString> {
    values.iter().map(OsString::from).collect()
}

#[rstest]
#[case::single(&["github-slash", "-v"], &["github-slash", "--verbose", "1"])]
#[case::repeated_letters(&["github-slash", "-vv"], &["github-slash", "--verbose", "2"])]
#[case::repeated_flags(
    &["github-slash", "-v", "-p", "9000", "-vv"],
    &["github-slash", "--verbose", "3", "-p", "9000"],
)]
#[case::explicit_level(&["github-slash", "-v", "2"], &["github-slash", "-v", "2"])]
#[case::long_form(&["github-slash", "--verbose", "1"], &["github-slash", "--verbose", "1"])]
#[case::no_flags(&["github-slash", "-p", "9000"], &["github-slash", "-p", "9000"])]
#[case::after_separator(&["github-slash", "--", "-vv"], &["github-slash", "--", "-vv"])]
fn counted_flags_fold_into_one_level(#[case] input: &[&str], #[case] expected: &[&str]) {
    assert_eq!(expand_verbosity_flags(args(input)), args(expected));
}

#[rstest]
fn count_saturates_at_level_ceiling() {
    let flag = format!("-{}", "v".repeat(300));

    let expanded = expand_verbosity_flags(["github-slash", flag.as_str()]);

    assert_eq!(expanded, args(&["github-slash", "--verbose", "255"]));
}

#[rstest]
#[case::counted(&["github-slash", "-vv"], 2, LevelFilter::DEBUG)]
#[case::explicit(&["github-slash", "-v", "1"], 1, LevelFilter::INFO)]
fn loader_accepts_expanded_flags(
    #[case] cli_args: &[&str],
    #[case] expected_verbose: u8,
    #[case] expected_level: LevelFilter,
) {
    let config = ServiceConfig::load_from_iter(expand_verbosity_flags(args(cli_args)))
        .expect("config should load");

    assert_eq!(config.verbose, expected_verbose);
    assert_eq!(config.log_level(), expected_level);
}
