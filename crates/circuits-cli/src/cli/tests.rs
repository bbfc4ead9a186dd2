#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use clap::CommandFactory;
use clap::error::ErrorKind;

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("circuits").chain(args.iter().copied()))
}

/// The definition itself must be consistent (no conflicting ids, etc.).
#[test]
fn test_command_is_well_formed() {
    Cli::command().debug_assert();
}

/// The root help output must describe every flag.
#[test]
fn test_root_help_lists_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    let expected_flags = [
        "NUM_VERTICES",
        "--input",
        "--format",
        "--count-only",
        "--echo-arcs",
        "--multi-arcs",
        "--jobs",
        "--max-file-size",
        "--quiet",
        "--verbose",
        "--help",
        "--version",
    ];
    for flag in &expected_flags {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

#[test]
fn test_defaults() {
    let cli = parse(&["16"]).expect("valid arguments");
    assert_eq!(cli.num_vertices, 16);
    assert!(matches!(cli.input, PathOrStdin::Stdin));
    assert_eq!(cli.format, OutputFormat::Human);
    assert_eq!(cli.multi_arcs, MultiArcs::Collapse);
    assert!(!cli.count_only);
    assert!(!cli.echo_arcs);
    assert_eq!(cli.jobs, None);
    assert_eq!(cli.log_level(), log::LevelFilter::Warn);
}

#[test]
fn test_input_path() {
    let cli = parse(&["4", "--input", "graph.txt"]).expect("valid arguments");
    match cli.input {
        PathOrStdin::Path(p) => assert_eq!(p, PathBuf::from("graph.txt")),
        PathOrStdin::Stdin => panic!("expected a path"),
    }
}

#[test]
fn test_multi_arcs_values() {
    let cli = parse(&["4", "--multi-arcs", "multiplicity"]).expect("valid arguments");
    assert_eq!(
        MultiArcPolicy::from(cli.multi_arcs),
        MultiArcPolicy::Multiplicity
    );
    assert!(parse(&["4", "--multi-arcs", "twice"]).is_err());
}

#[test]
fn test_missing_vertex_count_is_an_error() {
    let err = parse(&[]).expect_err("vertex count is required");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_malformed_vertex_count_is_an_error() {
    assert!(parse(&["sixteen"]).is_err());
    assert!(parse(&["-3"]).is_err());
    assert!(parse(&["0"]).is_err());
}

#[test]
fn test_jobs_requires_count_only() {
    let err = parse(&["8", "--jobs", "4"]).expect_err("--jobs alone is rejected");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    let cli = parse(&["8", "--count-only", "-j", "4"]).expect("valid arguments");
    assert_eq!(cli.jobs, Some(4));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let err = parse(&["8", "-q", "-v"]).expect_err("conflicting flags");
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    assert_eq!(
        parse(&["8", "-q"]).expect("valid").log_level(),
        log::LevelFilter::Error
    );
    assert_eq!(
        parse(&["8", "-v"]).expect("valid").log_level(),
        log::LevelFilter::Debug
    );
}

#[test]
fn test_help_and_version_are_not_failures() {
    let help = parse(&["--help"]).expect_err("help short-circuits");
    assert_eq!(help.kind(), ErrorKind::DisplayHelp);
    let version = parse(&["--version"]).expect_err("version short-circuits");
    assert_eq!(version.kind(), ErrorKind::DisplayVersion);
}
