//! Tests for CLI argument parsing and its effect on the roster configuration

use access_roster::types::config::{CliArgs, RosterConfig};
use clap::Parser;

#[test]
fn test_no_arguments_runs_demonstration() {
    let args = CliArgs::try_parse_from(vec!["access-roster"]).unwrap();
    assert!(args.config.is_none());
    assert!(args.save.is_none());
    assert!(args.load.is_none());
    assert!(!args.no_sort);

    let config = RosterConfig::from_cli_args(args).unwrap();
    assert_eq!(config, RosterConfig::default());
}

#[test]
fn test_persistence_arguments() {
    let args = CliArgs::try_parse_from(vec![
        "access-roster",
        "--save",
        "out.txt",
        "--load",
        "in.txt",
        "--profiles-output",
        "profiles.jsonl",
        "--no-sort",
    ])
    .unwrap();

    let config = RosterConfig::from_cli_args(args).unwrap();
    assert_eq!(config.save_path.as_deref(), Some("out.txt"));
    assert_eq!(config.load_path.as_deref(), Some("in.txt"));
    assert_eq!(config.profiles_output.as_deref(), Some("profiles.jsonl"));
    assert!(!config.sort_users);
    config.validate().unwrap();
}

#[test]
fn test_logging_flags() {
    let args = CliArgs::try_parse_from(vec!["access-roster", "-v", "--dry-run"]).unwrap();
    assert!(args.verbose);
    assert!(!args.debug);
    assert!(args.dry_run);

    let args = CliArgs::try_parse_from(vec!["access-roster", "--debug", "--print-config"]).unwrap();
    assert!(args.debug);
    assert!(args.print_config);
}

#[test]
fn test_unknown_argument_rejected() {
    assert!(CliArgs::try_parse_from(vec!["access-roster", "--user-count", "5"]).is_err());
}

#[test]
fn test_missing_config_file_reported() {
    let args =
        CliArgs::try_parse_from(vec!["access-roster", "--config", "/no/such/roster.json"]).unwrap();
    assert!(RosterConfig::from_cli_args(args).is_err());
}
