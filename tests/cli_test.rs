//! Command-line parsing, config plumbing and the log file.

use std::time::Duration;

use folio::cli::{parse_args, run_cli_command, CliCommand, RunOptions};
use folio::config::FolioConfig;
use folio::error::CliError;
use folio::logging;
use serial_test::serial;
use tracing_subscriber::EnvFilter;

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    std::iter::once("folio".to_string())
        .chain(list.iter().map(|s| s.to_string()))
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn test_flags_flow_into_config() {
    let command = parse_args(args(&["--no-animation", "--submit-delay", "250", "--log-file", "/tmp/f.log"]))
        .unwrap();
    let options = run_cli_command(command).unwrap();
    let config = options.apply(FolioConfig::default());

    assert!(!config.animations);
    assert_eq!(config.submit_delay, Duration::from_millis(250));
    assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("/tmp/f.log")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_version_and_help_short_circuit() {
    assert_eq!(parse_args(args(&["-V"])), Ok(CliCommand::Version));
    assert_eq!(parse_args(args(&["--no-animation", "--help"])), Ok(CliCommand::Help));
    assert_eq!(run_cli_command(CliCommand::Version), None);
}

#[test]
fn test_no_flags_runs_with_defaults() {
    assert_eq!(parse_args(args(&[])), Ok(CliCommand::Run(RunOptions::default())));
    let config = RunOptions::default().apply(FolioConfig::default());
    assert!(config.animations);
    assert_eq!(config.submit_delay, Duration::from_millis(2000));
}

#[test]
fn test_bad_flags_are_errors() {
    assert!(matches!(parse_args(args(&["--bogus"])), Err(CliError::UnknownFlag(_))));
    assert!(parse_args(args(&["--submit-delay"])).is_err());
    assert!(parse_args(args(&["--submit-delay", "soon"])).is_err());
}

#[test]
#[serial]
fn test_log_file_receives_app_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.log");
    let subscriber = logging::file_subscriber(&path, EnvFilter::new("info")).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        let mut app = folio::app::App::new(FolioConfig::default().with_animations(false));
        app.toggle_theme();
        app.jump_to(folio::page::Section::Skills);
    });

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("theme"));
    assert!(log.contains("jump to section"));
}
