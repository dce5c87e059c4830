//! Command-line argument parsing.
//!
//! Flags are few enough that they are matched by hand.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::FolioConfig;
use crate::error::CliError;

/// Flags that adjust a normal run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub no_animation: bool,
    pub submit_delay: Option<Duration>,
    pub log_file: Option<PathBuf>,
}

impl RunOptions {
    /// Apply the flags on top of `config`.
    pub fn apply(self, mut config: FolioConfig) -> FolioConfig {
        if self.no_animation {
            config = config.with_animations(false);
        }
        if let Some(delay) = self.submit_delay {
            config = config.with_submit_delay(delay);
        }
        if let Some(path) = self.log_file {
            config = config.with_log_file(path);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    Run(RunOptions),
}

pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
      --no-animation         Render every section at rest (no entrance transitions)
      --submit-delay <MS>    Simulated contact delivery time in milliseconds [default: 2000]
      --log-file <PATH>      Write logs to PATH (filter with FOLIO_LOG)
  -h, --help                 Print help
  -V, --version              Print version";

/// Parse command-line arguments (program name first) into a command.
///
/// `--version` and `--help` win as soon as they are seen.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--no-animation" => options.no_animation = true,
            "--submit-delay" => {
                let value = args.next().ok_or(CliError::MissingValue("--submit-delay"))?;
                let millis = value.parse::<u64>().map_err(|_| CliError::InvalidValue {
                    flag: "--submit-delay",
                    value: value.clone(),
                })?;
                options.submit_delay = Some(Duration::from_millis(millis));
            }
            "--log-file" => {
                let value = args.next().ok_or(CliError::MissingValue("--log-file"))?;
                options.log_file = Some(PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownFlag(arg)),
        }
    }

    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, CliError> {
        let mut all = vec!["folio".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_wins_over_other_flags() {
        assert_eq!(parse(&["--no-animation", "-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_run_options() {
        let command = parse(&["--no-animation", "--submit-delay", "250", "--log-file", "folio.log"]);
        assert_eq!(
            command,
            Ok(CliCommand::Run(RunOptions {
                no_animation: true,
                submit_delay: Some(Duration::from_millis(250)),
                log_file: Some(PathBuf::from("folio.log")),
            }))
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["--submit-delay"]),
            Err(CliError::MissingValue("--submit-delay"))
        );
    }

    #[test]
    fn test_parse_invalid_value() {
        assert_eq!(
            parse(&["--submit-delay", "soon"]),
            Err(CliError::InvalidValue {
                flag: "--submit-delay",
                value: "soon".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(CliError::UnknownFlag("--unknown".to_string()))
        );
    }

    #[test]
    fn test_apply_run_options() {
        let options = RunOptions {
            no_animation: true,
            submit_delay: Some(Duration::from_millis(5)),
            log_file: None,
        };
        let config = options.apply(FolioConfig::default());
        assert!(!config.animations);
        assert_eq!(config.submit_delay, Duration::from_millis(5));
    }
}
