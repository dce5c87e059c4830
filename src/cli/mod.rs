//! CLI module for folio.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(options) = run_cli_command(command) else {
//!     return Ok(()); // --version / --help already printed
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// Returns the run options when the TUI should start, `None` when the
/// command was fully handled here.
pub fn run_cli_command(command: CliCommand) -> Option<RunOptions> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            None
        }
        CliCommand::Help => {
            handle_help_command();
            None
        }
        CliCommand::Run(options) => Some(options),
    }
}
