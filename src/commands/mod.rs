pub mod greet;
pub mod version;

use clap::CommandFactory;

use crate::cli::{Cli, Command};
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler.
///
/// The root `--version` flag is checked before routing, so it wins over any
/// subcommand given alongside it.
pub fn execute(args: &Cli) -> CommandResult<String> {
    if args.version {
        tracing::debug!("version flag set, skipping subcommand dispatch");
        return Ok(version::message());
    }

    match &args.command {
        Some(Command::Hello(hello)) => Ok(greet::hello(hello)),
        Some(Command::Goodbye(goodbye)) => Ok(greet::goodbye(goodbye)),
        Some(Command::Version) => Ok(version::message()),
        None => {
            tracing::debug!("no command given, rendering help");
            Ok(Cli::command().render_help().to_string().trim_end().to_owned())
        }
    }
}
