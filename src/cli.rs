use clap::{ArgAction, Args, Parser, Subcommand};

use crate::greeter::DEFAULT_NAME;

const VERSION_HELP: &str = "Show the installed version.";

/// Command-line arguments for the Silicon CLI.
#[derive(Debug, Parser)]
#[command(
    name = "silicon",
    about = "A Rust CLI hello world template.",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(
        short = 'v',
        long = "version",
        action = ArgAction::SetTrue,
        help = VERSION_HELP
    )]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Say hello to someone.")]
    Hello(HelloArgs),
    #[command(about = "Say goodbye to someone.")]
    Goodbye(GoodbyeArgs),
    #[command(about = VERSION_HELP)]
    Version,
}

#[derive(Debug, Args)]
pub struct HelloArgs {
    /// Name to greet
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct GoodbyeArgs {
    /// Name to bid farewell
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,
}
