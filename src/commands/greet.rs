use crate::cli::{GoodbyeArgs, HelloArgs};
use crate::greeter::Greeter;

/// Returns the greeting for the `hello` command.
pub fn hello(args: &HelloArgs) -> String {
    tracing::debug!(name = %args.name, "greeting");
    Greeter::new(args.name.as_str()).greet()
}

/// Returns the farewell for the `goodbye` command.
pub fn goodbye(args: &GoodbyeArgs) -> String {
    tracing::debug!(name = %args.name, "bidding farewell");
    Greeter::new(args.name.as_str()).farewell()
}
