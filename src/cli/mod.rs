mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
mod quiet;

use std::io::ErrorKind;

pub use context::Context;
pub use flags::{CliFlags, Command};
pub use parse::{ParseError, parse};

use crate::error::Error;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => 0,
        // Reader went away (e.g. `| head`); nothing left to report.
        Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe => 0,
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            if matches!(e, Error::Usage(_)) {
                prompts::usage_hint();
            }
            e.exit_code()
        }
    }
}
