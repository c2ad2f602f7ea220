mod cli;
mod setup;

use pomo::domain::arguments;
use pomo::domain::Outcome;
use snafu::{prelude::*, Whatever};

use crate::cli::Arguments;

#[snafu::report]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Whatever> {
    let args = Arguments::parse_or_usage();
    setup::logger(args.verbosity)?;

    let config = match arguments::interpret(args.words.as_slice()) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(err = %snafu::Report::from_error(&err));
            println!("{err}");
            std::process::exit(1);
        }
    };

    let outcome = setup::bootstrap(config)
        .run()
        .await
        .whatever_context("Timer failed to run")?;

    if outcome == Outcome::Cancelled {
        // A prompt may still be blocked reading standard input, which would
        // hold up the runtime shutdown.
        std::process::exit(0);
    }

    Ok(())
}
