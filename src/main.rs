mod arguments;
mod context;
mod infrastructure;
mod log;
mod run;

use arguments::Arguments;
use clap::Parser;
use context::Context;
use infrastructure::OsConsole;
use run::{Options, run};
use std::process::exit;

const DEFAULT_LOG_PREFIX: &str = "define-task: ";

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();
    let context = Context::new(
        OsConsole::new(),
        Options {
            debug: arguments.debug,
            inline: arguments.inline,
            log_prefix: arguments
                .log_prefix
                .unwrap_or_else(|| DEFAULT_LOG_PREFIX.into()),
        },
    );

    if let Err(error) = run(&context, &arguments.definitions.into_iter().collect()).await {
        let message = format!("{}{}\n", context.options().log_prefix, error);

        if context
            .console()
            .lock()
            .await
            .write_stderr(message.as_bytes())
            .await
            .is_err()
        {
            eprint!("{message}");
        }

        exit(1)
    }
}
