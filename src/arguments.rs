use clap::Parser;
use define_task::{Definition, parse_definition};

#[derive(Parser)]
#[clap(about = "Preprocessor symbol definitions for build tasks", version)]
pub struct Arguments {
    #[clap(
        short = 'D',
        long = "define",
        value_name = "NAME[=VALUE]",
        value_parser = parse_definition,
        help = "Define a symbol"
    )]
    pub definitions: Vec<Definition>,
    #[clap(long, help = "Print definitions as a single define string")]
    pub inline: bool,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show debug logs", env = "DEFINE_TASK_DEBUG")]
    pub debug: bool,
}
