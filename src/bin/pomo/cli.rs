use clap::error::ErrorKind;
use clap::Parser;
use pomo::domain::arguments::USAGE;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, after_help = USAGE)]
pub struct Arguments {
    /// Maximum logging level written to standard error
    #[arg(short, long, default_value_t = Level::WARN)]
    pub verbosity: Level,
    /// Nothing, `work`, `break` or `work <N> break <M>`, plus `auto` anywhere
    #[arg(allow_negative_numbers = true)]
    pub words: Vec<String>,
}

impl Arguments {
    /// Parse the process arguments. Anything clap rejects is reported with
    /// the usage text and exit code 1, except `--help` and `--version`.
    pub fn parse_or_usage() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    println!("{USAGE}");
                    std::process::exit(1);
                }
            },
        }
    }
}
