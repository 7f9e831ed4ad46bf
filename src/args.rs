//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Returns the parsed command line. The only thing to configure is how much
/// gets logged to standard error.
#[must_use]
pub fn parsed() -> Args {
    from_cli(&CliArgs::parse())
}

/// `Args` is what `main` needs from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args {
    /// `log_level` is the most verbose level that will be logged to stderr
    pub log_level: LevelFilter,
}

fn from_cli(parsed: &CliArgs) -> Args {
    let log_level = match parsed.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Args { log_level }
}

#[derive(Debug, Parser)]
#[command(name = "gen-comb", version)]
/// Reads lines from standard input and prints every non-empty combination of
/// them, one per line, smallest combinations first. The lines of each
/// combination appear in input order, separated by single spaces.
struct CliArgs {
    #[arg(short, long, action = ArgAction::Count)]
    /// Log progress to standard error (repeat for more detail)
    verbose: u8,
}
