use anyhow::Result;
use is_terminal::IsTerminal;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;

use gencomb::calculate::run;

fn main() -> Result<()> {
    let args = gencomb::args::parsed();
    TermLogger::init(args.log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let input = io::stdin().lock();
    let result = if io::stdout().is_terminal() {
        run(input, io::stdout().lock())
    } else {
        run(input, io::BufWriter::new(io::stdout().lock()))
    };

    match result {
        // Someone downstream (`head`, say) stopped reading: that's not our failure
        Err(e) if is_broken_pipe(&e) => {
            log::debug!("stdout closed early: {e}");
            Ok(())
        }
        other => other,
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause.downcast_ref::<io::Error>().is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}
