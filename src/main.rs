mod highlight;
mod hunt;
mod report;

use anyhow::Result;
use crossterm::tty::IsTty;
use highlight::Highlight;
use hunt::{HuntConfig, Hunter, NitRules};
use report::Reporter;
use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

const EXIT_NITS_FOUND: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(EXIT_NITS_FOUND),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Returns whether any nit was found.
fn run() -> Result<bool> {
    let rules = NitRules::builtin()?;

    let stdout = io::stdout();
    let highlight = Highlight::for_terminal(stdout.is_tty());
    log::debug!("highlight: {highlight}");

    let mut reporter = Reporter::new(BufWriter::new(stdout.lock()), highlight, &rules);
    let mut hunter = Hunter::new(HuntConfig::default(), &rules);
    let result = hunter.hunt(|report| reporter.write_report(report))?;
    reporter.finish()?;

    Ok(result.any_hits())
}
