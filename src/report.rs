use crate::{
    highlight::Highlight,
    hunt::{file_report::FileReport, NitRules},
};
use anyhow::{Context, Result};
use std::io::Write;

/// Writes one block per file: the path, `<line>: <text>` per hit, a blank line.
pub struct Reporter<'r, W: Write> {
    out: W,
    highlight: Highlight,
    rules: &'r NitRules,
}

impl<'r, W: Write> Reporter<'r, W> {
    pub fn new(out: W, highlight: Highlight, rules: &'r NitRules) -> Self {
        Self {
            out,
            highlight,
            rules,
        }
    }

    pub fn write_report(&mut self, report: &FileReport) -> Result<()> {
        writeln!(self.out, "{}", report.path().display()).context("failed to write report")?;
        for line_match in report.matches() {
            writeln!(
                self.out,
                "{}: {}",
                line_match.line_number,
                self.highlight.render(line_match, self.rules)
            )
            .context("failed to write report")?;
        }
        writeln!(self.out).context("failed to write report")?;

        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("failed to flush report")?;
        Ok(self.out)
    }
}
