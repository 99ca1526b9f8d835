use grep::searcher::{Searcher, Sink, SinkMatch};
use std::path::Path;

use super::{line_match::LineMatch, nit_rules::NitRules};

pub(crate) struct NitsSink<'a> {
    rules: &'a NitRules,
    path: &'a Path,
    matches_in_file: &'a mut Vec<LineMatch>,
}

impl<'a> NitsSink<'a> {
    pub(crate) fn new(
        rules: &'a NitRules,
        path: &'a Path,
        matches_in_file: &'a mut Vec<LineMatch>,
    ) -> Self {
        Self {
            rules,
            path,
            matches_in_file,
        }
    }
}

impl Sink for NitsSink<'_> {
    type Error = std::io::Error;

    fn matched(&mut self, _: &Searcher, sink_match: &SinkMatch) -> Result<bool, std::io::Error> {
        let line_number = sink_match
            .line_number()
            .ok_or(std::io::ErrorKind::InvalidData)?;
        let line = strip_line_terminator(sink_match.bytes());
        let text = std::str::from_utf8(line)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let hits = self.rules.hits(line);
        for &index in &hits {
            if let Some(rule) = self.rules.get(index) {
                log::debug!("{} at {}:{line_number}", rule.label(), self.path.display());
            }
        }

        if !hits.is_empty() {
            self.matches_in_file
                .push(LineMatch::new(line_number, text.into(), hits));
        }

        Ok(true)
    }
}

fn strip_line_terminator(bytes: &[u8]) -> &[u8] {
    bytes.strip_suffix(b"\n").unwrap_or(bytes)
}
