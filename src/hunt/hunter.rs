use super::{file_report::FileReport, nit_rules::NitRules, sink::NitsSink, HuntConfig, RunResult};
use anyhow::{Context, Result};
use grep::{
    matcher::LineTerminator,
    searcher::{BinaryDetection, Searcher, SearcherBuilder},
};
use ignore::{DirEntry, WalkBuilder};
use itertools::Itertools;
use std::{
    borrow::Cow,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Line boundaries besides `\n`; `\r\n` counts as one boundary.
const LINE_BREAKS: &[char] = &[
    '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

pub struct Hunter<'r> {
    config: HuntConfig,
    rules: &'r NitRules,
    grep_searcher: Searcher,
}

impl<'r> Hunter<'r> {
    pub fn new(config: HuntConfig, rules: &'r NitRules) -> Self {
        let grep_searcher = SearcherBuilder::new()
            .binary_detection(BinaryDetection::none())
            .line_terminator(LineTerminator::byte(b'\n'))
            .line_number(true)
            .multi_line(false)
            .build();

        Self {
            config,
            rules,
            grep_searcher,
        }
    }

    /// Scans every candidate file, handing each report to `on_report` as soon
    /// as the file is done so output order follows discovery order.
    pub fn hunt<F>(&mut self, mut on_report: F) -> Result<RunResult>
    where
        F: FnMut(&FileReport) -> Result<()>,
    {
        let mut result = RunResult::default();

        for root in self.discover_roots()? {
            log::debug!("scanning {}", root.display());

            for path in self.files_in(&root)? {
                result.files_scanned += 1;
                if let Some(report) = self.scan_file(&path)? {
                    result.files_with_nits += 1;
                    result.nits += report.get_matches_count();
                    on_report(&report)?;
                }
            }
        }

        log::info!(
            "{} nit(s) in {} of {} file(s)",
            result.nits,
            result.files_with_nits,
            result.files_scanned
        );

        Ok(result)
    }

    /// Immediate children of the scan root whose name carries the prefix.
    pub fn discover_roots(&self) -> Result<Vec<PathBuf>> {
        let root = &self.config.root;
        let entries = std::fs::read_dir(root)
            .with_context(|| format!("failed to list {}", root.display()))?;

        let mut roots = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("failed to list {}", root.display()))?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with(&self.config.dir_prefix) && entry.path().is_dir()
            {
                roots.push(entry.path());
            }
        }

        Ok(roots.into_iter().sorted().collect())
    }

    /// Candidate files under `dir`, depth first with siblings sorted by name.
    pub fn files_in(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let config = self.config.clone();
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let relative = entry
                    .path()
                    .strip_prefix(&config.root)
                    .unwrap_or(entry.path());
                !config.is_excluded(relative)
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) if is_permission_denied(&err) => {
                    log::debug!("skipping unreadable directory: {err}");
                    continue;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("failed to walk {}", dir.display()))
                }
            };

            if is_file(&entry) && self.config.has_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Returns `None` for clean files and for files that cannot be decoded or
    /// read for lack of permission.
    pub fn scan_file(&mut self, path: &Path) -> Result<Option<FileReport>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::InvalidData | ErrorKind::PermissionDenied
                ) =>
            {
                log::debug!("skipping {}: {err}", path.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        let relative = path
            .strip_prefix(&self.config.root)
            .unwrap_or(path)
            .to_path_buf();

        let content = normalize_line_breaks(&content);
        let mut matches_in_file = Vec::new();
        let sink = NitsSink::new(self.rules, &relative, &mut matches_in_file);
        self.grep_searcher
            .search_slice(self.rules.any_matcher(), content.as_bytes(), sink)
            .with_context(|| format!("failed to search {}", path.display()))?;

        Ok(FileReport::new(relative, matches_in_file))
    }
}

/// Rewrites every line boundary to a single `\n` so the line searcher counts
/// lines the same way for old Mac endings, form feeds and Unicode separators.
fn normalize_line_breaks(content: &str) -> Cow<'_, str> {
    if !content.contains(LINE_BREAKS) {
        return Cow::Borrowed(content);
    }

    let mut normalized = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            chars.next_if_eq(&'\n');
            normalized.push('\n');
        } else if LINE_BREAKS.contains(&c) {
            normalized.push('\n');
        } else {
            normalized.push(c);
        }
    }

    Cow::Owned(normalized)
}

fn is_permission_denied(err: &ignore::Error) -> bool {
    err.io_error()
        .is_some_and(|err| err.kind() == ErrorKind::PermissionDenied)
}

fn is_file(entry: &DirEntry) -> bool {
    entry
        .file_type()
        .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && entry.path().is_file()))
}
