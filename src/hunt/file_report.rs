use super::line_match::LineMatch;
use std::path::{Path, PathBuf};

pub struct FileReport {
    path: PathBuf,
    matches: Vec<LineMatch>,
}

impl FileReport {
    /// Returns `None` for a file without hits; clean files are never reported.
    pub fn new(path: PathBuf, matches: Vec<LineMatch>) -> Option<Self> {
        if matches.is_empty() {
            return None;
        }

        Some(Self { path, matches })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn matches(&self) -> &[LineMatch] {
        &self.matches
    }

    pub fn get_matches_count(&self) -> usize {
        self.matches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_file_has_no_report() {
        assert!(FileReport::new("kosmos/A.kt".into(), vec![]).is_none());
    }

    #[test]
    fn report_keeps_matches() {
        let report = FileReport::new(
            "kosmos/A.kt".into(),
            vec![
                LineMatch::new(3, "eq.eqv(a)".into(), vec![0]),
                LineMatch::new(7, "pr.render(b)".into(), vec![1]),
            ],
        )
        .unwrap();

        assert_eq!(report.path(), Path::new("kosmos/A.kt"));
        assert_eq!(report.get_matches_count(), 2);
        assert_eq!(report.matches()[1].line_number, 7);
    }
}
