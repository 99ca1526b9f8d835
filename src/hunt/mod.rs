pub mod file_report;
mod hunt_config;
mod hunter;
pub mod line_match;
mod nit_rules;
mod sink;

pub use hunt_config::HuntConfig;
pub use hunter::Hunter;
pub use nit_rules::NitRules;

/// Outcome of one run; only `any_hits` decides the exit status.
#[derive(Default, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub files_scanned: usize,
    pub files_with_nits: usize,
    pub nits: usize,
}

impl RunResult {
    pub fn any_hits(&self) -> bool {
        self.files_with_nits > 0
    }
}
