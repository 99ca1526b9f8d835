use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

pub const DIR_PREFIX: &str = "kosmos";
pub const EXTENSION: &str = "kt";
pub const SKIP_DIRS: &[&str] = &["build", ".gradle", "out", ".idea", ".git"];

#[derive(Clone, Debug)]
pub struct HuntConfig {
    pub root: PathBuf,
    pub dir_prefix: String,
    pub extension: String,
    pub skip_dirs: Vec<String>,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dir_prefix: DIR_PREFIX.into(),
            extension: EXTENSION.into(),
            skip_dirs: SKIP_DIRS.iter().map(|&dir| dir.into()).collect(),
        }
    }
}

impl HuntConfig {
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// True if any segment of `relative` names a skipped directory.
    pub fn is_excluded(&self, relative: &Path) -> bool {
        relative.components().any(|component| {
            self.skip_dirs
                .iter()
                .any(|dir| component.as_os_str() == OsStr::new(dir))
        })
    }

    /// Matches `*.<extension>` by file name, so a file named just `.kt` counts.
    pub fn has_extension(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension);
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("kosmos-core/src/Main.kt" => false; "plain source")]
    #[test_case("kosmos-core/build/gen/Main.kt" => true; "build dir")]
    #[test_case("kosmos-core/src/build/Main.kt" => true; "nested build dir")]
    #[test_case("kosmos-core/.gradle/Main.kt" => true; "gradle cache")]
    #[test_case("kosmos-core/out/Main.kt" => true; "out dir")]
    #[test_case("kosmos-core/.idea/Main.kt" => true; "idea dir")]
    #[test_case("kosmos-core/.git/Main.kt" => true; "git dir")]
    #[test_case("kosmos-core/builder/Main.kt" => false; "only whole segments count")]
    #[test_case("kosmos-core/output/Main.kt" => false; "out prefix is not out")]
    fn default_exclusions(path: &str) -> bool {
        HuntConfig::default().is_excluded(Path::new(path))
    }

    #[test_case("Main.kt" => true; "kotlin source")]
    #[test_case("build.gradle.kts" => false; "kotlin script")]
    #[test_case("Main.java" => false; "java source")]
    #[test_case("kt" => false; "bare name")]
    #[test_case(".kt" => true; "extension only")]
    #[test_case("src/Main.test.kt" => true; "dotted name")]
    #[test_case("Main.KT" => false; "case sensitive")]
    #[test_case("Main.ktx" => false; "longer extension")]
    fn default_extension(path: &str) -> bool {
        HuntConfig::default().has_extension(Path::new(path))
    }

    #[test]
    fn overridden_defaults() {
        let config = HuntConfig {
            dir_prefix: "proj".into(),
            extension: "rs".into(),
            skip_dirs: vec!["target".into()],
            ..HuntConfig::default()
        }
        .root("/tmp/tree");

        assert_eq!(config.root, PathBuf::from("/tmp/tree"));
        assert_eq!(config.dir_prefix, "proj");
        assert!(config.has_extension(Path::new("lib.rs")));
        assert!(config.is_excluded(Path::new("proj/target/lib.rs")));
        assert!(!config.is_excluded(Path::new("proj/build/lib.rs")));
    }
}
