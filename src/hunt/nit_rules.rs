use anyhow::{ensure, Context, Result};
use grep::{
    matcher::Matcher,
    regex::{RegexMatcher, RegexMatcherBuilder},
};
use itertools::Itertools;

/// Built-in nits as `(pattern, label)`, in the order they are applied.
pub const BUILTIN_NITS: &[(&str, &str)] = &[
    (r"\beq\.eqv\(", "eq.eqv("),
    (r"\bpr\.render\(", "pr.render("),
    (r"\bPrintable\.Companion\b", "Printable.Companion"),
];

pub struct NitRule {
    label: String,
    matcher: RegexMatcher,
}

impl NitRule {
    pub fn new(pattern: &str, label: &str) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            matcher: build_matcher(pattern)
                .with_context(|| format!("failed to compile nit pattern \"{pattern}\""))?,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn matcher(&self) -> &RegexMatcher {
        &self.matcher
    }

    pub fn is_match(&self, line: &[u8]) -> bool {
        matches!(self.matcher.is_match(line), Ok(true))
    }
}

/// Ordered rule table plus a union matcher used to find candidate lines.
pub struct NitRules {
    rules: Vec<NitRule>,
    any: RegexMatcher,
}

impl NitRules {
    pub fn builtin() -> Result<Self> {
        Self::from_patterns(BUILTIN_NITS)
    }

    pub fn from_patterns(nits: &[(&str, &str)]) -> Result<Self> {
        ensure!(!nits.is_empty(), "no nit patterns given");

        let rules = nits
            .iter()
            .map(|(pattern, label)| NitRule::new(pattern, label))
            .collect::<Result<Vec<_>>>()?;

        let union = nits
            .iter()
            .map(|(pattern, _)| format!("(?:{pattern})"))
            .join("|");
        let any = build_matcher(&union).context("failed to compile combined nit pattern")?;

        Ok(Self { rules, any })
    }

    /// Matches a line if any rule does.
    pub fn any_matcher(&self) -> &RegexMatcher {
        &self.any
    }

    pub fn get(&self, index: usize) -> Option<&NitRule> {
        self.rules.get(index)
    }

    /// Indices of every rule matching `line`, in rule order.
    pub fn hits(&self, line: &[u8]) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.is_match(line))
            .map(|(index, _)| index)
            .collect()
    }
}

fn build_matcher(pattern: &str) -> Result<RegexMatcher, grep::regex::Error> {
    RegexMatcherBuilder::new()
        .line_terminator(Some(b'\n'))
        .build(pattern)
}
