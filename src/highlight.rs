use crate::hunt::{line_match::LineMatch, NitRules};
use grep::matcher::Matcher;
use strum::Display;

pub const EMPHASIS_START: &str = "\x1b[91m";
pub const EMPHASIS_END: &str = "\x1b[0m";

/// How matched text is rendered; picked once from whether stdout is a terminal.
#[derive(Display, Default, PartialEq, Eq, Copy, Clone, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum Highlight {
    Emphasis,
    #[default]
    Plain,
}

impl Highlight {
    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Highlight::Emphasis
        } else {
            Highlight::Plain
        }
    }

    pub fn render(&self, line_match: &LineMatch, rules: &NitRules) -> String {
        if *self == Highlight::Plain {
            return line_match.text.clone();
        }

        let text = &line_match.text;
        let mut highlighted = String::with_capacity(text.len());
        let mut current_position = 0;
        for (start, end) in match_offsets(line_match, rules) {
            highlighted.push_str(&text[current_position..start]);
            highlighted.push_str(EMPHASIS_START);
            highlighted.push_str(&text[start..end]);
            highlighted.push_str(EMPHASIS_END);

            // set current position to the end of current match
            current_position = end;
        }

        // push remaining text of a line
        highlighted.push_str(&text[current_position..]);
        highlighted
    }
}

/// Matched byte ranges of every hit rule, found on the unmarked line and sorted
/// by position. Where ranges overlap, the earlier rule in the table wins.
fn match_offsets(line_match: &LineMatch, rules: &NitRules) -> Vec<(usize, usize)> {
    let haystack = line_match.text.as_bytes();
    let mut offsets: Vec<(usize, usize)> = Vec::new();

    for rule in line_match.hits.iter().filter_map(|&index| rules.get(index)) {
        let mut rule_offsets = vec![];
        rule.matcher()
            .find_iter(haystack, |m| {
                rule_offsets.push((m.start(), m.end()));
                true
            })
            .ok();

        for (start, end) in rule_offsets {
            if offsets.iter().all(|&(s, e)| end <= s || e <= start) {
                offsets.push((start, end));
            }
        }
    }

    offsets.sort_unstable();
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn render(highlight: Highlight, text: &str) -> String {
        let rules = NitRules::builtin().unwrap();
        let hits = rules.hits(text.as_bytes());
        highlight.render(&LineMatch::new(1, text.into(), hits), &rules)
    }

    #[test_case(true => Highlight::Emphasis; "terminal")]
    #[test_case(false => Highlight::Plain; "redirected")]
    fn chosen_from_terminal_capability(is_terminal: bool) -> Highlight {
        Highlight::for_terminal(is_terminal)
    }

    #[test_case("if (eq.eqv(a, b)) {}"; "single hit")]
    #[test_case("eq.eqv(pr.render(x), Printable.Companion)"; "all rules")]
    fn plain_is_passthrough(text: &str) {
        assert_eq!(render(Highlight::Plain, text), text);
    }

    #[test]
    fn emphasis_wraps_match() {
        assert_eq!(
            render(Highlight::Emphasis, "if (eq.eqv(a, b)) {}"),
            "if (\x1b[91meq.eqv(\x1b[0ma, b)) {}"
        );
    }

    #[test]
    fn emphasis_wraps_every_occurrence() {
        assert_eq!(
            render(Highlight::Emphasis, "eq.eqv(a) && eq.eqv(b)"),
            "\x1b[91meq.eqv(\x1b[0ma) && \x1b[91meq.eqv(\x1b[0mb)"
        );
    }

    #[test]
    fn emphasis_wraps_every_rule() {
        assert_eq!(
            render(Highlight::Emphasis, "x = eq.eqv(pr.render(d), y)"),
            "x = \x1b[91meq.eqv(\x1b[0m\x1b[91mpr.render(\x1b[0md), y)"
        );
    }

    #[test]
    fn embedded_occurrence_is_left_alone() {
        assert_eq!(
            render(Highlight::Emphasis, "myeq.eqv(a) || eq.eqv(b)"),
            "myeq.eqv(a) || \x1b[91meq.eqv(\x1b[0mb)"
        );
    }

    #[test]
    fn overlapping_match_goes_to_earlier_rule() {
        let rules =
            NitRules::from_patterns(&[(r"\bfoo\.bar\b", "foo.bar"), (r"\bbar\(", "bar(")]).unwrap();
        let text = "foo.bar(1); bar(2)";
        let line_match = LineMatch::new(1, text.into(), rules.hits(text.as_bytes()));

        assert_eq!(
            Highlight::Emphasis.render(&line_match, &rules),
            "\x1b[91mfoo.bar\x1b[0m(1); \x1b[91mbar(\x1b[0m2)"
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(Highlight::Emphasis.to_string(), "emphasis");
        assert_eq!(Highlight::Plain.to_string(), "plain");
    }
}
