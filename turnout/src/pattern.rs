/*!
Pattern synthesis and occurrence scanning.

A [`Pattern`] is the compiled matcher derived from a switch's name,
aliases, and value kind: an alternation list plus one of four value
grammars, scanned by hand over the working text. Every occurrence must sit
on token boundaries, introduced at string start or after whitespace and
followed by whitespace or string end, so a registered `help` never
matches inside `helpme`.
*/

use turnout_scan::{self as scan, Site, Span};

use crate::ValueKind;

#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    names: Vec<String>,
    grammar: Grammar,
}

/// The per-kind value grammar, applied right after a matched name.
#[derive(Debug, Clone)]
enum Grammar {
    /// Optional `+`/`-` directly after the name, no separator.
    Marker,

    /// Separator, then a quoted run or a bare token.
    Text,

    /// Separator, optional sign, digits.
    Integer,

    /// Separator, then exactly one label, matched as authored.
    Labels(Vec<String>),
}

/// One non-overlapping match of a pattern. `span` covers introducer
/// through value and is what removal splices out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Occurrence {
    pub span: Span,
    pub capture: Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Capture {
    /// Explicit boolean state, or no marker.
    Marker(Option<bool>),

    /// Text value; `span` excludes the quotes when `quoted`.
    Text { span: Span, quoted: bool },

    /// Signed digit run, sign included.
    Number(Span),

    /// Index into the registered label set.
    Label(usize),
}

impl Pattern {
    /// Compile a matcher for `name` and `aliases` with the value grammar
    /// of `kind`. Alternatives are tried in the order given here.
    pub(crate) fn build(name: &str, aliases: &[String], kind: &ValueKind) -> Self {
        let names = core::iter::once(name)
            .chain(aliases.iter().map(String::as_str))
            .map(String::from)
            .collect();

        let grammar = match kind {
            ValueKind::Boolean => Grammar::Marker,
            ValueKind::Text => Grammar::Text,
            ValueKind::Integer => Grammar::Integer,
            ValueKind::Enumeration(labels) => Grammar::Labels(labels.clone()),
        };

        Self { names, grammar }
    }

    /// Every non-overlapping occurrence in `text`, left to right.
    /// Scanning resumes at the end of each match.
    pub(crate) fn find_all(&self, text: &str) -> Vec<Occurrence> {
        let mut found = Vec::new();
        let mut pos = 0;

        while let Some(site) = scan::next_site(text, pos) {
            match self.match_at(text, site) {
                Some(occurrence) => {
                    pos = occurrence.span.end;
                    found.push(occurrence);
                }
                None => pos = site.start + 1,
            }
        }

        found
    }

    /// Try the alternation at one candidate site. The first name that
    /// completes its value grammar wins, like a leftmost alternation.
    fn match_at(&self, text: &str, site: Site) -> Option<Occurrence> {
        self.names.iter().find_map(|name| {
            let end = scan::keyword_ignore_case(text, site.name_start, name)?;
            self.match_value(text, site.start, end)
        })
    }

    fn match_value(&self, text: &str, start: usize, at: usize) -> Option<Occurrence> {
        match self.grammar {
            Grammar::Marker => {
                let (marker, end) = match text.as_bytes().get(at) {
                    Some(b'+') => (Some(true), at + 1),
                    Some(b'-') => (Some(false), at + 1),
                    _ => (None, at),
                };

                scan::boundary_after(text, end).then(|| Occurrence {
                    span: Span::new(start, end),
                    capture: Capture::Marker(marker),
                })
            }

            Grammar::Text => {
                let at = separator(text, at)?;

                if let Some((inner, end)) = scan::quoted_run(text, at) {
                    if scan::boundary_after(text, end) {
                        return Some(Occurrence {
                            span: Span::new(start, end),
                            capture: Capture::Text {
                                span: inner,
                                quoted: true,
                            },
                        });
                    }
                }

                let end = scan::bare_run(text, at);
                (end > at).then(|| Occurrence {
                    span: Span::new(start, end),
                    capture: Capture::Text {
                        span: Span::new(at, end),
                        quoted: false,
                    },
                })
            }

            Grammar::Integer => {
                let at = separator(text, at)?;
                let digits = match text.as_bytes().get(at) {
                    Some(b'+' | b'-') => at + 1,
                    _ => at,
                };
                let end = scan::digit_run(text, digits);

                (end > digits && scan::boundary_after(text, end)).then(|| Occurrence {
                    span: Span::new(start, end),
                    capture: Capture::Number(Span::new(at, end)),
                })
            }

            Grammar::Labels(ref labels) => {
                let at = separator(text, at)?;
                labels.iter().enumerate().find_map(|(index, label)| {
                    let end = scan::keyword(text, at, label)?;
                    scan::boundary_after(text, end).then(|| Occurrence {
                        span: Span::new(start, end),
                        capture: Capture::Label(index),
                    })
                })
            }
        }
    }
}

/// The separator between a switch name and its value: a `:` or a run of
/// whitespace. The value must follow directly.
fn separator(text: &str, at: usize) -> Option<usize> {
    match text.as_bytes().get(at) {
        Some(b':') => Some(at + 1),
        _ => {
            let end = scan::whitespace_run(text, at);
            (end > at).then_some(end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str, kind: ValueKind) -> Pattern {
        Pattern::build(name, &[], &kind)
    }

    #[test]
    fn boolean_markers() {
        let verbose = pattern("verbose", ValueKind::Boolean);

        let found = verbose.find_all(" -verbose ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].capture, Capture::Marker(None));
        assert_eq!(found[0].span, Span::new(1, 9));

        let found = verbose.find_all(" -verbose+ -verbose-");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].capture, Capture::Marker(Some(true)));
        assert_eq!(found[1].capture, Capture::Marker(Some(false)));
    }

    #[test]
    fn boolean_requires_a_trailing_boundary() {
        let help = pattern("help", ValueKind::Boolean);
        assert!(help.find_all(" /helpme").is_empty());
        assert!(help.find_all(" -help+x").is_empty());
        assert_eq!(help.find_all(" /help").len(), 1);
    }

    #[test]
    fn names_are_case_insensitive() {
        let verbose = pattern("verbose", ValueKind::Boolean);
        assert_eq!(verbose.find_all(" -VERBOSE").len(), 1);
        assert_eq!(verbose.find_all(" --Verbose").len(), 1);
    }

    #[test]
    fn aliases_participate_in_the_alternation() {
        let verbose = Pattern::build(
            "verbose",
            &["v".to_owned(), "chatty".to_owned()],
            &ValueKind::Boolean,
        );

        assert_eq!(verbose.find_all(" -v -chatty").len(), 2);
    }

    #[test]
    fn text_values() {
        let name = pattern("name", ValueKind::Text);

        let found = name.find_all(r#" -name:John"#);
        assert_eq!(
            found[0].capture,
            Capture::Text {
                span: Span::new(7, 11),
                quoted: false
            }
        );

        let found = name.find_all(r#" -name:"John Smith" tail"#);
        assert_eq!(
            found[0].capture,
            Capture::Text {
                span: Span::new(8, 18),
                quoted: true
            }
        );
        assert_eq!(found[0].span, Span::new(1, 19));

        // whitespace works as the separator too
        let found = name.find_all(" -name John");
        assert_eq!(
            found[0].capture,
            Capture::Text {
                span: Span::new(7, 11),
                quoted: false
            }
        );
    }

    #[test]
    fn text_without_a_value_does_not_match() {
        let name = pattern("name", ValueKind::Text);
        assert!(name.find_all(" -name:").is_empty());
        assert!(name.find_all(" -name").is_empty());
    }

    #[test]
    fn integer_values() {
        let count = pattern("count", ValueKind::Integer);

        let found = count.find_all(" -count:-5");
        assert_eq!(found[0].capture, Capture::Number(Span::new(8, 10)));

        let found = count.find_all(" -count:+12 ");
        assert_eq!(found[0].capture, Capture::Number(Span::new(8, 11)));

        assert!(count.find_all(" -count:12x").is_empty());
        assert!(count.find_all(" -count:x").is_empty());
        assert!(count.find_all(" -count:-").is_empty());
    }

    #[test]
    fn labels_match_as_authored() {
        let level = pattern(
            "level",
            ValueKind::Enumeration(vec![
                "Low".to_owned(),
                "LowMedium".to_owned(),
                "High".to_owned(),
            ]),
        );

        let found = level.find_all(" -level:High");
        assert_eq!(found[0].capture, Capture::Label(2));

        // a longer label is not shadowed by its prefix
        let found = level.find_all(" -level:LowMedium");
        assert_eq!(found[0].capture, Capture::Label(1));

        // labels are case-sensitive and non-labels mean no occurrence
        assert!(level.find_all(" -level:high").is_empty());
        assert!(level.find_all(" -level:Extreme").is_empty());
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let name = pattern("name", ValueKind::Text);
        let found = name.find_all(" -name:a -name:b");
        assert_eq!(found.len(), 2);
        assert!(found[0].span.end <= found[1].span.start);
    }
}
