use super::directive::{Directive, parse_directive};

/// Classification of a single line containing only local facts.
///
/// Phase 1 of page-module parsing: each line is classified independently,
/// without reference to surrounding context. The builder (phase 2) decides
/// what a line means inside the block it is currently assembling — a
/// `Malformed` line inside a code listing, for example, is just code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The line with any trailing `\r` stripped. Listings consume this
    /// verbatim.
    pub raw: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace-only line.
    Blank,
    /// A well-formed directive line.
    Directive(Directive),
    /// Starts with `{` but is not a well-formed directive.
    Malformed,
    /// A `- ` bullet line. Meaningful inside callouts; ordinary prose
    /// elsewhere.
    Item { text: String },
    /// Anything else: prose.
    Text,
}

/// Classifies individual lines of a page module.
pub struct PageLineClassifier;

impl PageLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let raw = line.trim_end_matches('\r');
        let kind = if raw.trim().is_empty() {
            LineKind::Blank
        } else if raw.starts_with('{') {
            match parse_directive(raw) {
                Some(d) => LineKind::Directive(d),
                None => LineKind::Malformed,
            }
        } else if let Some(text) = raw.strip_prefix("- ") {
            LineKind::Item {
                text: text.to_string(),
            }
        } else {
            LineKind::Text
        };

        LineClass {
            raw: raw.to_string(),
            kind,
        }
    }
}
