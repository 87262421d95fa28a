use std::sync::OnceLock;

use regex::Regex;

/// A parsed directive line: `{name key=value ...} rest`.
///
/// Terminators (`{/name}`) carry no attributes and no trailing text; a
/// terminator line with either is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub is_terminator: bool,
    attrs: Vec<(String, String)>,
    /// Text after the closing brace, trimmed. The heading text or figure
    /// caption, depending on the directive.
    pub rest: String,
}

impl Directive {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attrs(&self) -> bool {
        !self.attrs.is_empty()
    }
}

fn directive_re() -> &'static Regex {
    static DIRECTIVE_RE: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE_RE.get_or_init(|| {
        Regex::new(r#"^\{(/?)([a-z][a-z0-9]*)((?:\s+[a-z]+=(?:"[^"]*"|[^\s}"]+))*)\}(?:\s+(.*))?$"#)
            .expect("invalid directive regex")
    })
}

fn attr_re() -> &'static Regex {
    static ATTR_RE: OnceLock<Regex> = OnceLock::new();
    ATTR_RE.get_or_init(|| {
        Regex::new(r#"([a-z]+)=(?:"([^"]*)"|([^\s}"]+))"#).expect("invalid attribute regex")
    })
}

/// Parse a line that starts with `{` into a [`Directive`].
///
/// Returns `None` when the line is not a well-formed directive; the caller
/// decides whether that is an error (prose must encode a leading brace as
/// `&lcub;`, so a stray `{` is never silently repaired).
pub fn parse_directive(line: &str) -> Option<Directive> {
    let caps = directive_re().captures(line)?;
    let is_terminator = !caps[1].is_empty();
    let name = caps[2].to_string();
    let raw_attrs = caps.get(3).map(|m| m.as_str()).unwrap_or("");
    let rest = caps
        .get(4)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    if is_terminator && (!raw_attrs.is_empty() || !rest.is_empty()) {
        return None;
    }

    let attrs = attr_re()
        .captures_iter(raw_attrs)
        .map(|c| {
            let key = c[1].to_string();
            let value = c.get(2).or(c.get(3)).map(|m| m.as_str()).unwrap_or("");
            (key, value.to_string())
        })
        .collect();

    Some(Directive {
        name,
        is_terminator,
        attrs,
        rest,
    })
}
