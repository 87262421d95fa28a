//! The fixed entity set of the page-module format.
//!
//! Directive lines open with `{`, so literal braces and angle brackets in
//! content are written as textual entities. Exactly five entities exist;
//! anything else after an `&` is ordinary text and passes through untouched.
//! Decoding happens once, at the parsing boundary — block text fields hold
//! literal characters, and no consumer ever sees an entity spelling.

const ENTITIES: [(&str, char); 5] = [
    ("&lcub;", '{'),
    ("&rcub;", '}'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&amp;", '&'),
];

/// Decode the five fixed entities into literal characters.
///
/// Single pass: the replacement characters are never re-examined, so
/// `&amp;lcub;` decodes to the literal text `&lcub;`.
pub fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, ch)) => {
                out.push(*ch);
                rest = &rest[name.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Re-encode literal text into canonical entity form.
///
/// Inverse of [`decode_entities`] on canonically-encoded input: decoding and
/// re-encoding a listing written with entities reproduces the original bytes.
pub fn encode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '{' => out.push_str("&lcub;"),
            '}' => out.push_str("&rcub;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("&lcub;", "{")]
    #[case("&rcub;", "}")]
    #[case("&lt;", "<")]
    #[case("&gt;", ">")]
    #[case("&amp;", "&")]
    #[case("a &lt;= b &amp;&amp; c", "a <= b && c")]
    fn decodes_fixed_entities(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(decode_entities(raw), expected);
    }

    #[test]
    fn unknown_sequences_pass_through() {
        assert_eq!(decode_entities("&copy; 2024 & beyond"), "&copy; 2024 & beyond");
    }

    #[test]
    fn decoding_is_single_pass() {
        // The & produced by &amp; must not combine with the following text
        // into a second round of decoding.
        assert_eq!(decode_entities("&amp;lcub;"), "&lcub;");
    }

    #[test]
    fn canonical_round_trip_is_byte_exact() {
        let raw = "function wrap(f) &lcub; return f(&lt;T&gt;); &rcub;";
        assert_eq!(encode_entities(&decode_entities(raw)), raw);
    }

    #[test]
    fn encode_escapes_ampersand_first() {
        assert_eq!(encode_entities("{ & }"), "&lcub; &amp; &rcub;");
    }
}
