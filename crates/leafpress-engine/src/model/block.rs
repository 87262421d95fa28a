use relative_path::RelativePathBuf;
use serde::{Deserialize, Serialize};

/// One typed unit of chapter content.
///
/// Blocks are the output contract to the display layer: a chapter is an
/// ordered sequence of these, and reading order is semantically significant.
/// All text fields hold literal, entity-decoded characters — no markup
/// escaping leaks past the parsing boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section heading at one of three levels.
    Heading { level: HeadingLevel, text: String },
    /// Prose paragraph. May contain inline emphasis markers, kept verbatim.
    Paragraph { text: String },
    /// Code listing. `code` preserves the decoded source byte-for-byte,
    /// including characters that look like markup delimiters.
    CodeListing {
        code: String,
        language: Option<String>,
    },
    /// Labeled bullet list used for chapter-ending summaries.
    Callout { kind: CalloutKind, items: Vec<String> },
    /// Reference to an external asset with a caption. Asset resolution is the
    /// reader application's concern.
    Figure {
        caption: String,
        reference: RelativePathBuf,
    },
}

/// Heading depth. Chapters use exactly three levels; anything deeper is
/// rejected at the directive level rather than modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric depth, 1 through 3.
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// The label of a callout list. Only "Things to Remember" exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    Remember,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_levels_are_ordered_by_depth() {
        assert!(HeadingLevel::H1 < HeadingLevel::H2);
        assert!(HeadingLevel::H2 < HeadingLevel::H3);
        assert_eq!(HeadingLevel::H3.depth(), 3);
    }

    #[test]
    fn blocks_serialize_with_type_tags() {
        let block = Block::Callout {
            kind: CalloutKind::Remember,
            items: vec!["Avoid globals.".to_string()],
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "callout");
        assert_eq!(json["kind"], "remember");
        assert_eq!(json["items"][0], "Avoid globals.");
    }

    #[test]
    fn figure_reference_serializes_as_relative_path() {
        let block = Block::Figure {
            caption: "The scope chain".to_string(),
            reference: RelativePathBuf::from("images/scope-chain.png"),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["reference"], "images/scope-chain.png");
    }
}
