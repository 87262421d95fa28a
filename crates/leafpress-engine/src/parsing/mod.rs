pub mod builder;
pub mod classify;
pub mod directive;
pub mod entities;
pub mod error;

pub use entities::{decode_entities, encode_entities};
pub use error::{ValidationError, ValidationReason};

use crate::model::ChapterDocument;

use builder::BlockBuilder;
use classify::{LineKind, PageLineClassifier};

/// Parse a page module into a validated [`ChapterDocument`].
///
/// All-or-nothing: the returned document satisfies every model invariant
/// (non-empty blocks, strict heading nesting, decoded entity-free text), or
/// the whole input is rejected with a single [`ValidationError`]. Parsing is
/// deterministic and side-effect free.
pub fn parse(raw: &str) -> Result<ChapterDocument, ValidationError> {
    let classifier = PageLineClassifier;
    let mut lines = raw.lines();

    let (id, title) = chapter_header(&classifier, &mut lines)?;

    let mut builder = BlockBuilder::new();
    for line in lines {
        builder.push(&classifier.classify(line))?;
    }
    let blocks = builder.finish()?;

    if blocks.is_empty() {
        return Err(ValidationError::new(ValidationReason::EmptyDocument, 0));
    }

    Ok(ChapterDocument::new(id, title, blocks))
}

/// The first non-blank line must be `{chapter id=... title="..."}`. It is
/// chapter metadata, not a block.
fn chapter_header(
    classifier: &PageLineClassifier,
    lines: &mut std::str::Lines<'_>,
) -> Result<(String, String), ValidationError> {
    let missing = || ValidationError::new(ValidationReason::MissingChapterHeader, 0);

    for line in lines {
        let lc = classifier.classify(line);
        return match lc.kind {
            LineKind::Blank => continue,
            LineKind::Directive(d) if d.name == "chapter" && !d.is_terminator && d.rest.is_empty() => {
                match (d.attr("id"), d.attr("title")) {
                    (Some(id), Some(title)) if !id.is_empty() && !title.is_empty() => {
                        Ok((id.to_string(), title.to_string()))
                    }
                    _ => Err(missing()),
                }
            }
            _ => Err(missing()),
        };
    }

    Err(missing())
}
