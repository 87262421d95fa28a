use thiserror::Error;

/// The single error kind raised by [`crate::parsing::parse`].
///
/// Parsing is deterministic and all-or-nothing: a page module either yields a
/// complete `ChapterDocument` or is rejected with one of these. There is no
/// partial-success mode and no recovery path inside the core; callers surface
/// the error to the author or build step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} (block {block_index})")]
pub struct ValidationError {
    pub reason: ValidationReason,
    /// Index the offending block occupies (or would occupy) in reading
    /// order. Document-level failures report index 0.
    pub block_index: usize,
}

impl ValidationError {
    pub(crate) fn new(reason: ValidationReason, block_index: usize) -> Self {
        Self {
            reason,
            block_index,
        }
    }
}

/// Why a page module was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("chapter has no blocks")]
    EmptyDocument,
    #[error("first line must be a {{chapter id=... title=\"...\"}} header")]
    MissingChapterHeader,
    #[error("malformed directive line: {line}")]
    MalformedDirective { line: String },
    #[error("unknown directive {{{name}}}")]
    UnknownDirective { name: String },
    #[error("level-{level} heading has no preceding lower-level heading")]
    HeadingSkipsLevel { level: u8 },
    #[error("code listing is never closed by {{/code}}")]
    UnterminatedListing,
    #[error("callout is never closed by {{/remember}}")]
    UnterminatedCallout,
    #[error("callout contains no items")]
    EmptyCallout,
    #[error("expected a `- ` item inside the callout, found: {line}")]
    CalloutItemExpected { line: String },
    #[error("terminator {{{name}}} closes nothing")]
    StrayTerminator { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_reason_and_block() {
        let err = ValidationError::new(ValidationReason::UnterminatedListing, 4);
        assert_eq!(
            err.to_string(),
            "code listing is never closed by {/code} (block 4)"
        );
    }
}
