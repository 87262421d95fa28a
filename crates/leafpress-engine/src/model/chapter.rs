use serde::Serialize;

use super::block::Block;

/// The ordered, validated collection of blocks representing one book chapter.
///
/// A `ChapterDocument` is constructed once by [`crate::parsing::parse`] and is
/// immutable thereafter: fields are private, accessors borrow, and no mutation
/// API exists. Consumers that need a display-ready view call
/// [`ChapterDocument::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterDocument {
    id: String,
    title: String,
    blocks: Vec<Block>,
}

impl ChapterDocument {
    /// Invariants (non-empty blocks, heading nesting) are checked by the
    /// parser before this is called.
    pub(crate) fn new(id: String, title: String, blocks: Vec<Block>) -> Self {
        debug_assert!(!blocks.is_empty(), "parser must reject empty chapters");
        Self { id, title, blocks }
    }

    /// Stable chapter identifier (the slug from the chapter header).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Chapter title from the chapter header.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Blocks in reading order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Display-ready view of this chapter. See [`crate::render::render`].
    pub fn snapshot(&self) -> crate::render::Snapshot {
        crate::render::render(self)
    }
}
