use serde::Serialize;

use crate::model::{Block, ChapterDocument};

/// Immutable, display-ready view of one chapter.
///
/// Snapshots are the read API for display layers: they carry everything a
/// frontend needs to render the chapter without touching the document itself.
/// Blocks appear in exactly the stored reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub chapter_id: String,
    pub title: String,
    pub blocks: Vec<RenderBlock>,
}

/// One displayable block with a stable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderBlock {
    /// Stable identifier a display layer can key elements on.
    pub id: BlockId,
    pub block: Block,
}

/// Reading-order position of a block. Documents are immutable, so the index
/// is stable for the lifetime of the chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockId(pub usize);

/// Produce the display view of a chapter.
///
/// Pure function: no I/O, no shared state, and identical output for identical
/// input — repeated calls yield equal snapshots.
pub fn render(doc: &ChapterDocument) -> Snapshot {
    Snapshot {
        chapter_id: doc.id().to_string(),
        title: doc.title().to_string(),
        blocks: doc
            .blocks()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, block)| RenderBlock {
                id: BlockId(index),
                block,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    fn sample() -> ChapterDocument {
        parse(concat!(
            "{chapter id=variable-scope title=\"Variable Scope\"}\n",
            "{h1} Variable Scope\n",
            "{h3} Item 8: Minimize Use of the Global Object\n",
            "{remember}\n",
            "- Avoid declaring global variables.\n",
            "{/remember}\n",
        ))
        .unwrap()
    }

    #[test]
    fn render_preserves_order_and_count() {
        let doc = sample();
        let snap = render(&doc);
        assert_eq!(snap.blocks.len(), doc.blocks().len());
        for (i, rb) in snap.blocks.iter().enumerate() {
            assert_eq!(rb.id, BlockId(i));
            assert_eq!(rb.block, doc.blocks()[i]);
        }
    }

    #[test]
    fn render_is_deterministic() {
        let doc = sample();
        assert_eq!(render(&doc), render(&doc));
        assert_eq!(doc.snapshot(), render(&doc));
    }

    #[test]
    fn snapshot_serializes_for_the_display_layer() {
        let snap = sample().snapshot();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["chapter_id"], "variable-scope");
        assert_eq!(json["blocks"][0]["id"], 0);
        assert_eq!(json["blocks"][0]["block"]["type"], "heading");
    }
}
