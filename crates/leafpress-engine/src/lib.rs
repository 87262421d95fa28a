pub mod io;
pub mod model;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{ChapterIoError, load_chapter};
pub use model::{Block, CalloutKind, ChapterDocument, HeadingLevel};
pub use parsing::{ValidationError, ValidationReason, decode_entities, encode_entities, parse};
pub use render::{BlockId, RenderBlock, Snapshot, render};
