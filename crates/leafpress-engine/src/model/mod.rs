pub mod block;
pub mod chapter;

pub use block::{Block, CalloutKind, HeadingLevel};
pub use chapter::ChapterDocument;
