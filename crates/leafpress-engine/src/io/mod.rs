use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ChapterDocument;
use crate::parsing::{self, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ChapterIoError {
    #[error("chapter file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid chapter: {0}")]
    Invalid(#[from] ValidationError),
}

/// Read a page module from disk and parse it.
///
/// Build-step convenience only; the core itself never touches the
/// filesystem.
pub fn load_chapter(path: &Path) -> Result<ChapterDocument, ChapterIoError> {
    if !path.exists() {
        return Err(ChapterIoError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    Ok(parsing::parse(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_page(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_valid_page_module() {
        let dir = TempDir::new().unwrap();
        let path = write_page(
            &dir,
            "scope.page",
            "{chapter id=scope title=\"Scope\"}\n{h1} Scope\n",
        );

        let doc = load_chapter(&path).unwrap();
        assert_eq!(doc.id(), "scope");
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_chapter(&dir.path().join("missing.page"));
        assert!(matches!(result, Err(ChapterIoError::NotFound(_))));
    }

    #[test]
    fn invalid_chapter_surfaces_the_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_page(
            &dir,
            "broken.page",
            "{chapter id=x title=\"X\"}\n{code}\nnever closed\n",
        );

        let result = load_chapter(&path);
        match result {
            Err(ChapterIoError::Invalid(err)) => assert_eq!(err.block_index, 0),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
