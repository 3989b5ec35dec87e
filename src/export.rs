//! Vocabulary export for downstream model code.
//!
//! Writes the ordered vocabulary of a [`TextData`](crate::TextData) so that a
//! generator can map predicted indices back to characters. Stored as JSON:
//! the data identifier plus the symbols in index order.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::data::Vocabulary;
use crate::error::TextDataResult;

/// Serializable vocabulary file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyFile {
    /// Identifier of the corpus the vocabulary was built from.
    pub id: String,
    /// Symbols in index order.
    pub chars: Vec<char>,
}

impl VocabularyFile {
    #[must_use]
    pub fn new(id: &str, vocab: &Vocabulary) -> Self {
        Self {
            id: id.to_string(),
            chars: vocab.chars().to_vec(),
        }
    }

    /// Rebuild the vocabulary. Index order is preserved because the symbols
    /// are already unique.
    #[must_use]
    pub fn to_vocabulary(&self) -> Vocabulary {
        Vocabulary::from_text(&self.chars.iter().collect::<String>())
    }
}

/// Render the vocabulary as a single-line array literal, e.g. `["a","\n","\""]`.
///
/// Quotes, backslashes, and control characters are escaped.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn vocabulary_literal(vocab: &Vocabulary) -> TextDataResult<String> {
    Ok(serde_json::to_string(vocab.chars())?)
}

/// Save a vocabulary to a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or the data cannot be serialized.
pub fn save_vocabulary(path: &Path, id: &str, vocab: &Vocabulary) -> TextDataResult<()> {
    let data = VocabularyFile::new(id, vocab);
    let json = serde_json::to_string_pretty(&data)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json)?;
    info!(path = %path.display(), id, size = vocab.size(), "saved vocabulary");
    Ok(())
}

/// Load a vocabulary file written by [`save_vocabulary`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_vocabulary(path: &Path) -> TextDataResult<VocabularyFile> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_escapes_special_chars() {
        let vocab = Vocabulary::from_text("a\n\"\\\t");
        let literal = vocabulary_literal(&vocab).unwrap();
        assert_eq!(literal, r#"["a","\n","\"","\\","\t"]"#);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab").join("tiny.json");
        let vocab = Vocabulary::from_text("hello, world\n");

        save_vocabulary(&path, "tiny", &vocab).unwrap();
        let loaded = load_vocabulary(&path).unwrap();

        assert_eq!(loaded.id, "tiny");
        assert_eq!(loaded.chars, vocab.chars());
        assert_eq!(loaded.to_vocabulary().chars(), vocab.chars());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_vocabulary(&path).is_err());
    }
}
