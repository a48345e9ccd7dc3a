//! File-based DocumentStore implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wargame_core::{DocumentError, DocumentId, DocumentStore};

/// File-based implementation of DocumentStore.
///
/// # File Format
///
/// Each document is stored as `<sha256-hex>.txt` under the base directory,
/// containing the UTF-8 text verbatim.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    base_dir: PathBuf,
}

impl FileDocumentStore {
    /// Create a new file-based document store, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(storage_error)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn document_path(&self, id: &DocumentId) -> PathBuf {
        self.base_dir.join(format!("{}.txt", id))
    }
}

impl DocumentStore for FileDocumentStore {
    fn put(&mut self, text: &str) -> Result<DocumentId, DocumentError> {
        let id = DocumentId::for_text(text);
        let path = self.document_path(&id);
        if path.is_file() {
            return Ok(id);
        }

        let temp_path = path.with_extension("txt.tmp");
        if let Err(err) = fs::write(&temp_path, text).and_then(|()| fs::rename(&temp_path, &path)) {
            // Best effort: the temp file may not exist if the write itself failed.
            let _ = fs::remove_file(&temp_path);
            return Err(storage_error(err));
        }

        tracing::debug!("Stored document {} at {}", id, path.display());

        Ok(id)
    }

    fn get(&self, id: &DocumentId) -> Result<String, DocumentError> {
        match fs::read_to_string(self.document_path(id)) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(DocumentError::NotFound(id.clone()))
            }
            Err(err) => Err(storage_error(err)),
        }
    }

    fn contains(&self, id: &DocumentId) -> bool {
        self.document_path(id).is_file()
    }
}

fn storage_error(err: io::Error) -> DocumentError {
    DocumentError::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut store = FileDocumentStore::new(dir.path().join("docs")).unwrap();
            store.put("Blue may not cross the river.").unwrap()
        };

        let store = FileDocumentStore::new(dir.path().join("docs")).unwrap();
        assert!(store.contains(&id));
        assert_eq!(store.get(&id).unwrap(), "Blue may not cross the river.");
        assert!(dir.path().join("docs").join(format!("{id}.txt")).exists());
    }

    #[test]
    fn missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path()).unwrap();
        let id = DocumentId::for_text("absent");
        assert_eq!(store.get(&id), Err(DocumentError::NotFound(id)));
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileDocumentStore::new(dir.path()).unwrap();
        let id = DocumentId::for_text("Red holds the ridge.");
        let blocked = dir.path().join(format!("{id}.txt"));
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("occupant"), "x").unwrap();

        assert!(matches!(
            store.put("Red holds the ridge."),
            Err(DocumentError::Storage(_))
        ));
        assert!(!store.contains(&id));
        assert!(!dir.path().join(format!("{id}.txt.tmp")).exists());
    }

    #[test]
    fn deserialized_ids_cannot_escape_the_store() {
        assert!(serde_json::from_str::<DocumentId>("\"../outside\"").is_err());

        let id = DocumentId::for_text("rules");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<DocumentId>(&json).unwrap(), id);
    }
}
