use std::{fs, io, path::Path};

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Source of parsed JSON documents (manifests and changelogs)
pub trait DocumentStore {
    /// Loads and parses the document at `path`. A missing document is
    /// `Error::NotFound`, one that doesn't parse is `Error::Json`.
    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T>;
}

/// Reads documents from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl DocumentStore for FsStore {
    fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        debug!("Loading document: {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        serde_json::from_str(&contents).map_err(|e| Error::Json(path.to_path_buf(), e))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{collections::HashMap, path::PathBuf};

    use super::*;
    use crate::changelog::ChangelogDocument;

    /// In-memory store keyed by path
    #[derive(Default)]
    pub(crate) struct MemStore(pub HashMap<PathBuf, String>);

    impl MemStore {
        pub(crate) fn with<P: Into<PathBuf>>(mut self, path: P, json: &str) -> Self {
            self.0.insert(path.into(), json.to_owned());
            self
        }
    }

    impl DocumentStore for MemStore {
        fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
            let json = self
                .0
                .get(path)
                .ok_or_else(|| Error::NotFound(path.to_path_buf()))?;
            serde_json::from_str(json).map_err(|e| Error::Json(path.to_path_buf(), e))
        }
    }

    #[test]
    fn fs_store_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.json");
        fs::write(&path, r#"{"name":"pkg","entries":[]}"#).unwrap();

        let doc: ChangelogDocument = FsStore.load(&path).unwrap();
        assert_eq!(doc.name, "pkg");
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn fs_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let res: Result<ChangelogDocument> = FsStore.load(&dir.path().join("nope.json"));
        assert!(matches!(res, Err(Error::NotFound(_))));
    }

    #[test]
    fn fs_store_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.json");
        fs::write(&path, "{ not json").unwrap();

        let res: Result<ChangelogDocument> = FsStore.load(&path);
        assert!(matches!(res, Err(Error::Json(..))));
    }

    #[test]
    fn document_without_name_is_rejected() {
        let store = MemStore::default().with("c.json", r#"{"entries":[]}"#);
        let res: Result<ChangelogDocument> = store.load(Path::new("c.json"));
        assert!(matches!(res, Err(Error::Json(..))));
    }
}
