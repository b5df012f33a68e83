use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::models::GameEntry;
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
    images_dir: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            images_dir: images_dir.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Writes an empty catalog if the file does not exist yet.
    pub fn initialize(&self) -> Result<(), CatalogError> {
        if self.path.as_os_str().is_empty() {
            return Err(CatalogError::Io("catalog path must not be empty".to_string()));
        }

        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|error| {
                    CatalogError::Io(format!("failed to create catalog directory: {error}"))
                })?;
            }
        }

        self.save(&[])
    }

    pub fn ensure_images_dir(&self) -> Result<(), CatalogError> {
        fs::create_dir_all(&self.images_dir).map_err(|error| {
            CatalogError::Io(format!(
                "failed to create images directory {:?}: {error}",
                self.images_dir
            ))
        })
    }

    pub fn load(&self) -> Result<Vec<GameEntry>, CatalogError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|error| {
            CatalogError::Io(format!("failed to read catalog {:?}: {error}", self.path))
        })?;

        serde_json::from_str(&raw)
            .map_err(|error| CatalogError::Parse(format!("{:?}: {error}", self.path)))
    }

    pub fn save(&self, entries: &[GameEntry]) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|error| CatalogError::Parse(format!("failed to serialize catalog: {error}")))?;

        fs::write(&self.path, json).map_err(|error| {
            CatalogError::Io(format!("failed to write catalog {:?}: {error}", self.path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CatalogStore {
        CatalogStore::new(dir.path().join("games.json"), dir.path().join("images"))
    }

    #[test]
    fn load_missing_file_returns_empty_catalog() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = store_in(&dir);

        let entries = store.load().expect("missing file should not fail");
        assert!(entries.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_empty_catalog_writes_valid_array() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = store_in(&dir);

        store.save(&[]).expect("save should succeed");

        let raw = fs::read_to_string(store.path()).expect("catalog should exist");
        assert_eq!(raw, "[]");
        assert!(store.load().expect("load should succeed").is_empty());
    }

    #[test]
    fn initialize_creates_file_once() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = CatalogStore::new(
            dir.path().join("nested").join("games.json"),
            dir.path().join("images"),
        );

        store.initialize().expect("initialize should succeed");
        assert_eq!(
            fs::read_to_string(store.path()).expect("catalog should exist"),
            "[]"
        );

        store
            .save(&[GameEntry::new("Doom", "/games/doom")])
            .expect("save should succeed");
        store.initialize().expect("second initialize should succeed");
        assert_eq!(store.load().expect("load should succeed").len(), 1);
    }

    #[test]
    fn save_of_loaded_catalog_is_byte_stable() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = store_in(&dir);
        let original = r#"[
  {
    "name": "Doom",
    "desc": "Rip and tear",
    "cat": "Shooter",
    "image": "doom.png",
    "path": "/games/doom/doom.exe"
  },
  {
    "path": "/games/unnamed.sh"
  },
  {
    "name": "Ōkami",
    "path": "/games/okami",
    "args": "-windowed"
  }
]"#;
        fs::write(store.path(), original).expect("catalog should be written");

        let loaded = store.load().expect("load should succeed");
        store.save(&loaded).expect("save should succeed");
        let first = fs::read_to_string(store.path()).expect("catalog should exist");
        assert_eq!(first, original);

        store
            .save(&store.load().expect("reload should succeed"))
            .expect("second save should succeed");
        let second = fs::read_to_string(store.path()).expect("catalog should exist");
        assert_eq!(first, second);
    }

    #[test]
    fn hand_written_key_order_survives_a_rewrite() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = store_in(&dir);
        let original = r#"[
  {
    "path": "/games/quake/quake.sh",
    "name": "Quake",
    "zeta": "last alphabetically",
    "alpha": [
      1,
      2
    ]
  }
]"#;
        fs::write(store.path(), original).expect("catalog should be written");

        store
            .save(&store.load().expect("load should succeed"))
            .expect("save should succeed");

        let after = fs::read_to_string(store.path()).expect("catalog should exist");
        assert_eq!(after, original);
    }

    #[test]
    fn load_preserves_array_order() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = store_in(&dir);
        store
            .save(&[
                GameEntry::new("Zork", "/games/zork"),
                GameEntry::new("Abuse", "/games/abuse"),
            ])
            .expect("save should succeed");

        let names: Vec<String> = store
            .load()
            .expect("load should succeed")
            .iter()
            .map(|entry| entry.display_name().to_string())
            .collect();
        assert_eq!(names, vec!["Zork", "Abuse"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = store_in(&dir);
        fs::write(store.path(), "[{\"name\": ").expect("catalog should be written");

        assert!(matches!(store.load(), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn ensure_images_dir_is_idempotent() {
        let dir = TempDir::new().expect("tempdir should be created");
        let store = store_in(&dir);

        store.ensure_images_dir().expect("first call should succeed");
        store.ensure_images_dir().expect("second call should succeed");
        assert!(store.images_dir().is_dir());
    }
}
