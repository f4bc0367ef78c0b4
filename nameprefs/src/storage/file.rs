use namecore::{
    error::StorageError,
    storage::Storage,
};
use parking_lot::Mutex;
use std::{
    collections::BTreeMap,
    fs,
    io,
    path::{
        Path,
        PathBuf,
    },
};

/// Persists every key into a single JSON object file.
///
/// A missing file reads as empty; the file is created on the first write.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // serializes the read-modify-write of the whole file
    lock: Mutex<()>,
}

type Items = BTreeMap<String, String>;

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, key: &str) -> Result<Items, StorageError> {
        let read_error = |reason: String| StorageError::Read {
            key: key.to_string(),
            reason,
        };
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Items::new()),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| read_error(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Items::new()),
            Err(e) => Err(read_error(format!("{}: {e}", self.path.display()))),
        }
    }

    fn modify(&self, key: &str, f: impl FnOnce(&mut Items)) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut items = match self.load(key) {
            Ok(items) => items,
            Err(StorageError::Read { reason, .. }) => {
                log::warn!("discarding unreadable preference file: {reason}");
                Items::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut items);
        let write_error = |reason: String| StorageError::Write {
            key: key.to_string(),
            reason,
        };
        if let Some(parent) = self.path.parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)
                .map_err(|e| write_error(e.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(&items)
            .map_err(|e| write_error(e.to_string()))?;
        fs::write(&self.path, contents)
            .map_err(|e| write_error(format!("{}: {e}", self.path.display())))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self.load(key)?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.modify(key, |items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.modify(key, |items| {
            items.remove(key);
        })
    }
}
