//! This module provides a local file cache for the task list

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::{CACHE_FOLDER, STORAGE_KEY};
use crate::error::PersistenceError;
use crate::record::StoredList;
use crate::task::Task;
use crate::traits::TaskStorage;


/// A task storage that keeps the task list as a JSON file
#[derive(Debug, Clone, PartialEq)]
pub struct Cache {
    backing_file: PathBuf,
}

impl Cache {
    /// Get the default folder of the cache file
    pub fn default_folder() -> PathBuf {
        CACHE_FOLDER.clone()
    }

    /// A cache stored in `folder`, under the configured storage key
    pub fn new(folder: &Path) -> Self {
        Self::with_key(folder, &STORAGE_KEY)
    }

    /// A cache stored in `folder`, under a custom storage key.
    /// The key is sanitized before it is used as a file name
    pub fn with_key(folder: &Path, key: &str) -> Self {
        let file_name = format!("{}.json", sanitize_filename::sanitize(key));
        Self {
            backing_file: folder.join(file_name),
        }
    }

    /// Get the path to the cache file
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    /// Path of the `n`-th backup file: `<key>.json.bak`, then `<key>.json.bak.1`...
    pub fn backup_file(&self, n: u32) -> PathBuf {
        let mut name = self.backing_file.clone().into_os_string();
        name.push(".bak");
        if n > 0 {
            name.push(format!(".{}", n));
        }
        PathBuf::from(name)
    }
}

impl TaskStorage for Cache {
    fn load(&mut self) -> Result<StoredList, PersistenceError> {
        let path = &self.backing_file;
        let file = match File::open(path) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No cache file at {:?} yet, starting with an empty task list", path);
                return Ok(StoredList::default());
            },
            Err(err) => return Err(err.into()),
            Ok(file) => file,
        };

        StoredList::from_reader(BufReader::new(file))
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError> {
        let path = &self.backing_file;
        if let Some(folder) = path.parent() {
            std::fs::create_dir_all(folder)?;
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, tasks)?;
        writer.flush()?;
        log::trace!("Saved {} tasks to {:?}", tasks.len(), path);
        Ok(())
    }

    fn set_aside(&mut self) -> Result<(), PersistenceError> {
        if !self.backing_file.exists() {
            return Ok(());
        }

        let mut n = 0;
        while self.backup_file(n).exists() {
            n += 1;
        }
        let backup = self.backup_file(n);
        std::fs::rename(&self.backing_file, &backup)?;
        log::warn!("The previous task list has been kept in {:?}", backup);
        Ok(())
    }
}
