//! An in-memory key-value storage, that behaves like the local storage of a web browser
//!
//! It is mostly useful for tests, since it can be told to fail (see [`MockBehaviour`]) or to run out of space.

use std::collections::HashMap;

use crate::config::STORAGE_KEY;
use crate::error::PersistenceError;
use crate::mock_behaviour::MockBehaviour;
use crate::record::StoredList;
use crate::task::Task;
use crate::traits::TaskStorage;

/// A task storage that keeps JSON blobs in memory
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    key: String,
    blobs: HashMap<String, String>,
    /// Maximum size of a blob, in bytes
    quota: Option<usize>,
    behaviour: MockBehaviour,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    /// An empty storage, that uses the configured storage key
    pub fn new() -> Self {
        Self::with_key(&STORAGE_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            blobs: HashMap::new(),
            quota: None,
            behaviour: MockBehaviour::new(),
        }
    }

    /// Saving a blob larger than `bytes` will fail with [`PersistenceError::QuotaExceeded`]
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn with_behaviour(mut self, behaviour: MockBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    pub fn behaviour_mut(&mut self) -> &mut MockBehaviour {
        &mut self.behaviour
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The JSON blob currently stored under our key, if any
    pub fn raw(&self) -> Option<&str> {
        self.blobs.get(&self.key).map(|s| s.as_str())
    }

    /// The blob that has been set aside last, if any
    pub fn raw_backup(&self) -> Option<&str> {
        self.raw_backups().last().copied()
    }

    /// Every blob that has been set aside, oldest first
    pub fn raw_backups(&self) -> Vec<&str> {
        (0..).map(|n| self.backup_key(n))
            .map_while(|key| self.blobs.get(&key))
            .map(|s| s.as_str())
            .collect()
    }

    fn backup_key(&self, n: u32) -> String {
        match n {
            0 => format!("{}.bak", self.key),
            n => format!("{}.bak.{}", self.key, n),
        }
    }

    /// Store a raw blob under our key, as if an earlier run had written it
    pub fn set_raw<S: Into<String>>(&mut self, blob: S) {
        self.blobs.insert(self.key.clone(), blob.into());
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&mut self) -> Result<StoredList, PersistenceError> {
        self.behaviour.can_load()?;

        match self.blobs.get(&self.key) {
            None => Ok(StoredList::default()),
            Some(blob) => StoredList::from_json_str(blob),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError> {
        self.behaviour.can_save()?;

        let blob = serde_json::to_string(tasks)?;
        if let Some(quota) = self.quota {
            if blob.len() > quota {
                return Err(PersistenceError::QuotaExceeded{ needed: blob.len(), quota });
            }
        }
        self.blobs.insert(self.key.clone(), blob);
        Ok(())
    }

    fn set_aside(&mut self) -> Result<(), PersistenceError> {
        let blob = match self.blobs.remove(&self.key) {
            None => return Ok(()),
            Some(blob) => blob,
        };

        let backup_key = (0..).map(|n| self.backup_key(n))
            .find(|key| !self.blobs.contains_key(key))
            .unwrap_or_else(|| format!("{}.bak", self.key));
        log::warn!("The previous task list has been kept under {:?}", backup_key);
        self.blobs.insert(backup_key, blob);
        Ok(())
    }
}
