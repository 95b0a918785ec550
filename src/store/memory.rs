//! In-memory `ListStore` used by the test suites.
//!
//! Mirrors the list semantics of the real store and records every command it
//! receives, so tests can assert which writes were issued and which indices were
//! read. `disconnect()` makes every later command fail like a dropped connection.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::client::ListStore;
use super::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Len(String),
    AppendAll(String, usize),
    Delete(String),
    ReadAt(String, usize),
    Ping,
}

#[derive(Default)]
pub struct MemoryStore {
    lists: Mutex<HashMap<String, Vec<String>>>,
    commands: Mutex<Vec<Command>>,
    disconnected: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `values` under `key`.
    pub fn with_list(key: &str, values: &[&str]) -> Self {
        let store = Self::new();
        store.lists.lock().unwrap().insert(
            key.to_string(),
            values.iter().map(|v| v.to_string()).collect(),
        );
        store
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.lists
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    pub fn read_indices(&self) -> Vec<usize> {
        self.commands()
            .into_iter()
            .filter_map(|cmd| match cmd {
                Command::ReadAt(_, index) => Some(index),
                _ => None,
            })
            .collect()
    }

    pub fn disconnect(&self) {
        self.disconnected.store(true, Ordering::SeqCst);
    }

    fn record(&self, cmd: Command) -> Result<(), StoreError> {
        if self.disconnected.load(Ordering::SeqCst) {
            return Err(StoreError::Disconnected);
        }
        self.commands.lock().unwrap().push(cmd);
        Ok(())
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn len(&self, key: &str) -> Result<usize, StoreError> {
        self.record(Command::Len(key.to_string()))?;
        Ok(self.lists.lock().unwrap().get(key).map_or(0, Vec::len))
    }

    async fn append_all(&self, key: &str, values: &[&str]) -> Result<usize, StoreError> {
        self.record(Command::AppendAll(key.to_string(), values.len()))?;
        let mut lists = self.lists.lock().unwrap();
        let list = lists.entry(key.to_string()).or_default();
        list.extend(values.iter().map(|v| v.to_string()));
        Ok(list.len())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.record(Command::Delete(key.to_string()))?;
        self.lists.lock().unwrap().remove(key);
        Ok(())
    }

    async fn read_at(&self, key: &str, index: usize) -> Result<String, StoreError> {
        self.record(Command::ReadAt(key.to_string(), index))?;
        self.lists
            .lock()
            .unwrap()
            .get(key)
            .and_then(|list| list.get(index).cloned())
            .ok_or_else(|| StoreError::IndexOutOfRange {
                key: key.to_string(),
                index,
            })
    }

    async fn ping(&self) -> Result<String, StoreError> {
        self.record(Command::Ping)?;
        Ok("PONG".to_string())
    }
}
