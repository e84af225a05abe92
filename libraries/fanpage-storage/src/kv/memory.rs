use fanpage_core::{FanpageError, KeyValueStore, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Slots {
    values: HashMap<String, String>,
    read_only: bool,
    writes: usize,
}

/// In-memory key-value store
///
/// Clones share their contents, which lets a test keep a handle on the
/// store it handed to a `PostStore`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<Slots>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .slots
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Reject writes, like a full or disabled browser storage
    pub fn set_read_only(&self, read_only: bool) {
        self.slots.borrow_mut().read_only = read_only;
    }

    /// Raw value under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().values.get(key).cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.slots.borrow().writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.borrow_mut();
        if slots.read_only {
            return Err(FanpageError::storage("quota exceeded"));
        }
        slots.values.insert(key.to_string(), value.to_string());
        slots.writes += 1;
        Ok(())
    }
}
