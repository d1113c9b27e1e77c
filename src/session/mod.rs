use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Per-user UI flags, isolated behind a seam so call sites never touch the
/// backing storage directly.
pub trait FlagStore: Send + Sync {
    fn read(&self, user_id: &Uuid) -> HashMap<String, Value>;

    /// Replaces the user's flag map wholesale.
    fn write(&self, user_id: &Uuid, flags: HashMap<String, Value>);
}

/// In-memory store; the only cross-request state in the process.
#[derive(Default)]
pub struct MemoryFlags {
    inner: Mutex<HashMap<Uuid, HashMap<String, Value>>>,
}

impl MemoryFlags {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlags {
    fn read(&self, user_id: &Uuid) -> HashMap<String, Value> {
        self.inner
            .lock()
            .map(|map| map.get(user_id).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn write(&self, user_id: &Uuid, flags: HashMap<String, Value>) {
        if let Ok(mut map) = self.inner.lock() {
            map.insert(*user_id, flags);
        }
    }
}
