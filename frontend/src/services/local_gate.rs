use shared::{GateError, KeyValueStore, KeyedGate};
use web_sys::{window, Storage};

/// The browser's localStorage as a `KeyValueStore`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GateError> {
        let storage = Self::storage().ok_or(GateError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| GateError::Write(format!("{:?}", e)))
    }
}

pub fn local_gate(key: &str) -> KeyedGate<LocalStorage> {
    KeyedGate::new(LocalStorage, key)
}
