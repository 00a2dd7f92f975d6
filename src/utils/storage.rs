use serde::{de::DeserializeOwned, Serialize};

use crate::platform::{KeyValueStore, StorageError};

pub fn save_to_storage<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)
}

/// `None` si la clave no existe o el JSON guardado no es válido
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ Valor inválido en storage para '{}': {}", key, e);
            None
        }
    }
}
