//! Shared JSON blob load/save helpers.

use crate::store::{KeyValueStore, StoreResult};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Loads a JSON array stored under `key`.
///
/// Missing keys and unparsable values both read as an empty collection;
/// the latter is logged so corruption stays visible without breaking reads.
pub(crate) fn load_collection<S, T>(store: &S, key: &str) -> StoreResult<Vec<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            warn!(
                "event=collection_load module=repo status=corrupt key={} bytes={} error={}",
                key,
                raw.len(),
                err
            );
            Ok(Vec::new())
        }
    }
}

/// Replaces the collection stored under `key`.
pub(crate) fn save_collection<S, T>(store: &S, key: &str, items: &[T]) -> StoreResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let encoded = serde_json::to_string(items)?;
    store.set(key, &encoded)
}
