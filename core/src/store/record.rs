// core/src/store/record.rs

use serde::de::DeserializeOwned;
use serde::Serialize;

/// An entity stored as one element of a named JSON-array collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
  /// Storage key of the whole collection, e.g. `hub_items`.
  const COLLECTION: &'static str;

  /// Value of the key field used by upsert and delete.
  fn key(&self) -> &str;

  /// Contents written the first time the collection is read.
  fn seed() -> Vec<Self> {
    Vec::new()
  }
}
