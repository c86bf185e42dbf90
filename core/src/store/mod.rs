// core/src/store/mod.rs

//! Keyed JSON persistence.
//!
//! Every collection lives under one key as a JSON array and is always read and
//! written whole. The first read of an absent collection writes its seed.

mod backend;
mod file;
mod record;

pub use backend::{MemoryBackend, StorageBackend};
pub use file::FileBackend;
pub use record::Record;

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::error::{HubError, HubResult};

pub const ITEMS_KEY: &str = "hub_items";
pub const ORDERS_KEY: &str = "hub_orders";
/// Reserved for loans and the community feed, which are kept in memory only.
pub const LOANS_KEY: &str = "hub_loans";
pub const POSTS_KEY: &str = "hub_posts";
pub const SESSION_KEY: &str = "currentUser";
pub const USER_PREFIX: &str = "user_";

/// Key of the credential record for `email`.
pub fn user_key(email: &str) -> String {
  format!("{USER_PREFIX}{email}")
}

/// Cloneable handle over a shared backend. Each operation holds the backend
/// lock for its whole read-modify-write.
#[derive(Debug, Clone)]
pub struct Store {
  backend: Arc<Mutex<Box<dyn StorageBackend>>>,
}

impl Store {
  pub fn new(backend: impl StorageBackend + 'static) -> Self {
    Self {
      backend: Arc::new(Mutex::new(Box::new(backend))),
    }
  }

  pub fn in_memory() -> Self {
    Self::new(MemoryBackend::new())
  }

  pub fn open_dir(data_dir: impl Into<PathBuf>) -> HubResult<Self> {
    Ok(Self::new(FileBackend::new(data_dir)?))
  }

  fn load_locked<T: Record>(backend: &mut dyn StorageBackend) -> HubResult<Vec<T>> {
    match backend.read(T::COLLECTION)? {
      Some(raw) => serde_json::from_str(&raw).map_err(|e| HubError::serialization(T::COLLECTION, e)),
      None => {
        let seed = T::seed();
        debug!(collection = T::COLLECTION, records = seed.len(), "Seeding collection.");
        Self::save_locked(backend, &seed)?;
        Ok(seed)
      }
    }
  }

  fn save_locked<T: Record>(backend: &mut dyn StorageBackend, records: &[T]) -> HubResult<()> {
    let raw = serde_json::to_string(records).map_err(|e| HubError::serialization(T::COLLECTION, e))?;
    backend.write(T::COLLECTION, raw)
  }

  /// Reads the whole collection, seeding it on first access.
  #[instrument(name = "Store::all", skip(self), fields(collection = T::COLLECTION), err(Display))]
  pub fn all<T: Record>(&self) -> HubResult<Vec<T>> {
    let mut backend = self.backend.lock();
    Self::load_locked(backend.as_mut())
  }

  pub fn find<T: Record>(&self, key: &str) -> HubResult<Option<T>> {
    Ok(self.all::<T>()?.into_iter().find(|r| r.key() == key))
  }

  /// Replaces the first record with the same key, or appends.
  #[instrument(name = "Store::upsert", skip_all, fields(collection = T::COLLECTION, key = record.key()), err(Display))]
  pub fn upsert<T: Record>(&self, record: &T) -> HubResult<()> {
    self.update::<T, _>(|records| {
      match records.iter_mut().find(|r| r.key() == record.key()) {
        Some(existing) => *existing = record.clone(),
        None => records.push(record.clone()),
      }
      Ok(())
    })
  }

  /// Removes every record with `key`. Returns how many were removed.
  #[instrument(name = "Store::delete", skip(self), fields(collection = T::COLLECTION), err(Display))]
  pub fn delete<T: Record>(&self, key: &str) -> HubResult<usize> {
    self.update::<T, _>(|records| {
      let before = records.len();
      records.retain(|r| r.key() != key);
      Ok(before - records.len())
    })
  }

  /// Runs `f` over the loaded collection and writes it back if `f` succeeds.
  pub fn update<T: Record, R>(&self, f: impl FnOnce(&mut Vec<T>) -> HubResult<R>) -> HubResult<R> {
    let mut backend = self.backend.lock();
    let mut records = Self::load_locked::<T>(backend.as_mut())?;
    let out = f(&mut records)?;
    Self::save_locked(backend.as_mut(), &records)?;
    trace!(collection = T::COLLECTION, records = records.len(), "Collection written.");
    Ok(out)
  }

  pub fn get_json<V: DeserializeOwned>(&self, key: &str) -> HubResult<Option<V>> {
    let raw = self.backend.lock().read(key)?;
    raw
      .map(|raw| serde_json::from_str(&raw).map_err(|e| HubError::serialization(key, e)))
      .transpose()
  }

  pub fn put_json<V: Serialize + ?Sized>(&self, key: &str, value: &V) -> HubResult<()> {
    let raw = serde_json::to_string(value).map_err(|e| HubError::serialization(key, e))?;
    self.backend.lock().write(key, raw)
  }

  /// Writes `value` under `key` only if the key is absent. Returns whether it was written.
  pub fn put_json_if_absent<V: Serialize + ?Sized>(&self, key: &str, value: &V) -> HubResult<bool> {
    let raw = serde_json::to_string(value).map_err(|e| HubError::serialization(key, e))?;
    let mut backend = self.backend.lock();
    if backend.read(key)?.is_some() {
      return Ok(false);
    }
    backend.write(key, raw)?;
    Ok(true)
  }

  pub fn remove_key(&self, key: &str) -> HubResult<bool> {
    Ok(self.backend.lock().remove(key)?.is_some())
  }

  pub fn keys(&self) -> HubResult<Vec<String>> {
    self.backend.lock().keys()
  }
}
