// core/src/store/file.rs

//! Directory-backed storage: one `<encoded key>.json` file per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use tracing::debug;
use uuid::Uuid;

use super::StorageBackend;
use crate::error::{HubError, HubResult};

#[derive(Debug, Clone)]
pub struct FileBackend {
  data_dir: PathBuf,
}

impl FileBackend {
  const FILE_EXTENSION: &'static str = ".json";

  /// Opens (and creates if needed) the data directory.
  pub fn new(data_dir: impl Into<PathBuf>) -> HubResult<Self> {
    let data_dir = data_dir.into();
    fs::create_dir_all(&data_dir).map_err(|e| HubError::storage(data_dir.display().to_string(), e))?;
    debug!(data_dir = %data_dir.display(), "File backend ready.");
    Ok(Self { data_dir })
  }

  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  /// Percent-encodes every byte outside `[A-Za-z0-9_.-]`, so keys such as
  /// `user_a@b.com` become safe file names.
  pub fn encode_for_filename(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
      match byte {
        b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => out.push(byte as char),
        _ => out.push_str(&format!("%{byte:02X}")),
      }
    }
    out
  }

  /// Reverses `encode_for_filename`. Returns `None` for malformed input.
  pub fn decode_from_filename(encoded: &str) -> Option<String> {
    let raw = encoded.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
      if raw[i] == b'%' {
        let hex = encoded.get(i + 1..i + 3)?;
        bytes.push(u8::from_str_radix(hex, 16).ok()?);
        i += 3;
      } else {
        bytes.push(raw[i]);
        i += 1;
      }
    }
    String::from_utf8(bytes).ok()
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self
      .data_dir
      .join(format!("{}{}", Self::encode_for_filename(key), Self::FILE_EXTENSION))
  }
}

impl StorageBackend for FileBackend {
  fn read(&self, key: &str) -> HubResult<Option<String>> {
    match fs::read_to_string(self.path_for(key)) {
      Ok(data) => Ok(Some(data)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(HubError::storage(key, e)),
    }
  }

  fn write(&mut self, key: &str, value: String) -> HubResult<()> {
    // Readers only ever see a complete file: write a sibling temp file, then rename.
    // The temp name is unique per writer, so concurrent writers end last-write-wins.
    let target = self.path_for(key);
    let tmp = target.with_extension(format!("json.{}.{}.tmp", process::id(), Uuid::new_v4().simple()));
    fs::write(&tmp, value).map_err(|e| HubError::storage(key, e))?;
    fs::rename(&tmp, &target).map_err(|e| HubError::storage(key, e))
  }

  fn remove(&mut self, key: &str) -> HubResult<Option<String>> {
    let path = self.path_for(key);
    match fs::read_to_string(&path) {
      Ok(data) => {
        fs::remove_file(&path).map_err(|e| HubError::storage(key, e))?;
        Ok(Some(data))
      }
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(HubError::storage(key, e)),
    }
  }

  fn keys(&self) -> HubResult<Vec<String>> {
    let entries = fs::read_dir(&self.data_dir).map_err(|e| HubError::storage(self.data_dir.display().to_string(), e))?;
    let mut keys: Vec<String> = entries
      .flatten()
      .filter_map(|entry| {
        let file_name = entry.file_name();
        let stem = file_name.to_str()?.strip_suffix(Self::FILE_EXTENSION)?.to_string();
        Self::decode_from_filename(&stem)
      })
      .collect();
    keys.sort_unstable();
    Ok(keys)
  }
}
