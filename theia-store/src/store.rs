//! Opened store handle and the value envelope codec.
//!
//! Stored values carry a one-byte encoding marker in front of the payload:
//! `0x01` for UTF-8, `0x00` for UTF-16. Theia writes configuration
//! documents as compact UTF-8 JSON, so reads strip a single leading marker
//! byte and parse the remainder as a JSON object; writes prepend the UTF-8
//! marker again. No brace scanning is involved, so a truncated or otherwise
//! malformed value surfaces as a decode error instead of being silently
//! sliced.

use std::path::{Path, PathBuf};

use rusty_leveldb::{DB, LdbIterator, Options};

use crate::error::{Result, StoreError};
use crate::keys::StoreKey;

/// Marker byte prefixed to UTF-8 payloads.
const UTF8_MARKER: u8 = 0x01;

/// Marker byte prefixed to UTF-16 payloads; tolerated on read.
const UTF16_MARKER: u8 = 0x00;

/// A configuration document: the JSON object stored under one key.
pub type ConfigDocument = serde_json::Map<String, serde_json::Value>;

/// An exclusively opened local-storage database.
///
/// The handle is passed explicitly to every operation and released when
/// dropped; no store state outlives an invocation.
pub struct LocalStore {
    path: PathBuf,
    db: DB,
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl LocalStore {
    /// Opens an existing store directory.
    ///
    /// The store is never created here; the IDE owns the directory and this
    /// tool only mutates documents inside it.
    ///
    /// # Errors
    ///
    /// [`StoreError::Path`] when the path is missing or not a directory,
    /// [`StoreError::Open`] when the engine refuses it (typically because
    /// the IDE is still running and holds the store lock).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(StoreError::Path {
                path: path.to_path_buf(),
            });
        }

        let mut opt = Options::default();
        opt.create_if_missing = false;
        let db = DB::open(path, opt).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("opened local storage at {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            db,
        })
    }

    /// The store directory this handle was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetches and decodes the document stored under `key`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Decode`] when bytes are present but do not parse as an
    /// enveloped JSON object. An absent key is `Ok(None)`, not an error.
    pub fn get(&mut self, key: &StoreKey) -> Result<Option<ConfigDocument>> {
        let Some(raw) = self.db.get(key.as_bytes()) else {
            return Ok(None);
        };
        decode_value(&raw)
            .map(Some)
            .map_err(|reason| StoreError::Decode {
                key: key.clone(),
                reason,
            })
    }

    /// Serializes `doc` and writes it back under `key`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Write`] when the engine rejects the write. In a run
    /// over several resolved keys this is fatal for the current key only.
    pub fn put(&mut self, key: &StoreKey, doc: &ConfigDocument) -> Result<()> {
        let raw = encode_value(doc).map_err(|reason| StoreError::Write {
            key: key.clone(),
            reason,
        })?;
        self.db
            .put(key.as_bytes(), &raw)
            .map_err(|e| StoreError::Write {
                key: key.clone(),
                reason: e.to_string(),
            })?;
        self.db.flush().map_err(|e| StoreError::Write {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        debug!("wrote {} bytes under {key}", raw.len());
        Ok(())
    }

    /// All keys currently in the store, in keyspace order.
    pub fn keys(&mut self) -> Result<Vec<StoreKey>> {
        Ok(self.entries()?.into_iter().map(|(key, _)| key).collect())
    }

    /// Raw key/value dump of the whole store.
    pub fn entries(&mut self) -> Result<Vec<(StoreKey, Vec<u8>)>> {
        let mut iter = self.db.new_iter().map_err(|e| StoreError::Open {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let mut entries = Vec::new();
        while let Some((key, value)) = iter.next() {
            entries.push((StoreKey::from_bytes(key), value));
        }
        Ok(entries)
    }
}

/// Strips the envelope marker and parses the JSON payload.
fn decode_value(raw: &[u8]) -> std::result::Result<ConfigDocument, String> {
    let body = match raw.first() {
        Some(&UTF8_MARKER) | Some(&UTF16_MARKER) => &raw[1..],
        _ => raw,
    };
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err("payload is not a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Serializes the document and prepends the envelope marker.
fn encode_value(doc: &ConfigDocument) -> std::result::Result<Vec<u8>, String> {
    let json = serde_json::to_vec(doc).map_err(|e| e.to_string())?;
    let mut raw = Vec::with_capacity(json.len() + 1);
    raw.push(UTF8_MARKER);
    raw.extend_from_slice(&json);
    Ok(raw)
}
