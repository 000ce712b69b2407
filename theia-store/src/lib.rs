//! # theia-store
//!
//! A Rust library for reading and writing the `Local Storage` LevelDB that
//! Eclipse Theia based IDEs (such as Arduino IDE 2) use to persist frontend
//! state.
//!
//! Records in this store follow Chromium's local-storage layout: keys carry
//! an origin prefix and two control bytes in front of the script-visible
//! key, and values carry a one-byte encoding marker in front of the payload.
//! Theia additionally scopes its own entries with a `theia:` tag. This crate
//! owns both byte formats and exposes a thin open/get/put/scan handle over
//! one store directory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use theia_store::{LocalStore, StoreKey};
//!
//! let mut store =
//!     LocalStore::open("/home/user/.config/arduino-ide/Local Storage/leveldb").unwrap();
//!
//! let key = StoreKey::for_board("esp32:esp32:esp32");
//! if let Some(doc) = store.get(&key).unwrap() {
//!     println!("{}", serde_json::to_string_pretty(&doc).unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`keys`] - Codec for the board/sketch configuration keyspace
//! - [`store`] - Opened store handle and the value envelope codec
//! - [`error`] - Error types and result definitions

#[macro_use]
extern crate log;

/// Error types and result definitions for local-storage access.
pub mod error;

/// Codec for the board/sketch configuration keyspace.
pub mod keys;

/// Opened store handle and the value envelope codec.
pub mod store;

pub use error::{Result, StoreError};
pub use keys::StoreKey;
pub use store::{ConfigDocument, LocalStore};
