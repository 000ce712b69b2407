//! # boardcfg
//!
//! Edit the per-board configuration options that Arduino IDE 2 keeps in its
//! Theia local-storage database — most usefully the ESP32 partition scheme
//! selection, which the IDE otherwise only changes through its Tools menu.
//!
//! The IDE stores one JSON document per board (and optionally one per open
//! sketch) describing every configurable option group. `boardcfg` reads
//! those documents at four depths and can mark exactly one value of one
//! option group as selected, leaving everything else in the document as the
//! IDE wrote it.
//!
//! ## Modules
//!
//! - [`document`] - Typed view of the nested option/value levels
//! - [`error`] - Error taxonomy for configuration operations
//! - [`navigate`] - Read projections at the four document depths
//! - [`sketch`] - Resolution of board-global vs sketch-scoped documents
//! - [`table`] - Whole-store table dump
//! - [`update`] - The selection splice (write path)

#[macro_use]
extern crate log;

/// Typed view of the nested option/value levels.
pub mod document;

/// Error taxonomy for configuration operations.
pub mod error;

/// Read projections at the four document depths.
pub mod navigate;

/// Resolution of board-global vs sketch-scoped documents.
pub mod sketch;

/// Whole-store table dump.
pub mod table;

/// The selection splice (write path).
pub mod update;

pub use document::{ConfigDocument, ConfigOption, ConfigValue};
pub use error::ConfigError;
