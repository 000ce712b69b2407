//! Resolution of board-global vs sketch-scoped documents.
//!
//! A board has one global configuration document plus one sketch-scoped
//! document per sketch the IDE opened. Without a filter the global
//! document is addressed; sketch documents are only touched when the
//! filter names them by their final path segment.

use regex::Regex;
use theia_store::{LocalStore, StoreKey};

use crate::error::ConfigError;

/// Sketch paths that have a configuration document for `board`.
pub fn sketches_for_board(
    store: &mut LocalStore,
    board: &str,
) -> Result<Vec<String>, ConfigError> {
    let mut sketches = Vec::new();
    for key in store.keys()? {
        if !key.matches_board(board) {
            continue;
        }
        if let Some(path) = key.sketch_path(board) {
            sketches.push(path);
        }
    }
    debug!("found {} sketch document(s) for {board}", sketches.len());
    Ok(sketches)
}

/// Resolves the store keys one invocation operates on.
///
/// Without a filter this is always the single board-global key, even when
/// sketch-scoped documents exist. With a filter, exactly the sketch keys
/// whose path ends in `/<filter>` are returned; the result may be empty.
pub fn resolve_keys(
    store: &mut LocalStore,
    board: &str,
    filter: Option<&str>,
) -> Result<Vec<StoreKey>, ConfigError> {
    let Some(filter) = filter else {
        return Ok(vec![StoreKey::for_board(board)]);
    };

    let pattern =
        Regex::new(&format!("^file:///.*?/{}$", regex::escape(filter))).map_err(|e| {
            ConfigError::Filter {
                filter: filter.to_string(),
                reason: e.to_string(),
            }
        })?;

    Ok(sketches_for_board(store, board)?
        .into_iter()
        .filter(|sketch| pattern.is_match(sketch))
        .map(|sketch| StoreKey::for_sketch(board, &sketch))
        .collect())
}
