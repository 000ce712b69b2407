//! Codec for the board/sketch configuration keyspace.
//!
//! Chromium prefixes every local-storage record key with the owning origin
//! and two control bytes; Theia then scopes its own entries with a `theia:`
//! tag. Board configuration documents live under
//! `.arduinoIDE-configOptions-<board>`, optionally preceded by the sketch
//! path URI that scopes the document to one open project:
//!
//! ```text
//! _file:// 0x00 0x01 theia:[<sketch-uri>:].arduinoIDE-configOptions-<board>
//! ```

use std::fmt;

/// Origin segment of every local-storage record key.
const ORIGIN: &[u8] = b"_file://";

/// Control bytes separating the origin from the script-visible key.
const META: &[u8] = &[0x00, 0x01];

/// Theia's key scope tag.
const SCOPE: &str = "theia:";

/// Marks a board configuration document; the board id follows directly.
const CONFIG_TAG: &str = ".arduinoIDE-configOptions-";

/// A raw key of the local-storage keyspace.
///
/// Keys are opaque byte strings to the store itself; this type is the only
/// place that interprets their layout. Every key built here parses back to
/// the same `(board, sketch)` identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKey(Vec<u8>);

impl StoreKey {
    /// Key of the board-global configuration document.
    pub fn for_board(board: &str) -> Self {
        let mut bytes = scope_prefix();
        bytes.extend_from_slice(CONFIG_TAG.as_bytes());
        bytes.extend_from_slice(board.as_bytes());
        Self(bytes)
    }

    /// Key of the document scoped to one sketch.
    ///
    /// `sketch` is the absolute filesystem URI of the sketch directory,
    /// e.g. `file:///home/user/Arduino/BlinkRGB`.
    pub fn for_sketch(board: &str, sketch: &str) -> Self {
        let mut bytes = scope_prefix();
        bytes.extend_from_slice(sketch.as_bytes());
        bytes.push(b':');
        bytes.extend_from_slice(CONFIG_TAG.as_bytes());
        bytes.extend_from_slice(board.as_bytes());
        Self(bytes)
    }

    /// Wraps raw key bytes read back from the store.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this key belongs to `board`'s configuration namespace.
    pub fn matches_board(&self, board: &str) -> bool {
        match self.scoped_text() {
            Some(scoped) => scoped.ends_with(&format!("{CONFIG_TAG}{board}")),
            None => false,
        }
    }

    /// Extracts the sketch path embedded between the scope tag and the
    /// board suffix.
    ///
    /// Returns `None` when the key does not match the template; the
    /// board-global key carries no sketch segment and yields `None` too.
    pub fn sketch_path(&self, board: &str) -> Option<String> {
        let scoped = self.scoped_text()?;
        let marker = format!(":{CONFIG_TAG}{board}");
        let end = scoped.find(&marker)?;
        if end + marker.len() != scoped.len() {
            return None;
        }
        Some(scoped[..end].trim_matches(':').to_string())
    }

    /// UTF-8 view of the part after the fixed `_file://\x00\x01theia:`
    /// prefix, or `None` for keys outside the Theia scope.
    fn scoped_text(&self) -> Option<&str> {
        let rest = self.0.strip_prefix(scope_prefix().as_slice())?;
        std::str::from_utf8(rest).ok()
    }
}

fn scope_prefix() -> Vec<u8> {
    let mut bytes = Vec::with_capacity(ORIGIN.len() + META.len() + SCOPE.len());
    bytes.extend_from_slice(ORIGIN);
    bytes.extend_from_slice(META);
    bytes.extend_from_slice(SCOPE.as_bytes());
    bytes
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}
