//! Typed view of the three nested levels inside a configuration document.
//!
//! Documents are created by the IDE; this tool only reshapes them. Fields
//! beyond the ones it understands (labels, tooltips, whatever future IDE
//! versions add) are captured verbatim and written back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use theia_store::ConfigDocument;

/// One configurable option group, e.g. `PartitionScheme`.
///
/// The `option` name is assumed unique within a property; the IDE does not
/// enforce this, and duplicates are handled as documented in [`crate::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Option name.
    pub option: String,
    /// Selectable values of this option.
    #[serde(default)]
    pub values: Vec<ConfigValue>,
    /// Fields this tool does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// One selectable value inside an option group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigValue {
    /// Value name, e.g. `custom`.
    pub value: String,
    /// Whether this value is the current selection.
    #[serde(default)]
    pub selected: bool,
    /// Fields this tool does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
