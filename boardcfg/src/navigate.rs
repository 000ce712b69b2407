//! Read projections at the four document depths.
//!
//! Each projection is strictly narrower than the previous one and is pure:
//! absence at any level short-circuits to an empty result instead of
//! failing. The same projections feed both the read-mode output and the
//! read side of a selection update.

use crate::document::{ConfigDocument, ConfigOption, ConfigValue};
use crate::error::ConfigError;

/// The full document, unchanged.
///
/// Kept for symmetry with the narrower projections; read mode at board
/// depth prints exactly this.
pub fn document(doc: &ConfigDocument) -> &ConfigDocument {
    doc
}

/// The option list stored under `property`, or empty if the property is
/// absent.
///
/// # Errors
///
/// [`ConfigError::Decode`] when the property is present but its value does
/// not have the expected option-list shape.
pub fn property_options(
    doc: &ConfigDocument,
    property: &str,
) -> Result<Vec<ConfigOption>, ConfigError> {
    let Some(raw) = doc.get(property) else {
        return Ok(Vec::new());
    };
    serde_json::from_value(raw.clone()).map_err(|e| ConfigError::Decode {
        property: property.to_string(),
        reason: e.to_string(),
    })
}

/// The options under `property` whose `option` field equals `option`.
///
/// Normally 0 or 1 entries. When the source data carries duplicate option
/// names, all matches are returned; nothing is deduped here.
pub fn option_group(
    doc: &ConfigDocument,
    property: &str,
    option: &str,
) -> Result<Vec<ConfigOption>, ConfigError> {
    Ok(property_options(doc, property)?
        .into_iter()
        .filter(|entry| entry.option == option)
        .collect())
}

/// The values named `value` inside matching option groups, flattened
/// across all of them.
pub fn matching_values(
    doc: &ConfigDocument,
    property: &str,
    option: &str,
    value: &str,
) -> Result<Vec<ConfigValue>, ConfigError> {
    Ok(option_group(doc, property, option)?
        .into_iter()
        .flat_map(|entry| entry.values)
        .filter(|entry| entry.value == value)
        .collect())
}
