//! The selection splice (write path).
//!
//! A selection update is a bottom-up copy-on-write patch across four
//! levels: value, option, property, document. Every level is re-read
//! through its own projection and its existence re-validated instead of
//! trusted from the level below, because each level was obtained by a
//! separate, independently filtered read. A failure at any stage leaves
//! the store untouched for that key.

use theia_store::{LocalStore, StoreKey};

use crate::document::ConfigDocument;
use crate::error::ConfigError;
use crate::navigate;

/// Marks `value` selected under `property`/`option` in the document stored
/// at `key`, clears its sibling selections, and persists the result.
///
/// # Errors
///
/// [`ConfigError::TargetNotFound`] when the document (or the requested
/// value inside it) does not exist; [`ConfigError::Splice`] when the write
/// side cannot re-locate an entry the read side found. In both cases the
/// stored document is left exactly as it was.
pub fn select_value(
    store: &mut LocalStore,
    key: &StoreKey,
    property: &str,
    option: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let doc = store.get(key)?.unwrap_or_default();
    let updated = spliced_document(&doc, property, option, value)?;
    store.put(key, &updated)?;
    info!("selected {option} '{value}' under {key}");
    Ok(())
}

/// Computes the updated document without touching the store.
pub fn spliced_document(
    doc: &ConfigDocument,
    property: &str,
    option: &str,
    value: &str,
) -> Result<ConfigDocument, ConfigError> {
    // Stage 1: locate the target through the read projection.
    let mut found = navigate::matching_values(doc, property, option, value)?;
    if found.is_empty() {
        return Err(ConfigError::TargetNotFound {
            property: property.to_string(),
            option: option.to_string(),
            value: value.to_string(),
        });
    }

    // Stage 2: the detached copy becomes the selection, extra fields and all.
    let mut target = found.swap_remove(0);
    target.selected = true;

    // Stage 3: clear every value in the owning group, then re-apply the
    // copy onto the entry whose name still matches. With duplicate option
    // names only the first group is written.
    let mut groups = navigate::option_group(doc, property, option)?;
    if groups.is_empty() {
        return Err(ConfigError::Splice {
            level: "option",
            name: option.to_string(),
        });
    }
    let mut group = groups.swap_remove(0);
    for entry in &mut group.values {
        entry.selected = false;
    }
    match group.values.iter_mut().find(|entry| entry.value == value) {
        Some(slot) => *slot = target,
        None => {
            return Err(ConfigError::Splice {
                level: "value",
                name: value.to_string(),
            });
        }
    }

    // Stage 4: splice the group back into the property, then the property
    // back into the document.
    let mut options = navigate::property_options(doc, property)?;
    match options.iter_mut().find(|entry| entry.option == option) {
        Some(owner) => owner.values = group.values,
        None => {
            return Err(ConfigError::Splice {
                level: "option",
                name: option.to_string(),
            });
        }
    }

    let serialized = serde_json::to_value(&options).map_err(|e| ConfigError::Decode {
        property: property.to_string(),
        reason: e.to_string(),
    })?;
    let mut updated = doc.clone();
    match updated.get_mut(property) {
        Some(slot) => *slot = serialized,
        None => {
            return Err(ConfigError::Splice {
                level: "property",
                name: property.to_string(),
            });
        }
    }
    Ok(updated)
}
