//! Error taxonomy for configuration operations.

use theia_store::StoreError;
use thiserror::Error;

/// Failures raised while reading or updating configuration documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Propagated store fault.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A property value does not have the expected options/values shape.
    #[error("property '{property}' has unexpected shape: {reason}")]
    Decode {
        /// Property whose value failed to decode.
        property: String,
        /// Parser message.
        reason: String,
    },

    /// The requested property/option/value is absent from the document.
    #[error("no value '{value}' under option '{option}' in property '{property}'")]
    TargetNotFound {
        /// Property that was searched.
        property: String,
        /// Option group that was searched.
        option: String,
        /// Value name that was not found.
        value: String,
    },

    /// The write-side splice could not re-locate an entry the read side
    /// found. This signals an inconsistent document; nothing was written.
    #[error("{level} '{name}' not written")]
    Splice {
        /// Document level at which the splice failed.
        level: &'static str,
        /// Name of the entry that could not be re-located.
        name: String,
    },

    /// The sketch filter does not compile to a path pattern.
    #[error("invalid sketch filter '{filter}': {reason}")]
    Filter {
        /// The filter as given on the command line.
        filter: String,
        /// Compiler message.
        reason: String,
    },
}

impl ConfigError {
    /// Whether this failure must abort a run over multiple resolved keys.
    ///
    /// Decode and missing-target failures are reported per key and the run
    /// continues; splice inconsistencies and store-level open faults end
    /// the run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConfigError::Splice { .. }
                | ConfigError::Filter { .. }
                | ConfigError::Store(StoreError::Path { .. })
                | ConfigError::Store(StoreError::Open { .. })
        )
    }
}
