//! Whole-store table dump.

use colored::Colorize;
use theia_store::LocalStore;

use crate::error::ConfigError;

/// Prints every key/value pair in the store as a two-column table.
///
/// Both columns are byte-escaped so control bytes and binary noise stay
/// printable; local storage holds more than configuration documents.
pub fn print_table(store: &mut LocalStore) -> Result<(), ConfigError> {
    println!("{}", format!("{:<40} | {:<40}", "Key", "Value").bold());
    println!("{}", "=".repeat(85));
    for (key, value) in store.entries()? {
        println!(
            "{:<40} | {:<40}",
            key.to_string(),
            value.escape_ascii().to_string()
        );
    }
    Ok(())
}
