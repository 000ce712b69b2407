//! Command line entry point.
//!
//! Errors bubble up as values to the single handler in [`main`], which
//! prints one line and turns any failure into exit code 1.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::bail;
use boardcfg::error::ConfigError;
use boardcfg::{navigate, sketch, table, update};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::{debug, warn};
use serde::Serialize;
use theia_store::{LocalStore, StoreKey};

const EXAMPLES: &str = "\
Examples:
  Linux:
    boardcfg ~/.config/arduino-ide/'Local Storage'/leveldb write esp32:esp32:esp32 configOptions PartitionScheme custom
  Windows:
    boardcfg \"%UserProfile%\\AppData\\Roaming\\arduino-ide\\Local Storage\\leveldb\" write esp32:esp32:esp32 configOptions PartitionScheme custom
  macOS:
    boardcfg ~/Library/'Application Support'/arduino-ide/'Local Storage'/leveldb write esp32:esp32:esp32 configOptions PartitionScheme custom

Close the IDE first; it holds an exclusive lock on the store while running.";

/// Inspect and edit the board configuration documents of Arduino IDE 2.
#[derive(Parser)]
#[command(name = "boardcfg", version, after_help = EXAMPLES)]
struct Cli {
    /// Path to the IDE's `Local Storage/leveldb` directory.
    store: PathBuf,

    /// Access mode.
    #[arg(value_enum, ignore_case = true)]
    mode: Mode,

    /// Board identifier (`vendor:arch:board`); omit to dump the whole store.
    board: Option<String>,

    /// Property inside the document, e.g. `configOptions`.
    property: Option<String>,

    /// Option group inside the property, e.g. `PartitionScheme`.
    option: Option<String>,

    /// Value inside the option group, e.g. `custom`.
    value: Option<String>,

    /// Sketch directory name narrowing which documents are touched.
    sketch: Option<String>,
}

/// Read or write access to the resolved documents.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Print the store, a document, or one of its projections.
    #[value(alias = "r")]
    Read,
    /// Mark one value of one option group as selected.
    #[value(alias = "w")]
    Write,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut store = LocalStore::open(&cli.store)?;

    let Some(board) = cli.board.as_deref() else {
        table::print_table(&mut store)?;
        return Ok(());
    };

    let write_args = match cli.mode {
        Mode::Read => None,
        Mode::Write => match (&cli.property, &cli.option, &cli.value) {
            (Some(property), Some(option), Some(value)) => {
                Some((property.as_str(), option.as_str(), value.as_str()))
            }
            _ => bail!("write mode needs board, property, option and value"),
        },
    };

    let keys = sketch::resolve_keys(&mut store, board, cli.sketch.as_deref())?;
    if keys.is_empty() {
        bail!(
            "no sketch document for {board} matches '{}'",
            cli.sketch.as_deref().unwrap_or_default()
        );
    }
    debug!("resolved {} key(s) for {board}", keys.len());

    let mut failed = 0usize;
    for key in &keys {
        let outcome = match write_args {
            Some((property, option, value)) => write_key(&mut store, key, property, option, value),
            None => read_key(&mut store, key, &cli),
        };
        if let Err(err) = outcome {
            if err.is_fatal() {
                return Err(err.into());
            }
            eprintln!("{} {err}", "skipped:".yellow().bold());
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} document(s) failed", keys.len());
    }
    Ok(())
}

/// Prints the document under `key` at the depth the arguments select.
///
/// An absent document prints as its empty projection (`{}` or `[]`), the
/// same output the IDE-written store would give for a fresh board.
fn read_key(store: &mut LocalStore, key: &StoreKey, cli: &Cli) -> Result<(), ConfigError> {
    debug!("reading {key}");
    let doc = match store.get(key)? {
        Some(doc) => doc,
        None => {
            warn!("no document under {key}");
            Default::default()
        }
    };

    let output = match (&cli.property, &cli.option, &cli.value) {
        (None, _, _) => render(navigate::document(&doc))?,
        (Some(property), None, _) => render(&navigate::property_options(&doc, property)?)?,
        (Some(property), Some(option), None) => {
            render(&navigate::option_group(&doc, property, option)?)?
        }
        (Some(property), Some(option), Some(value)) => {
            render(&navigate::matching_values(&doc, property, option, value)?)?
        }
    };
    println!("{output}");
    Ok(())
}

fn write_key(
    store: &mut LocalStore,
    key: &StoreKey,
    property: &str,
    option: &str,
    value: &str,
) -> Result<(), ConfigError> {
    update::select_value(store, key, property, option, value)?;
    println!("{} {option} '{value}'", "selected".green().bold());
    Ok(())
}

fn render<T: Serialize>(value: &T) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(value).map_err(|e| ConfigError::Decode {
        property: "document".to_string(),
        reason: e.to_string(),
    })
}
