//! Render an [`IconMap`] for output.
//!
//! Writers are generic over [`Write`] so tests can render into a buffer.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::icon_map::{Icon, IconMap};

/// Output encodings supported by `iconmap build`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab-separated line per icon.
    #[default]
    Tsv,
    /// A pretty-printed JSON array.
    Json,
}

/// Write one `name\tsource\tlauncher_primary\tlauncher_secondary` line per
/// icon, in name order.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
///
/// # Examples
///
/// ```
/// use iconmap::{IconMap, record::Record, render::write_tsv};
///
/// let mut map = IconMap::default();
/// map.update(&Record::source("Game", "game.png"));
/// let mut out = Vec::new();
/// write_tsv(&mut out, &map).expect("write");
/// assert_eq!(String::from_utf8(out).expect("utf8"), "Game\tgame.png\t\t\n");
/// ```
pub fn write_tsv<W: Write>(mut out: W, map: &IconMap) -> std::io::Result<()> {
    for icon in map {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            icon.name, icon.source_icon, icon.launcher_primary_icon, icon.launcher_secondary_icon
        )?;
    }
    Ok(())
}

/// Write the icons as a JSON array, in name order.
///
/// # Errors
///
/// Returns an error if serialisation or writing to `out` fails.
pub fn write_json<W: Write>(mut out: W, map: &IconMap) -> std::io::Result<()> {
    let icons: Vec<&Icon> = map.iter().collect();
    serde_json::to_writer_pretty(&mut out, &icons)?;
    writeln!(out)
}

/// Render `map` in the requested `format`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_map<W: Write>(out: W, map: &IconMap, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Tsv => write_tsv(out, map),
        OutputFormat::Json => write_json(out, map),
    }
}
