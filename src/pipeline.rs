//! Assemble listing files into a finished [`IconMap`].
//!
//! Each [`Catalog`] becomes a record stream:
//! lines → header skip → parse → path resolution. The source and launcher
//! streams are then merged and folded.

use std::path::PathBuf;

use futures::future;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use log::info;

use crate::PipelineError;
use crate::icon_map::{IconMap, reduce};
use crate::line_source::{open_lines, skip_header};
use crate::merge::merge;
use crate::path_table::build_path_table;
use crate::record::{Record, parse_record};

/// Number of header lines at the top of every listing.
pub const DEFAULT_HEADER_LINES: usize = 1;

/// Boxed stream of parsed, path-resolved records.
pub type RecordStream = BoxStream<'static, Result<Record, PipelineError>>;

/// A listing file and the directory its icon file names live in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub listing: PathBuf,
    pub icon_dir: PathBuf,
}

impl Catalog {
    #[must_use]
    pub fn new(listing: impl Into<PathBuf>, icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            listing: listing.into(),
            icon_dir: icon_dir.into(),
        }
    }
}

/// Open `catalog` as a stream of records with icons resolved against its
/// icon directory.
///
/// The first `header_lines` lines of the listing are skipped.
///
/// # Errors
///
/// Returns [`PipelineError::ResourceUnavailable`] if the icon directory
/// cannot be listed. Failures reading or parsing the listing surface as
/// items of the returned stream.
pub async fn read_catalog(
    catalog: &Catalog,
    header_lines: usize,
) -> Result<RecordStream, PipelineError> {
    let table = build_path_table(&catalog.icon_dir).await?;
    let records = skip_header(open_lines(catalog.listing.clone()), header_lines)
        .and_then(|line| future::ready(parse_record(&line)))
        .map_ok(move |record| table.resolve(record));
    Ok(records.boxed())
}

/// Build the icon map for a source catalog and a launcher catalog.
///
/// # Errors
///
/// Fails with the first error from either catalog; no partial map is
/// returned.
pub async fn build_icon_map(
    source: &Catalog,
    launcher: &Catalog,
    header_lines: usize,
) -> Result<IconMap, PipelineError> {
    let sources = read_catalog(source, header_lines).await?;
    let launchers = read_catalog(launcher, header_lines).await?;
    let map = reduce(merge(sources, launchers)).await?;
    info!("built icon map with {} entries", map.len());
    Ok(map)
}
