//! Map bare icon file names to their location on disk.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::PipelineError;
use crate::record::Record;

/// Lookup from bare file name to resolved path.
///
/// The table is never mutated once built, so a shared reference can serve
/// any number of resolving stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    paths: HashMap<String, String>,
}

impl PathTable {
    /// Look up the resolved path for `file_name`.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.paths.get(file_name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Return a copy of `record` with each icon replaced by its resolved path.
    ///
    /// Icons missing from the table are left as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconmap::path_table::PathTable;
    /// use iconmap::record::Record;
    ///
    /// let table: PathTable = [("roku.png", "icons/roku.png")].into_iter().collect();
    /// let resolved = table.resolve(Record::source("Roku", "roku.png"));
    /// assert_eq!(resolved.primary_icon, "icons/roku.png");
    /// ```
    #[must_use]
    pub fn resolve(&self, record: Record) -> Record {
        let substitute = |icon: String| self.get(&icon).map(str::to_owned).unwrap_or(icon);
        Record {
            primary_icon: substitute(record.primary_icon),
            secondary_icon: substitute(record.secondary_icon),
            ..record
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Scan `dir` (one level, not recursive) and map each entry's file name to
/// `dir/file_name`.
///
/// The directory is rendered as given (minus any trailing `/`), so relative
/// directories produce relative paths. Entries whose names are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns [`PipelineError::ResourceUnavailable`] if the directory cannot be
/// listed or its path is not valid UTF-8.
pub async fn build_path_table(dir: impl AsRef<Path>) -> Result<PathTable, PipelineError> {
    let dir = dir.as_ref();
    let unavailable = |source| PipelineError::ResourceUnavailable {
        path: dir.to_path_buf(),
        source,
    };
    let prefix = dir
        .to_str()
        .ok_or_else(|| {
            unavailable(io::Error::new(
                io::ErrorKind::InvalidData,
                "directory path is not valid UTF-8",
            ))
        })?
        .trim_end_matches('/');
    let mut entries = tokio::fs::read_dir(dir).await.map_err(unavailable)?;
    let mut paths = HashMap::new();
    while let Some(entry) = entries.next_entry().await.map_err(unavailable)? {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            warn!("skipping non UTF-8 file name {file_name:?} in {}", dir.display());
            continue;
        };
        paths.insert(name.to_owned(), format!("{prefix}/{name}"));
    }
    debug!("indexed {} files in {}", paths.len(), dir.display());
    Ok(PathTable { paths })
}
