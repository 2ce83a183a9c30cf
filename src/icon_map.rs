//! Fold icon records into a lookup keyed by display name.
//!
//! Each [`Icon`] carries one source icon and a pair of launcher icons. A
//! [`Kind::Source`] record only ever touches the source icon and a
//! [`Kind::Launcher`] record only the launcher pair, so the two listings can
//! be merged in any interleaving.

use std::collections::{BTreeMap, btree_map};

use futures::future;
use futures::stream::{Stream, TryStreamExt};
use serde::Serialize;

use crate::PipelineError;
use crate::record::{Kind, Record};

/// Merged icon set for one display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub name: String,
    pub source_icon: String,
    pub launcher_primary_icon: String,
    pub launcher_secondary_icon: String,
}

/// Returned for names with no entry.
static INVALID_ICON: Icon = Icon {
    name: String::new(),
    source_icon: String::new(),
    launcher_primary_icon: String::new(),
    launcher_secondary_icon: String::new(),
};

impl Icon {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Whether this entry was produced by at least one record.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    fn absorb(&mut self, record: &Record) {
        match record.kind {
            Kind::Source => self.source_icon.clone_from(&record.primary_icon),
            Kind::Launcher => {
                self.launcher_primary_icon.clone_from(&record.primary_icon);
                self.launcher_secondary_icon
                    .clone_from(&record.secondary_icon);
            }
        }
    }
}

impl From<&Record> for Icon {
    fn from(record: &Record) -> Self {
        let mut icon = Self::named(&record.name);
        icon.absorb(record);
        icon
    }
}

/// Icons keyed by display name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconMap {
    icons: BTreeMap<String, Icon>,
}

impl IconMap {
    /// Fold one record into the map.
    ///
    /// A new name gets an entry seeded from `record`. An existing entry has
    /// only the fields for `record.kind` overwritten.
    pub fn update(&mut self, record: &Record) {
        self.icons
            .entry(record.name.clone())
            .and_modify(|icon| icon.absorb(record))
            .or_insert_with(|| Icon::from(record));
    }

    /// Look up the icon for `name`.
    ///
    /// Unknown names yield an entry whose fields are all empty; see
    /// [`Icon::is_valid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use iconmap::{IconMap, record::Record};
    ///
    /// let mut map = IconMap::default();
    /// map.update(&Record::source("Game", "source_icon_game.png"));
    /// assert_eq!(map.get("Game").source_icon, "source_icon_game.png");
    /// assert!(!map.get("Roku").is_valid());
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> &Icon {
        self.icons.get(name).unwrap_or(&INVALID_ICON)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Iterate over icons in ascending name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, Icon> {
        self.icons.values()
    }
}

impl<'a> IntoIterator for &'a IconMap {
    type Item = &'a Icon;
    type IntoIter = btree_map::Values<'a, String, Icon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Extend<&'a Record> for IconMap {
    fn extend<I: IntoIterator<Item = &'a Record>>(&mut self, records: I) {
        for record in records {
            self.update(record);
        }
    }
}

impl<'a> FromIterator<&'a Record> for IconMap {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(records: I) -> Self {
        let mut map = Self::default();
        map.extend(records);
        map
    }
}

/// Fold a record stream into an [`IconMap`].
///
/// The map is returned only once `records` ends.
///
/// # Errors
///
/// Returns the first error yielded by `records`; entries folded before the
/// failure are discarded.
pub async fn reduce<S>(records: S) -> Result<IconMap, PipelineError>
where
    S: Stream<Item = Result<Record, PipelineError>>,
{
    records
        .try_fold(IconMap::default(), |mut map, record| {
            map.update(&record);
            future::ready(Ok(map))
        })
        .await
}
