//! Parse listing lines into typed icon records.
//!
//! A listing line holds a display name followed by one icon file name
//! (a source entry) or two icon file names (a launcher entry), separated by
//! tabs.

use std::fmt;
use std::str::FromStr;

use crate::PipelineError;

/// Classification of a [`Record`] by the number of icons it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A single icon shown for an input source.
    Source,
    /// A focused/normal icon pair shown in the launcher.
    Launcher,
}

/// One parsed listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub primary_icon: String,
    /// Empty for [`Kind::Source`] records.
    pub secondary_icon: String,
    pub kind: Kind,
}

impl Record {
    /// Build a source record carrying a single icon.
    ///
    /// # Panics
    ///
    /// In debug builds, if `name` or `icon` is empty. Parsed records never
    /// are; use [`parse_record`] for untrusted input.
    #[must_use]
    pub fn source(name: impl Into<String>, icon: impl Into<String>) -> Self {
        let (name, icon) = (name.into(), icon.into());
        debug_assert!(!name.is_empty(), "record name must not be empty");
        debug_assert!(!icon.is_empty(), "source icon must not be empty");
        Self {
            name,
            primary_icon: icon,
            secondary_icon: String::new(),
            kind: Kind::Source,
        }
    }

    /// Build a launcher record carrying a primary and secondary icon.
    ///
    /// The secondary icon may be empty.
    ///
    /// # Panics
    ///
    /// In debug builds, if `name` or `primary` is empty.
    #[must_use]
    pub fn launcher(
        name: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        let (name, primary) = (name.into(), primary.into());
        debug_assert!(!name.is_empty(), "record name must not be empty");
        debug_assert!(!primary.is_empty(), "launcher primary icon must not be empty");
        Self {
            name,
            primary_icon: primary,
            secondary_icon: secondary.into(),
            kind: Kind::Launcher,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.name, self.primary_icon, self.secondary_icon
        )
    }
}

impl FromStr for Record {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}

/// Characters treated as trailing whitespace on each field.
fn is_trailing_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Split `line` on tabs and strip trailing whitespace from every field.
///
/// A terminating tab does not open an extra empty field.
fn tokenize(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split('\t').collect();
    if fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
        .into_iter()
        .map(|f| f.trim_end_matches(is_trailing_space))
        .collect()
}

/// Parse a listing line into a [`Record`].
///
/// Two fields yield a [`Kind::Source`] record and three fields a
/// [`Kind::Launcher`] record.
///
/// # Examples
///
/// ```
/// use iconmap::record::{Kind, parse_record};
///
/// let record = parse_record("Roku\tsource_icon_roku.png").expect("valid line");
/// assert_eq!(record.name, "Roku");
/// assert_eq!(record.primary_icon, "source_icon_roku.png");
/// assert_eq!(record.secondary_icon, "");
/// assert_eq!(record.kind, Kind::Source);
/// ```
///
/// # Errors
///
/// Returns [`PipelineError::MalformedRecord`] when the line does not hold
/// two or three fields, or when the name or first icon is empty.
pub fn parse_record(line: &str) -> Result<Record, PipelineError> {
    let fields = tokenize(line);
    let (name, primary, secondary) = match fields.as_slice() {
        [name, icon] => (*name, *icon, None),
        [name, primary, secondary] => (*name, *primary, Some(*secondary)),
        fields => {
            return Err(PipelineError::malformed(
                line,
                format!("expected 2 or 3 tab-separated fields, found {}", fields.len()),
            ));
        }
    };
    if name.is_empty() {
        return Err(PipelineError::malformed(line, "empty name"));
    }
    if primary.is_empty() {
        return Err(PipelineError::malformed(line, "empty icon"));
    }
    Ok(secondary.map_or_else(
        || Record::source(name, primary),
        |secondary| Record::launcher(name, primary, secondary),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_source_line() {
        let record = parse_record("Roku\tsource_icon_roku.png").expect("parse");
        assert_eq!(record, Record::source("Roku", "source_icon_roku.png"));
    }

    #[test]
    fn parses_launcher_line() {
        let record =
            parse_record("Roku\tlauncher_f_roku.png\tlauncher_n_roku.png").expect("parse");
        assert_eq!(record.kind, Kind::Launcher);
        assert_eq!(record.primary_icon, "launcher_f_roku.png");
        assert_eq!(record.secondary_icon, "launcher_n_roku.png");
    }

    #[rstest]
    #[case("XBox One \tsource_icon_xboxone.png\r", "XBox One", "source_icon_xboxone.png")]
    #[case("Game\tsource_icon_game.png \x0B\x0C", "Game", "source_icon_game.png")]
    #[case("Game\tsource_icon_game.png\t", "Game", "source_icon_game.png")]
    fn strips_trailing_whitespace(
        #[case] line: &str,
        #[case] name: &str,
        #[case] icon: &str,
    ) {
        let record = parse_record(line).expect("parse");
        assert_eq!(record, Record::source(name, icon));
    }

    #[test]
    fn keeps_leading_whitespace() {
        let record = parse_record(" Roku\tx.png").expect("parse");
        assert_eq!(record.name, " Roku");
    }

    #[rstest]
    #[case("")]
    #[case("Roku")]
    #[case("Roku\ta.png\tb.png\tc.png")]
    #[case("\tsource_icon_roku.png")]
    #[case("Roku\t  ")]
    fn rejects_malformed_lines(#[case] line: &str) {
        let err = parse_record(line).expect_err("malformed");
        assert!(
            matches!(err, PipelineError::MalformedRecord { line: ref l, .. } if l == line),
            "{err:?}"
        );
    }

    #[test]
    fn blank_secondary_icon_still_marks_launcher() {
        let record = parse_record("Roku\tf.png\t ").expect("parse");
        assert_eq!(record, Record::launcher("Roku", "f.png", ""));
    }

    #[test]
    fn display_matches_listing_form() {
        let record = Record::launcher("Roku", "f.png", "n.png");
        assert_eq!(record.to_string(), "Roku\tf.png\tn.png");
        let parsed: Record = record.to_string().parse().expect("parse");
        assert_eq!(parsed, record);
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[case::source_name(|| Record::source("", "roku.png"))]
    #[case::source_icon(|| Record::source("Roku", ""))]
    #[case::launcher_name(|| Record::launcher("", "f.png", "n.png"))]
    #[case::launcher_primary(|| Record::launcher("Roku", "", "n.png"))]
    #[should_panic(expected = "must not be empty")]
    fn constructors_reject_empty_fields(#[case] build: fn() -> Record) {
        let _ = build();
    }
}
