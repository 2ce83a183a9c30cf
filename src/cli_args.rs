//! Command-line argument structures.
//!
//! `BuildArgs` doubles as the configuration schema: `ortho_config` layers
//! the config file and environment underneath whatever flags were given.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::PipelineError;
use crate::pipeline::{Catalog, DEFAULT_HEADER_LINES};
use crate::render::OutputFormat;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(
    name = "iconmap",
    about = "Build an icon lookup table from source and launcher listings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge a source and a launcher listing and print the icon map
    Build(BuildArgs),
}

/// Parameters accepted by the `build` sub-command.
///
/// Every field may also come from the `[cmds.build]` section of the
/// configuration file or from the environment.
#[derive(Parser, Deserialize, Serialize, Debug, OrthoConfig, Clone, Default)]
#[command(name = "build")]
#[ortho_config(prefix = "ICONMAP")]
pub struct BuildArgs {
    /// Listing file of source icons
    #[arg(long, value_name = "FILE")]
    pub source_listing: Option<PathBuf>,
    /// Directory holding the source icon files
    #[arg(long, value_name = "DIR")]
    pub source_icons: Option<PathBuf>,
    /// Listing file of launcher icons
    #[arg(long, value_name = "FILE")]
    pub launcher_listing: Option<PathBuf>,
    /// Directory holding the launcher icon files
    #[arg(long, value_name = "DIR")]
    pub launcher_icons: Option<PathBuf>,
    /// Header lines to skip at the top of each listing
    #[arg(long, value_name = "N")]
    pub header_lines: Option<usize>,
    /// Output encoding
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Fully resolved inputs for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub source: Catalog,
    pub launcher: Catalog,
    pub header_lines: usize,
    pub format: OutputFormat,
}

impl BuildArgs {
    /// Check that every required path is present.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::MissingArgument`] naming the first absent
    /// listing or icon directory.
    pub fn into_plan(self) -> Result<BuildPlan, PipelineError> {
        let required =
            |value: Option<PathBuf>, name| value.ok_or(PipelineError::MissingArgument(name));
        Ok(BuildPlan {
            source: Catalog::new(
                required(self.source_listing, "source-listing")?,
                required(self.source_icons, "source-icons")?,
            ),
            launcher: Catalog::new(
                required(self.launcher_listing, "launcher-listing")?,
                required(self.launcher_icons, "launcher-icons")?,
            ),
            header_lines: self.header_lines.unwrap_or(DEFAULT_HEADER_LINES),
            format: self.format.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> BuildArgs {
        BuildArgs {
            source_listing: Some("Source/Icon/logolist.info".into()),
            source_icons: Some("Source/Icon".into()),
            launcher_listing: Some("Launcher/Icon/logolist.info".into()),
            launcher_icons: Some("Launcher/Icon/2K".into()),
            ..BuildArgs::default()
        }
    }

    #[test]
    fn plan_applies_defaults() {
        let plan = complete().into_plan().expect("plan");
        assert_eq!(plan.header_lines, DEFAULT_HEADER_LINES);
        assert_eq!(plan.format, OutputFormat::Tsv);
        assert_eq!(plan.launcher.icon_dir, PathBuf::from("Launcher/Icon/2K"));
    }

    #[test]
    fn plan_reports_missing_directory() {
        let args = BuildArgs {
            launcher_icons: None,
            ..complete()
        };
        let err = args.into_plan().expect_err("missing launcher icons");
        assert!(matches!(err, PipelineError::MissingArgument("launcher-icons")));
    }

    #[test]
    fn parses_build_flags() {
        let cli = Cli::try_parse_from([
            "iconmap",
            "build",
            "--source-listing",
            "s.info",
            "--header-lines",
            "0",
            "--format",
            "json",
        ])
        .expect("parse");
        let Commands::Build(args) = cli.command;
        assert_eq!(args.source_listing, Some(PathBuf::from("s.info")));
        assert_eq!(args.header_lines, Some(0));
        assert_eq!(args.format, Some(OutputFormat::Json));
    }
}
