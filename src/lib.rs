//! Build icon lookup tables from tab-separated listing files.
//!
//! Listings are read as lazy record streams, merged, and folded into an
//! [`IconMap`] keyed by display name. See [`pipeline::build_icon_map`] for
//! the assembled flow.

pub mod cli_args;
pub mod error;
pub mod icon_map;
pub mod line_source;
pub mod merge;
pub mod path_table;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod test_utils;

pub use error::PipelineError;
pub use icon_map::{Icon, IconMap, reduce};
pub use pipeline::{Catalog, build_icon_map};
pub use record::{Kind, Record};
