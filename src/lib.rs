#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]

/// Composition statistics: GC content and net charge.
pub mod composition;
/// Scan settings shared by the command-line front end.
pub mod config;
/// Sequence types, input, and errors.
pub mod data;
/// Report writers for match positions and statistics.
pub mod report;
/// Motif search and open reading frame detection.
pub mod search;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::composition::{gc_count, gc_percent, net_charge};
    pub use crate::config::ScanConfig;
    pub use crate::data::err::{GetCode, InputError, OrFail, SearchError};
    pub use crate::data::input::TokenReader;
    pub use crate::data::types::{Sequence, SequenceView};
    pub use crate::search::{Indexing, MotifSearch, SearchPolicy, find_all, find_all_positions};
}
