use crate::{
    data::{err::InputError, input::TokenReader, types::Sequence},
    search::{Indexing, SearchPolicy},
};
use std::io::Read;

/// The default ceiling on a subject sequence read from input.
pub const DEFAULT_MAX_SUBJECT_LEN: usize = 1000;
/// The default ceiling on a motif read from input.
pub const DEFAULT_MAX_MOTIF_LEN: usize = 100;

/// Settings for a single motif scan.
///
/// ```
/// use motifscan::{config::ScanConfig, search::{Indexing, SearchPolicy}};
///
/// let config = ScanConfig {
///     policy: SearchPolicy::Unbounded,
///     indexing: Indexing::ZeroBased,
///     ..Default::default()
/// };
/// assert_eq!(config.max_subject_len, Some(1000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Length contract applied before searching.
    ///
    /// **Default**: [`SearchPolicy::strict_minimum`]
    pub policy: SearchPolicy,

    /// Numbering of reported positions.
    ///
    /// **Default**: [`Indexing::OneBased`]
    pub indexing: Indexing,

    /// Longest subject accepted from input, or [`None`] for no limit.
    ///
    /// **Default**: `Some(1000)`
    pub max_subject_len: Option<usize>,

    /// Longest motif accepted from input, or [`None`] for no limit.
    ///
    /// **Default**: `Some(100)`
    pub max_motif_len: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            policy:          SearchPolicy::strict_minimum(),
            indexing:        Indexing::OneBased,
            max_subject_len: Some(DEFAULT_MAX_SUBJECT_LEN),
            max_motif_len:   Some(DEFAULT_MAX_MOTIF_LEN),
        }
    }
}

impl ScanConfig {
    /// Reads the subject sequence, enforcing [`ScanConfig::max_subject_len`].
    ///
    /// # Errors
    ///
    /// See [`TokenReader::next_token`].
    pub fn read_subject<R: Read>(&self, reader: &mut TokenReader<R>) -> Result<Sequence, InputError> {
        reader.next_token("sequence", self.max_subject_len)
    }

    /// Reads the motif, enforcing [`ScanConfig::max_motif_len`].
    ///
    /// # Errors
    ///
    /// See [`TokenReader::next_token`].
    pub fn read_motif<R: Read>(&self, reader: &mut TokenReader<R>) -> Result<Sequence, InputError> {
        reader.next_token("motif", self.max_motif_len)
    }
}
