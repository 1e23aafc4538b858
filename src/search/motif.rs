use crate::data::err::SearchError;

/// The length contract a caller places on a motif search.
///
/// The contracts differ in which inputs they refuse; they are not interchangeable
/// and none of them is applied implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPolicy {
    /// Rejects subjects shorter than `min_subject_len` with
    /// [`SearchError::TooShort`]. A motif longer than the subject yields no
    /// matches.
    StrictMinimum { min_subject_len: usize },
    /// Rejects subjects shorter than `min_subject_len` with
    /// [`SearchError::TooShort`], then motifs whose length differs from
    /// `motif_len` with [`SearchError::LengthMismatch`].
    FixedMotifLength { min_subject_len: usize, motif_len: usize },
    /// Rejects only a motif longer than the subject, with
    /// [`SearchError::MotifLongerThanSubject`].
    Unbounded,
}

impl SearchPolicy {
    /// The minimum subject length used by the pentamer exercises.
    pub const DEFAULT_MIN_SUBJECT_LEN: usize = 5;

    /// [`SearchPolicy::StrictMinimum`] with a minimum subject length of 5.
    #[inline]
    #[must_use]
    pub const fn strict_minimum() -> Self {
        SearchPolicy::StrictMinimum {
            min_subject_len: Self::DEFAULT_MIN_SUBJECT_LEN,
        }
    }

    /// [`SearchPolicy::FixedMotifLength`] requiring a pentamer in a subject of
    /// at least 5.
    #[inline]
    #[must_use]
    pub const fn pentamer() -> Self {
        SearchPolicy::FixedMotifLength {
            min_subject_len: Self::DEFAULT_MIN_SUBJECT_LEN,
            motif_len:       5,
        }
    }

    /// Checks the subject and motif lengths against the policy.
    ///
    /// ## Errors
    ///
    /// Returns the [`SearchError`] corresponding to the first violated
    /// condition.
    #[inline]
    pub fn validate(self, subject_len: usize, motif_len: usize) -> Result<(), SearchError> {
        match self {
            SearchPolicy::StrictMinimum { min_subject_len } => check_min(subject_len, min_subject_len),
            SearchPolicy::FixedMotifLength {
                min_subject_len,
                motif_len: expected,
            } => {
                check_min(subject_len, min_subject_len)?;
                if motif_len == expected {
                    Ok(())
                } else {
                    Err(SearchError::LengthMismatch {
                        len: motif_len,
                        expected,
                    })
                }
            }
            SearchPolicy::Unbounded => {
                if motif_len > subject_len {
                    Err(SearchError::MotifLongerThanSubject {
                        motif_len,
                        subject_len,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[inline]
fn check_min(len: usize, min: usize) -> Result<(), SearchError> {
    if len < min {
        Err(SearchError::TooShort { len, min })
    } else {
        Ok(())
    }
}

/// How an offset is numbered when it leaves the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indexing {
    /// The first byte of the subject is offset 0.
    ZeroBased,
    /// The first byte of the subject is position 1.
    OneBased,
}

impl Indexing {
    /// Converts a zero-based offset into this numbering.
    #[inline]
    #[must_use]
    pub const fn position(self, offset: usize) -> usize {
        match self {
            Indexing::ZeroBased => offset,
            Indexing::OneBased => offset + 1,
        }
    }
}

/// Returns the zero-based offsets of every occurrence of `motif` in `subject`
/// in ascending order, including overlapping occurrences.
///
/// Comparison is exact and case-sensitive. An empty motif matches at every
/// offset from `0` to `subject.len()` inclusive. A motif longer than the
/// subject that passes validation yields an empty result.
///
/// ```
/// # use motifscan::search::{find_all, SearchPolicy};
/// assert_eq!(find_all(b"AAAA", b"AA", SearchPolicy::Unbounded), Ok(vec![0, 1, 2]));
/// assert_eq!(find_all(b"XXFLAREYY", b"FLARE", SearchPolicy::pentamer()), Ok(vec![2]));
/// ```
///
/// ## Errors
///
/// Returns a [`SearchError`] when `policy` rejects the input lengths. No
/// search is attempted in that case.
#[inline]
pub fn find_all(
    subject: impl AsRef<[u8]>, motif: impl AsRef<[u8]>, policy: SearchPolicy,
) -> Result<Vec<usize>, SearchError> {
    let (subject, motif) = (subject.as_ref(), motif.as_ref());
    policy.validate(subject.len(), motif.len())?;
    Ok(scan(subject, motif).collect())
}

/// Like [`find_all`] but numbers the offsets according to `indexing`.
///
/// ## Errors
///
/// Returns a [`SearchError`] when `policy` rejects the input lengths.
#[inline]
pub fn find_all_positions(
    subject: impl AsRef<[u8]>, motif: impl AsRef<[u8]>, policy: SearchPolicy, indexing: Indexing,
) -> Result<Vec<usize>, SearchError> {
    let (subject, motif) = (subject.as_ref(), motif.as_ref());
    policy.validate(subject.len(), motif.len())?;
    Ok(scan(subject, motif).map(|i| indexing.position(i)).collect())
}

/// Finds the `motif` in the `subject`, returning the first zero-based offset
/// or [`None`]. No length policy is applied: an empty motif matches at 0 and a
/// motif longer than the subject is not found.
#[inline]
#[must_use]
pub fn find_first(subject: &[u8], motif: &[u8]) -> Option<usize> {
    scan(subject, motif).next()
}

/// Returns whether `subject` ends with `suffix`.
///
/// ## Errors
///
/// Returns [`SearchError::TooShort`] if `subject` is shorter than
/// `min_subject_len`.
#[inline]
pub fn ends_with_motif(subject: &[u8], suffix: &[u8], min_subject_len: usize) -> Result<bool, SearchError> {
    check_min(subject.len(), min_subject_len)?;
    Ok(subject.ends_with(suffix))
}

/// Lazily yields every zero-based match offset, naively comparing each
/// candidate window.
fn scan<'a>(subject: &'a [u8], motif: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    let last_start = subject.len().checked_sub(motif.len());
    last_start
        .into_iter()
        .flat_map(|last| 0..=last)
        .filter(move |&i| &subject[i..i + motif.len()] == motif)
}

///
/// Trait for searching motifs in anything that can be viewed as bytes.
///
/// [`Sequence`](crate::data::types::Sequence), `Vec<u8>`, `&[u8]`, `&str`,
/// and `String` all implement this through a blanket implementation.
///
pub trait MotifSearch {
    /// All zero-based match offsets. See [`find_all`].
    ///
    /// ## Errors
    ///
    /// Returns the [`SearchError`] raised by `policy`.
    fn find_motif_offsets(&self, motif: impl AsRef<[u8]>, policy: SearchPolicy) -> Result<Vec<usize>, SearchError>;

    /// The first zero-based match offset, or [`None`]. See [`find_first`].
    fn find_first_motif(&self, motif: impl AsRef<[u8]>) -> Option<usize>;

    /// Returns `true` if the motif occurs anywhere.
    fn contains_motif(&self, motif: impl AsRef<[u8]>) -> bool {
        self.find_first_motif(motif).is_some()
    }

    /// Returns `true` if the bytes end with `suffix`. No length policy is
    /// applied; see [`ends_with_motif`] for the checked form.
    fn ends_with_motif(&self, suffix: impl AsRef<[u8]>) -> bool;
}

impl<T: AsRef<[u8]> + ?Sized> MotifSearch for T {
    #[inline]
    fn find_motif_offsets(&self, motif: impl AsRef<[u8]>, policy: SearchPolicy) -> Result<Vec<usize>, SearchError> {
        find_all(self.as_ref(), motif, policy)
    }

    #[inline]
    fn find_first_motif(&self, motif: impl AsRef<[u8]>) -> Option<usize> {
        find_first(self.as_ref(), motif.as_ref())
    }

    #[inline]
    fn ends_with_motif(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.as_ref().ends_with(suffix.as_ref())
    }
}
