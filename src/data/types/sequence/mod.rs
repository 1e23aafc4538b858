use crate::{
    composition::{gc_count, gc_percent, net_charge},
    data::err::SearchError,
    search::{SearchPolicy, find_all},
};

mod std_traits;

/// [`Sequence`] is a transparent, new-type wrapper around [`Vec<u8>`] holding
/// a biological sequence. The alphabet is not checked: any byte is allowed,
/// and a sequence used as a search pattern (a *motif*) has the same
/// representation.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Sequence(pub(crate) Vec<u8>);

/// The corresponding immutable view type for [`Sequence`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct SequenceView<'a>(pub(crate) &'a [u8]);

impl Sequence {
    /// Creates a new [`Sequence`] empty object.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Sequence(Vec::new())
    }

    /// Gets the sequence as a byte slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Creates a [`SequenceView`] over the whole sequence.
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView(&self.0)
    }

    /// Creates a [`SequenceView`] over the zero-based `range`.
    ///
    /// ## Panics
    ///
    /// Panics if the range is out of bounds.
    #[inline]
    #[must_use]
    pub fn slice<R>(&self, range: R) -> SequenceView<'_>
    where
        R: std::slice::SliceIndex<[u8], Output = [u8]>, {
        SequenceView(&self.0[range])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finds every offset of `motif` under `policy`. See [`find_all`].
    ///
    /// ## Errors
    ///
    /// Returns the [`SearchError`] raised by `policy`.
    #[inline]
    pub fn find_all(&self, motif: impl AsRef<[u8]>, policy: SearchPolicy) -> Result<Vec<usize>, SearchError> {
        find_all(&self.0, motif, policy)
    }

    /// Number of `G` and `C` bytes, matched exactly (lowercase is not counted).
    #[inline]
    #[must_use]
    pub fn gc_count(&self) -> usize {
        gc_count(&self.0)
    }

    /// GC content as a percentage, or [`None`] when the sequence is empty.
    #[inline]
    #[must_use]
    pub fn gc_percent(&self) -> Option<f64> {
        gc_percent(&self.0)
    }

    /// Net charge. See [`net_charge`].
    #[inline]
    #[must_use]
    pub fn net_charge(&self) -> i64 {
        net_charge(&self.0)
    }
}

impl<'a> SequenceView<'a> {
    /// Creates a view over a byte slice.
    #[inline]
    #[must_use]
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        SequenceView(bytes)
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Narrows the view to a zero-based sub-range.
    ///
    /// ## Panics
    ///
    /// Panics if the range is out of bounds.
    #[inline]
    #[must_use]
    pub fn slice<R>(&self, range: R) -> SequenceView<'a>
    where
        R: std::slice::SliceIndex<[u8], Output = [u8]>, {
        SequenceView(&self.0[range])
    }

    /// Copies the viewed bytes into an owned [`Sequence`].
    #[inline]
    #[must_use]
    pub fn to_owned_data(&self) -> Sequence {
        Sequence(self.0.to_vec())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finds every offset of `motif` under `policy`. See [`find_all`].
    ///
    /// ## Errors
    ///
    /// Returns the [`SearchError`] raised by `policy`.
    #[inline]
    pub fn find_all(&self, motif: impl AsRef<[u8]>, policy: SearchPolicy) -> Result<Vec<usize>, SearchError> {
        find_all(self.0, motif, policy)
    }

    #[inline]
    #[must_use]
    pub fn gc_count(&self) -> usize {
        gc_count(self.0)
    }

    #[inline]
    #[must_use]
    pub fn gc_percent(&self) -> Option<f64> {
        gc_percent(self.0)
    }

    #[inline]
    #[must_use]
    pub fn net_charge(&self) -> i64 {
        net_charge(self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn view_slicing() {
        let s: Sequence = b"MKRDEAAG".into();
        let middle = s.slice(1..5);
        assert_eq!(middle.as_bytes(), b"KRDE");
        assert_eq!(middle.net_charge(), 0);
        assert_eq!(middle.slice(..2).net_charge(), 2);
        assert_eq!(middle.to_owned_data(), Sequence::from(b"KRDE"));
    }

    #[test]
    fn owned_and_view_agree() {
        let s: Sequence = b"XXFLAREYYFLARE".into();
        let policy = SearchPolicy::Unbounded;
        assert_eq!(s.find_all(b"FLARE", policy), s.as_view().find_all(b"FLARE", policy));
        assert_eq!(s.find_all(b"FLARE", policy), Ok(vec![2, 9]));
        assert_eq!(s.gc_count(), s.as_view().gc_count());
    }
}
