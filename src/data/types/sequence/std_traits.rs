use super::{Sequence, SequenceView};
use std::{fmt, ops::Index, slice::SliceIndex};

impl AsRef<[u8]> for Sequence {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SequenceView<'_> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl AsRef<Vec<u8>> for Sequence {
    #[inline]
    fn as_ref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl From<String> for Sequence {
    #[inline]
    fn from(s: String) -> Self {
        Sequence(s.into_bytes())
    }
}

impl From<&str> for Sequence {
    #[inline]
    fn from(s: &str) -> Self {
        Sequence(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Sequence {
    #[inline]
    fn from(vec: Vec<u8>) -> Self {
        Sequence(vec)
    }
}

impl From<&[u8]> for Sequence {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Sequence(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Sequence {
    #[inline]
    fn from(bytes: &[u8; N]) -> Self {
        Sequence(bytes.to_vec())
    }
}

impl<'a> From<&'a [u8]> for SequenceView<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        SequenceView(bytes)
    }
}

impl<'a> From<&'a Sequence> for SequenceView<'a> {
    #[inline]
    fn from(seq: &'a Sequence) -> Self {
        SequenceView(&seq.0)
    }
}

impl<I: SliceIndex<[u8]>> Index<I> for Sequence {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl<I: SliceIndex<[u8]>> Index<I> for SequenceView<'_> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for SequenceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.0))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for SequenceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SequenceView({:?})", String::from_utf8_lossy(self.0))
    }
}
