use crate::data::err::SearchError;
use std::ops::Range;

/// Whether a sequence is read as DNA or RNA, which fixes the start and stop
/// codons used when scanning for open reading frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Dna,
    Rna,
}

impl SequenceKind {
    /// Classifies a sequence as [`SequenceKind::Rna`] if it contains a `U`,
    /// otherwise as [`SequenceKind::Dna`].
    #[inline]
    #[must_use]
    pub fn detect(sequence: &[u8]) -> Self {
        if sequence.contains(&b'U') {
            SequenceKind::Rna
        } else {
            SequenceKind::Dna
        }
    }

    #[inline]
    #[must_use]
    pub const fn start_codon(self) -> &'static [u8; 3] {
        match self {
            SequenceKind::Dna => b"ATG",
            SequenceKind::Rna => b"AUG",
        }
    }

    #[inline]
    #[must_use]
    pub const fn stop_codons(self) -> [&'static [u8; 3]; 3] {
        match self {
            SequenceKind::Dna => [b"TAA", b"TAG", b"TGA"],
            SequenceKind::Rna => [b"UAA", b"UAG", b"UGA"],
        }
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SequenceKind::Dna => "DNA",
            SequenceKind::Rna => "RNA",
        }
    }
}

/// An open reading frame: a start codon through the first in-frame stop
/// codon, using zero-based, end-exclusive coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenReadingFrame {
    pub start:    usize,
    pub end:      usize,
    pub sequence: Vec<u8>,
}

impl OpenReadingFrame {
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of whole codons, including the start and stop codons.
    #[inline]
    #[must_use]
    pub fn codon_count(&self) -> usize {
        self.sequence.len() / 3
    }

    /// Iterates over the frame three bases at a time.
    #[inline]
    pub fn codons(&self) -> std::slice::Chunks<'_, u8> {
        self.sequence.chunks(3)
    }
}

/// Finds every open reading frame in `sequence`.
///
/// Every occurrence of the start codon is considered, so all three forward
/// frames are covered and nested frames sharing a stop codon are each
/// reported. A start codon with no in-frame stop codon yields nothing.
#[must_use]
pub fn find_orfs(sequence: &[u8], kind: SequenceKind) -> Vec<OpenReadingFrame> {
    let start_codon = kind.start_codon();
    let stop_codons = kind.stop_codons();

    let mut frames = Vec::new();
    for (start, window) in sequence.windows(3).enumerate() {
        if window != start_codon {
            continue;
        }

        let stop = sequence[start + 3..]
            .chunks_exact(3)
            .position(|codon| stop_codons.iter().any(|s| *s == codon))
            .map(|codons_before_stop| start + 3 + codons_before_stop * 3);

        if let Some(stop) = stop {
            let end = stop + 3;
            frames.push(OpenReadingFrame {
                start,
                end,
                sequence: sequence[start..end].to_vec(),
            });
        }
    }
    frames
}

/// Returns the reverse complement of a DNA sequence. `A`/`T` and `G`/`C` are
/// swapped; any other byte is kept as-is.
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence
        .iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'T' => b'A',
            b'G' => b'C',
            b'C' => b'G',
            other => other,
        })
        .collect()
}

/// A ranking for a set of reading frames: the longest frame first, then the
/// number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct OrfScore {
    pub longest: usize,
    pub count:   usize,
}

impl OrfScore {
    #[must_use]
    pub fn of(frames: &[OpenReadingFrame]) -> Self {
        OrfScore {
            longest: frames.iter().map(OpenReadingFrame::len).max().unwrap_or(0),
            count:   frames.len(),
        }
    }
}

/// Which strand the reported frames were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    ReverseComplement,
}

impl Strand {
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Strand::Forward => "Original",
            Strand::ReverseComplement => "Complement",
        }
    }
}

/// The outcome of scanning a sequence for open reading frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrfScan {
    /// DNA is scanned on both strands and the better-scoring strand is kept.
    Dna {
        forward_score: OrfScore,
        reverse_score: OrfScore,
        best:          Strand,
        frames:        Vec<OpenReadingFrame>,
    },
    /// RNA is scanned on the forward strand only.
    Rna { frames: Vec<OpenReadingFrame> },
}

impl OrfScan {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> SequenceKind {
        match self {
            OrfScan::Dna { .. } => SequenceKind::Dna,
            OrfScan::Rna { .. } => SequenceKind::Rna,
        }
    }

    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[OpenReadingFrame] {
        match self {
            OrfScan::Dna { frames, .. } | OrfScan::Rna { frames } => frames,
        }
    }
}

/// The shortest sequence accepted by [`scan_orfs`]: a start codon, one codon,
/// and a stop codon.
pub const MIN_ORF_SUBJECT_LEN: usize = 9;

/// Detects the sequence kind and collects its open reading frames. For DNA
/// the reverse complement is also scanned and the strand with the strictly
/// higher [`OrfScore`] wins; ties keep the forward strand.
///
/// ## Errors
///
/// Returns [`SearchError::TooShort`] for sequences shorter than
/// [`MIN_ORF_SUBJECT_LEN`].
pub fn scan_orfs(sequence: &[u8]) -> Result<OrfScan, SearchError> {
    if sequence.len() < MIN_ORF_SUBJECT_LEN {
        return Err(SearchError::TooShort {
            len: sequence.len(),
            min: MIN_ORF_SUBJECT_LEN,
        });
    }

    match SequenceKind::detect(sequence) {
        SequenceKind::Rna => Ok(OrfScan::Rna {
            frames: find_orfs(sequence, SequenceKind::Rna),
        }),
        SequenceKind::Dna => {
            let forward = find_orfs(sequence, SequenceKind::Dna);
            let reverse = find_orfs(&reverse_complement(sequence), SequenceKind::Dna);
            let (forward_score, reverse_score) = (OrfScore::of(&forward), OrfScore::of(&reverse));

            let (best, frames) = if reverse_score > forward_score {
                (Strand::ReverseComplement, reverse)
            } else {
                (Strand::Forward, forward)
            };

            Ok(OrfScan::Dna {
                forward_score,
                reverse_score,
                best,
                frames,
            })
        }
    }
}
