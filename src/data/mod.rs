//! ## Sequence data and its acquisition.
//!
//! A [`Sequence`](types::Sequence) owns its bytes and a
//! [`SequenceView`](types::SequenceView) borrows them. Neither checks the
//! alphabet: nucleotide letters, amino acid letters, or arbitrary bytes are all
//! accepted, and any length, including zero, is valid.
//!
//! ```
//! # use motifscan::prelude::*;
//! let owned: Sequence = b"MKRDEAAG".into();
//! let middle = owned.slice(1..5);
//! assert_eq!(middle.as_bytes(), b"KRDE");
//! assert_eq!(middle.net_charge(), 0);
//! assert_eq!(owned.gc_count(), 1);
//! ```

/// Arbitrary implementations for fuzzing.
#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// Error types and exit-code helpers.
pub mod err;
/// Reading sequences from files and standard input.
pub mod input;
pub mod types;
