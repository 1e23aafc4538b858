//! Implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for fuzzing the search functions.
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these.

use crate::{data::types::Sequence, search::SearchPolicy};
use arbitrary::{Arbitrary, Result, Unstructured};

impl<'a> Arbitrary<'a> for Sequence {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Sequence(Vec::<u8>::arbitrary(u)?))
    }
}

impl<'a> Arbitrary<'a> for SearchPolicy {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        // Small lengths keep generated policies satisfiable by generated data.
        Ok(match u.int_in_range(0..=2u8)? {
            0 => SearchPolicy::StrictMinimum {
                min_subject_len: u.int_in_range(0..=16)?,
            },
            1 => SearchPolicy::FixedMotifLength {
                min_subject_len: u.int_in_range(0..=16)?,
                motif_len:       u.int_in_range(0..=8)?,
            },
            _ => SearchPolicy::Unbounded,
        })
    }
}

#[cfg(all(test, feature = "rand"))]
mod test {
    use super::*;
    use crate::search::find_all;

    #[test]
    fn fuzzed_offsets_are_matches() {
        let raw = crate::generate::rand_sequence(b"ACGT\x00\xff", 4096, 11);
        let mut u = Unstructured::new(&raw);

        for _ in 0..256 {
            if u.is_empty() {
                break;
            }
            let (Ok(subject), Ok(motif), Ok(policy)) = (
                Sequence::arbitrary(&mut u),
                Sequence::arbitrary(&mut u),
                SearchPolicy::arbitrary(&mut u),
            ) else {
                break;
            };

            if let Ok(offsets) = find_all(&subject, &motif, policy) {
                for i in offsets {
                    assert_eq!(&subject[i..i + motif.len()], motif.as_bytes());
                }
            }
        }
    }
}
