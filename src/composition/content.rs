/// Calculates GC content. Returns count of `G` and `C` bytes in the
/// sequence. Matching is exact: lowercase `g` and `c` are not counted.
#[must_use]
pub fn gc_count(s: &[u8]) -> usize {
    s.iter().filter(|&&b| b == b'G' || b == b'C').count()
}

/// GC content as a percentage of the sequence length, or [`None`] for an
/// empty sequence.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gc_percent(s: &[u8]) -> Option<f64> {
    if s.is_empty() {
        None
    } else {
        Some(100.0 * gc_count(s) as f64 / s.len() as f64)
    }
}

/// Net charge of a peptide: each `K` or `R` counts +1 and each `D` or `E`
/// counts -1. Other residues, including lowercase letters, are neutral.
#[must_use]
pub fn net_charge(s: &[u8]) -> i64 {
    s.iter().fold(0, |charge, &b| match b {
        b'K' | b'R' => charge + 1,
        b'D' | b'E' => charge - 1,
        _ => charge,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gc_count() {
        assert_eq!(gc_count(b"GGCCACCAAGGCCA"), 10);
        assert_eq!(gc_count(b"ggccAT"), 0);
        assert_eq!(gc_count(b"GgCcAT"), 2);
        assert_eq!(gc_count(b""), 0);
    }

    #[test]
    fn test_gc_percent() {
        assert_eq!(gc_percent(b"GCAT"), Some(50.0));
        assert_eq!(gc_percent(b"GGGG"), Some(100.0));
        assert_eq!(gc_percent(b"ATAT"), Some(0.0));
        assert_eq!(gc_percent(b""), None);
    }

    #[test]
    fn gc_and_charge_are_both_case_sensitive() {
        assert_eq!(gc_percent(b"ggcc"), Some(0.0));
        assert_eq!(net_charge(b"krde"), 0);
    }

    #[test]
    fn test_net_charge() {
        assert_eq!(net_charge(b"KRDE"), 0);
        assert_eq!(net_charge(b"MKKRAG"), 3);
        assert_eq!(net_charge(b"DEEDAK"), -3);
        assert_eq!(net_charge(b"kRde"), 1);
        assert_eq!(net_charge(b""), 0);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn gc_bounds() {
        for length in [16, 1200, 10000] {
            let s = crate::generate::rand_sequence(b"ATCG", length, 42);
            let pct = gc_percent(&s).unwrap_or_default();
            assert!((0.0..=100.0).contains(&pct), "when testing for length {length}");
            assert!(gc_count(&s) <= length);
        }
    }
}
