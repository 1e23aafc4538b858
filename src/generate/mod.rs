/// Generates a pseudo-random sequence of `length` bytes drawn uniformly from
/// `alpha`. The same `seed` always produces the same sequence.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    use rand_xoshiro::{
        Xoshiro256PlusPlus,
        rand_core::{RngCore, SeedableRng},
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

#[cfg(test)]
mod test {
    use super::rand_sequence;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"DEKR", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (d, e, k, r) = random_sequence.iter().fold((0, 0, 0, 0), |(d, e, k, r), &b| match b {
            b'D' => (d + 1, e, k, r),
            b'E' => (d, e + 1, k, r),
            b'K' => (d, e, k + 1, r),
            b'R' => (d, e, k, r + 1),
            _ => (d, e, k, r),
        });

        assert!(d > 0);
        assert!(e > 0);
        assert!(k > 0);
        assert!(r > 0);
        assert_eq!(rand_sequence(b"DEKR", 64, 7), rand_sequence(b"DEKR", 64, 7));
    }
}
