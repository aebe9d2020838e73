use rand::Rng;

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
///
/// Fisher-Yates from the back: position `i` swaps with a partner drawn from
/// `0..=i`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = vec![1, 1, 2, 3, 5, 8, 13, 21];
        for _ in 0..50 {
            let mut out = shuffled(&input, &mut rng);
            out.sort();
            assert_eq!(out, input);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec!["a", "b", "c", "d"];
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn trivial_inputs_come_back_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: Vec<u8> = vec![];
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&[42], &mut rng), vec![42]);
    }

    #[test]
    fn same_seed_same_permutation() {
        let input: Vec<u32> = (0..20).collect();
        let a = shuffled(&input, &mut StdRng::seed_from_u64(99));
        let b = shuffled(&input, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn every_position_is_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = [0usize, 1, 2];
        let mut first_seen = [false; 3];
        for _ in 0..200 {
            first_seen[shuffled(&input, &mut rng)[0]] = true;
        }
        assert!(first_seen.iter().all(|&seen| seen));
    }
}
