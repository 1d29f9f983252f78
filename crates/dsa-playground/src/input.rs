use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// `1..=size`, already in order.
pub fn generate_numbers(size: usize) -> Vec<i64> {
    (1..=size as i64).collect()
}

/// `1..=size` in an order fixed by `seed`.
pub fn shuffled_numbers(size: usize, seed: u64) -> Vec<i64> {
    let mut numbers = generate_numbers(size);
    numbers.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_numbers() {
        assert_eq!(generate_numbers(5), [1, 2, 3, 4, 5]);
        assert!(generate_numbers(0).is_empty());
    }

    #[test]
    fn test_shuffle_is_reproducible_permutation() {
        let a = shuffled_numbers(100, 42);
        let b = shuffled_numbers(100, 42);
        assert_eq!(a, b);
        assert_ne!(a, generate_numbers(100));

        let mut sorted = a.clone();
        sorted.sort();
        assert_eq!(sorted, generate_numbers(100));
    }
}
