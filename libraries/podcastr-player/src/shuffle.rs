//! Random episode selection for shuffle mode

use rand::Rng;

/// Pick a uniformly random index into a playlist of `len` episodes
///
/// Any index may come up, including the current one. An empty playlist
/// yields 0, the resting index of an empty player.
pub fn random_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    if len == 0 {
        return 0;
    }

    rng.gen_range(0..len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_playlist_yields_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_index(0, &mut rng), 0);
    }

    #[test]
    fn single_episode_always_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(random_index(1, &mut rng), 0);
        }
    }

    #[test]
    fn stays_in_range_and_covers_all_indices() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let index = random_index(5, &mut rng);
            assert!(index < 5);
            seen.insert(index);
        }

        // 500 draws over 5 buckets; missing one would be astronomically unlikely
        assert_eq!(seen.len(), 5);
    }
}
