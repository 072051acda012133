//! Uniform safe-side sampling without replacement.
use rand::Rng;

use crate::state::SideSet;

/// Returns a uniformly random subset of `0..sides` with exactly
/// `min(safe_count, sides)` distinct members.
///
/// Fisher-Yates shuffle of the index range, then take the prefix. O(sides),
/// no failure modes: an oversized `safe_count` clamps to `sides`. Callers
/// wanting a playable platform pass `safe_count >= 1`; a zero request yields
/// an empty set rather than an error.
pub fn sample_safe_sides<R: Rng>(sides: u8, safe_count: u8, rng: &mut R) -> SideSet {
    let mut indices: SideSet = (0..sides).collect();
    for i in (1..indices.len()).rev() {
        let j = rng.gen_range(0..=i);
        indices.swap(i, j);
    }
    indices.truncate(usize::from(safe_count.min(sides)));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    #[test]
    fn sample_size_and_bounds_hold_for_all_inputs() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        for sides in 1..=50u8 {
            for safe_count in 0..=sides {
                let picked = sample_safe_sides(sides, safe_count, &mut rng);
                assert_eq!(picked.len(), usize::from(safe_count));
                assert!(picked.iter().all(|&s| s < sides));
                let unique: HashSet<u8> = picked.iter().copied().collect();
                assert_eq!(unique.len(), picked.len(), "duplicates in sample");
            }
        }
    }

    #[test]
    fn oversized_request_clamps_to_available_sides() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let picked = sample_safe_sides(4, 200, &mut rng);
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn single_side_platform_is_trivial() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert_eq!(sample_safe_sides(1, 1, &mut rng).as_slice(), &[0]);
        assert!(sample_safe_sides(1, 0, &mut rng).is_empty());
    }
}
