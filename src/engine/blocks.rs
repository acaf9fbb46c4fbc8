//! Block planning: weekly hours → ordered block sizes.
//!
//! A lesson's weekly hour requirement is decomposed into blocks (contiguous
//! runs placed on a single day). Pairs give lesson continuity; capping the
//! pair count keeps high-hour lessons spread over enough distinct days.
//!
//! # Algorithm
//! Greedy pairing: emit 2-hour blocks while at least 2 hours remain, then a
//! final 1-hour block for an odd remainder. For N ≥ 6 the pair count is
//! capped at `min(N / 2, 3)` and the rest becomes 1-hour blocks, so the
//! lesson can reach at least that many distinct days. The resulting
//! sequence is order-shuffled through the injected rng, which varies only
//! the try-order, never the sizes or their sum.

use rand::seq::SliceRandom;
use rand::Rng;

/// Maximum number of 2-hour blocks for requirements of 6+ hours.
const MAX_PAIRS_HIGH_DEMAND: u32 = 3;

/// Decomposes `remaining` weekly hours into shuffled block sizes.
///
/// Properties: the sizes sum to `remaining`, every size is positive, and
/// `remaining == 0` yields an empty plan.
pub fn plan_blocks<R: Rng + ?Sized>(remaining: u32, rng: &mut R) -> Vec<u32> {
    let mut blocks = block_sizes(remaining);
    blocks.shuffle(rng);
    blocks
}

/// Unshuffled block decomposition.
fn block_sizes(remaining: u32) -> Vec<u32> {
    if remaining == 0 {
        return Vec::new();
    }

    let pair_budget = if remaining >= 6 {
        (remaining / 2).min(MAX_PAIRS_HIGH_DEMAND)
    } else {
        remaining / 2
    };

    let mut blocks = Vec::new();
    let mut left = remaining;
    let mut pairs = 0;
    while left >= 2 && pairs < pair_budget {
        blocks.push(2);
        left -= 2;
        pairs += 1;
    }
    while left > 0 {
        blocks.push(1);
        left -= 1;
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_sum_preserved_for_all_n() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in 0..=20 {
            let blocks = plan_blocks(n, &mut rng);
            let sum: u32 = blocks.iter().sum();
            assert_eq!(sum, n, "blocks for {n} must sum to {n}");
            assert!(blocks.iter().all(|&b| b > 0));
        }
    }

    #[test]
    fn test_zero_hours_empty_plan() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(plan_blocks(0, &mut rng).is_empty());
    }

    #[test]
    fn test_small_n_greedy_pairs() {
        assert_eq!(block_sizes(1), vec![1]);
        assert_eq!(block_sizes(2), vec![2]);
        assert_eq!(block_sizes(3), vec![2, 1]);
        assert_eq!(block_sizes(4), vec![2, 2]);
        assert_eq!(block_sizes(5), vec![2, 2, 1]);
    }

    #[test]
    fn test_high_demand_pair_cap() {
        // 6 → three pairs; 7 → three pairs + single; 8 → three pairs + two singles
        assert_eq!(block_sizes(6), vec![2, 2, 2]);
        assert_eq!(block_sizes(7), vec![2, 2, 2, 1]);
        assert_eq!(block_sizes(8), vec![2, 2, 2, 1, 1]);
        // 8 hours spread over at least 5 blocks → at least 5 distinct days possible
        assert_eq!(block_sizes(8).len(), 5);
    }

    #[test]
    fn test_shuffle_changes_order_not_content() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut saw_reordered = false;
        for _ in 0..50 {
            let mut blocks = plan_blocks(7, &mut rng);
            if blocks != vec![2, 2, 2, 1] {
                saw_reordered = true;
            }
            blocks.sort_unstable();
            assert_eq!(blocks, vec![1, 2, 2, 2]);
        }
        assert!(saw_reordered, "shuffle should vary block order across runs");
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let a = plan_blocks(7, &mut SmallRng::seed_from_u64(99));
        let b = plan_blocks(7, &mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
