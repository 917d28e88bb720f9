//! Random one-slot swaps for the community wall.
//!
//! The wall shows a fixed number of slots drawn from a larger photo pool and
//! periodically replaces the content of one random slot. The random source
//! is injected so tests can script a sequence and assert the exact outcome;
//! in the browser it is `Math.random`.

/// Uniform-ish scalar source. Cosmetic use only, nothing here is
/// fairness-sensitive.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Shortest and longest pause between wall swaps.
pub const MIN_SWAP_DELAY_MS: f64 = 1_800.0;
pub const MAX_SWAP_DELAY_MS: f64 = 3_200.0;

/// Samples the delay before the next swap, uniform in
/// `[MIN_SWAP_DELAY_MS, MAX_SWAP_DELAY_MS)`.
pub fn next_swap_delay_ms(rng: &mut dyn RandomSource) -> f64 {
    MIN_SWAP_DELAY_MS + rng.next_f64() * (MAX_SWAP_DELAY_MS - MIN_SWAP_DELAY_MS)
}

/// A single applied swap: `slot` now shows `item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSwap {
    pub slot: usize,
    pub item: usize,
}

/// Which pool item each visible slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoard {
    slots: Vec<usize>,
    pool_len: usize,
}

impl SlotBoard {
    /// Starts with items `0..visible` in slot order, so mounting is
    /// deterministic; the shuffling begins with the first swap.
    pub fn new(visible: usize, pool_len: usize) -> Self {
        Self {
            slots: (0..visible.min(pool_len)).collect(),
            pool_len,
        }
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Replaces one random slot with an item not currently displayed in any
    /// slot. When the whole pool is on display the replacement falls back to
    /// a uniform pick over every item except the slot's own current one (not
    /// least-recently-used). Returns `None` when no distinct replacement can
    /// exist.
    pub fn swap_one(&mut self, rng: &mut dyn RandomSource) -> Option<SlotSwap> {
        if self.slots.is_empty() || self.pool_len < 2 {
            return None;
        }

        let slot = pick(rng, self.slots.len());
        let current = self.slots[slot];

        let hidden: Vec<usize> = (0..self.pool_len)
            .filter(|item| !self.slots.contains(item))
            .collect();
        let item = if hidden.is_empty() {
            let candidates: Vec<usize> =
                (0..self.pool_len).filter(|&item| item != current).collect();
            candidates[pick(rng, candidates.len())]
        } else {
            hidden[pick(rng, hidden.len())]
        };

        self.slots[slot] = item;
        Some(SlotSwap { slot, item })
    }
}

fn pick(rng: &mut dyn RandomSource, len: usize) -> usize {
    ((rng.next_f64() * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed sequence of scalars, cycling when it runs out.
    struct Script {
        values: Vec<f64>,
        cursor: usize,
    }

    impl Script {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                cursor: 0,
            }
        }
    }

    impl RandomSource for Script {
        fn next_f64(&mut self) -> f64 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }

    /// Cheap generator for longer runs; values land in [0, 1).
    struct Lcg(u64);

    impl RandomSource for Lcg {
        fn next_f64(&mut self) -> f64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn scripted_swap_is_fully_deterministic() {
        let mut board = SlotBoard::new(3, 6);
        assert_eq!(board.slots(), &[0, 1, 2]);

        // 0.5 over 3 slots picks slot 1; 0.5 over hidden [3, 4, 5] picks 4.
        let swap = board.swap_one(&mut Script::new(&[0.5, 0.5])).unwrap();
        assert_eq!(swap, SlotSwap { slot: 1, item: 4 });
        assert_eq!(board.slots(), &[0, 4, 2]);
    }

    #[test]
    fn replacement_is_never_already_on_display() {
        let mut board = SlotBoard::new(6, 12);
        let mut rng = Lcg(7);
        for _ in 0..500 {
            let before = board.slots().to_vec();
            let swap = board.swap_one(&mut rng).unwrap();
            assert!(
                !before.contains(&swap.item),
                "picked {} which was already displayed in {:?}",
                swap.item,
                before
            );
        }
    }

    #[test]
    fn exactly_one_slot_changes_per_swap() {
        let mut board = SlotBoard::new(6, 12);
        let mut rng = Lcg(99);
        for _ in 0..200 {
            let before = board.slots().to_vec();
            board.swap_one(&mut rng).unwrap();
            let changed = before
                .iter()
                .zip(board.slots())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn full_pool_fallback_still_avoids_the_slots_own_item() {
        // Every pool item is on display, so only the fallback path runs.
        let mut board = SlotBoard::new(4, 4);
        let mut rng = Lcg(3);
        for _ in 0..300 {
            let before = board.slots().to_vec();
            let swap = board.swap_one(&mut rng).unwrap();
            assert_ne!(
                swap.item, before[swap.slot],
                "slot {} was handed its own item back",
                swap.slot
            );
        }
    }

    #[test]
    fn degenerate_boards_decline_to_swap() {
        let mut rng = Script::new(&[0.5]);
        assert!(SlotBoard::new(0, 10).swap_one(&mut rng).is_none());
        assert!(SlotBoard::new(1, 1).swap_one(&mut rng).is_none());
        assert!(SlotBoard::new(3, 0).swap_one(&mut rng).is_none());
    }

    #[test]
    fn swap_delay_spans_the_advertised_window() {
        assert_eq!(
            next_swap_delay_ms(&mut Script::new(&[0.0])),
            MIN_SWAP_DELAY_MS
        );
        let near_top = next_swap_delay_ms(&mut Script::new(&[0.999_999]));
        assert!(near_top < MAX_SWAP_DELAY_MS);
        let mid = next_swap_delay_ms(&mut Script::new(&[0.5]));
        assert_eq!(mid, (MIN_SWAP_DELAY_MS + MAX_SWAP_DELAY_MS) / 2.0);
    }

    #[test]
    fn extreme_random_values_stay_in_range() {
        let mut board = SlotBoard::new(3, 6);
        // A source that insists on the top of the range must still index
        // within bounds everywhere.
        let swap = board.swap_one(&mut Script::new(&[0.999_999, 0.999_999])).unwrap();
        assert_eq!(swap.slot, 2);
        assert_eq!(swap.item, 5);
    }
}
