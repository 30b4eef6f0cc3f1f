use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};

/// Draws distinct positions out of a roster, owning its source of randomness.
pub struct Selector<R> {
    rng: R,
}

impl<R: Rng> Selector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks `count` distinct indices in `0..total`, in the order they were accepted.
    ///
    /// Candidates are drawn uniformly and redrawn when already taken, so every
    /// subset of size `count` is equally likely.
    pub fn pick(&mut self, total: usize, count: usize) -> Result<Vec<usize>> {
        if count > total {
            return Err(Error::SelectionTooLarge {
                requested: count,
                available: total,
            });
        }

        let mut taken = vec![false; total];
        let mut picked = Vec::with_capacity(count);

        while picked.len() < count {
            let candidate = self.rng.gen_range(0..total);
            if !taken[candidate] {
                taken[candidate] = true;
                picked.push(candidate);
            }
        }

        Ok(picked)
    }
}

impl Selector<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds from the wall clock, returning the seed so the draw can be replayed.
    pub fn time_seeded() -> (Self, u64) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(clock_seed)
            .unwrap_or_default();

        (Self::seeded(seed), seed)
    }
}

/// Folds seconds and sub-second nanos into a seed without a lossy cast.
fn clock_seed(elapsed: Duration) -> u64 {
    elapsed.as_secs().rotate_left(32) ^ u64::from(elapsed.subsec_nanos())
}
