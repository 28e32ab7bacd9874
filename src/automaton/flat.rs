//! Single-grid simulation until a layout repeats.

use std::collections::HashMap;

use tracing::info;

use super::grid::{Fingerprint, Grid};
use super::stepping::step_flat;

/// Outcome of running a flat grid until its first repeated layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatRun {
    /// Fingerprint of the first layout seen twice.
    pub fingerprint: Fingerprint,
    /// Generation at which the repeat appeared.
    pub steps: usize,
    /// Generation at which that layout was first seen.
    pub first_seen: usize,
}

impl FlatRun {
    pub fn cycle_len(&self) -> usize {
        self.steps - self.first_seen
    }
}

/// Step `seed` until a layout repeats.
///
/// Terminates because there are only 2^25 layouts and stepping is
/// deterministic.
pub fn run_until_repeat(seed: &Grid) -> FlatRun {
    let mut seen: HashMap<Fingerprint, usize> = HashMap::new();
    let mut grid = *seed;
    let mut generation = 0;

    loop {
        let fingerprint = grid.fingerprint();
        if let Some(&first_seen) = seen.get(&fingerprint) {
            let run = FlatRun {
                fingerprint,
                steps: generation,
                first_seen,
            };
            info!(
                fingerprint,
                steps = run.steps,
                cycle = run.cycle_len(),
                "flat layout repeated"
            );
            return run;
        }

        seen.insert(fingerprint, generation);
        grid = step_flat(&grid);
        generation += 1;
    }
}

/// Fingerprint of the first layout that appears twice.
pub fn simulate_flat(seed: &Grid) -> Fingerprint {
    run_until_repeat(seed).fingerprint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_seed() {
        let seed: Grid = "....#\n#..#.\n#..##\n..#..\n#....".parse().unwrap();
        let run = run_until_repeat(&seed);

        assert_eq!(run.fingerprint, 2129920);
        assert_eq!(run.steps, 86);
        assert_eq!(run.first_seen, 74);
        assert_eq!(run.cycle_len(), 12);
        assert_eq!(simulate_flat(&seed), 2129920);
    }

    #[test]
    fn test_empty_grid_repeats_immediately() {
        let run = run_until_repeat(&Grid::empty());
        assert_eq!(run.fingerprint, 0);
        assert_eq!(run.steps, 1);
        assert_eq!(run.first_seen, 0);
    }

    #[test]
    fn test_repeat_is_reachable_from_seed() {
        let seed: Grid = "#####\n.....\n#.#.#\n.....\n#####".parse().unwrap();
        let run = run_until_repeat(&seed);

        let mut grid = seed;
        for _ in 0..run.first_seen {
            grid = step_flat(&grid);
        }
        assert_eq!(grid.fingerprint(), run.fingerprint);

        for _ in 0..run.cycle_len() {
            grid = step_flat(&grid);
        }
        assert_eq!(grid.fingerprint(), run.fingerprint);
    }
}
