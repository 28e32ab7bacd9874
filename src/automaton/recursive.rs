//! Recursive simulation driver.

use tracing::{debug, info, warn};

use super::grid::Grid;
use super::levels::LevelMap;

/// Steps a [`LevelMap`] through a fixed budget of generations.
pub struct RecursiveSimulation {
    /// Current generation of every allocated level.
    levels: LevelMap,

    /// Generations completed so far.
    generation: usize,

    /// Generations the level map was sized for.
    steps: usize,

    /// Pool for stepping levels in parallel. `None` falls back to the
    /// global Rayon pool.
    thread_pool: Option<rayon::ThreadPool>,
}

impl RecursiveSimulation {
    /// Create a simulation seeded at level 0 with room for `steps` generations.
    /// A thread count of 0 is treated as 1.
    pub fn new(seed: &Grid, steps: usize, num_threads: usize) -> Self {
        let num_threads = num_threads.max(1);
        let thread_pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!(%err, num_threads, "could not build thread pool, using global pool");
                None
            }
        };

        RecursiveSimulation {
            levels: LevelMap::with_range(seed, steps),
            generation: 0,
            steps,
            thread_pool,
        }
    }

    /// Current generation of every level.
    pub fn levels(&self) -> &LevelMap {
        &self.levels
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Step budget the level map was sized for.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// True once the budget is used up.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.steps
    }

    /// Total bugs across all levels.
    pub fn live_count(&self) -> usize {
        self.levels.live_count()
    }

    /// Advance one generation. Returns false once the budget is used up.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        self.levels = match &self.thread_pool {
            Some(pool) => pool.install(|| self.levels.step()),
            None => self.levels.step(),
        };
        self.generation += 1;

        debug!(
            generation = self.generation,
            live = self.levels.live_count(),
            "recursive step"
        );
        true
    }

    /// Run the remaining generations and return the total bug count.
    pub fn run(&mut self) -> usize {
        while self.step() {}

        let live = self.live_count();
        info!(steps = self.steps, live, "recursive simulation finished");
        live
    }
}

/// Total bugs across all levels after `steps` generations.
pub fn simulate_recursive(seed: &Grid, steps: usize) -> usize {
    RecursiveSimulation::new(seed, steps, 1).run()
}
