use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use crate::{
    board::{Board, Val, Var},
    error::{Error, Result},
};

/// Configuration for simulated annealing.
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    /// Board size.
    pub n: usize,
    /// Iteration budget before giving up.
    pub max_steps: usize,
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Geometric cooling factor applied after every step, in (0, 1).
    pub cooling_factor: f64,
}

impl AnnealingConfig {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            max_steps: 1000,
            initial_temperature: 1.0,
            cooling_factor: 0.99,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }

    pub fn with_cooling_factor(mut self, cooling_factor: f64) -> Self {
        self.cooling_factor = cooling_factor;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n < 1 {
            return Err(Error::InvalidBoardSize(self.n));
        }
        if self.max_steps < 1 {
            return Err(Error::InvalidStepBudget(self.max_steps));
        }
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(Error::InvalidTemperature(self.initial_temperature));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(Error::InvalidCoolingFactor(self.cooling_factor));
        }
        Ok(())
    }
}

/// Where an annealing run ended up. See [`AnnealingOutcome::solved`] for
/// the success check; a leftover conflict count is a degraded result.
#[derive(Debug, Clone)]
pub struct AnnealingOutcome {
    pub board: Board,
    pub conflicts: u32,
    pub steps: usize,
    pub final_temperature: f64,
    pub elapsed: Duration,
}

impl AnnealingOutcome {
    pub fn solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Stochastic relaxation with the Metropolis acceptance rule.
///
/// Each step proposes one uniformly random (row, column) move, accepts it
/// outright when it lowers the conflict count and with probability
/// `exp(-delta / T)` otherwise, then cools geometrically whether or not
/// the move was taken.
pub struct SimulatedAnnealing {
    config: AnnealingConfig,
}

impl SimulatedAnnealing {
    pub fn new(config: AnnealingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn run<R: Rng>(&self, rng: &mut R) -> AnnealingOutcome {
        let started = Instant::now();
        let n = self.config.n;
        let mut board = Board::random(n, rng);
        let mut temperature = self.config.initial_temperature;

        for step in 0..self.config.max_steps {
            let current = board.conflicts();
            if current == 0 {
                return self.outcome(board, 0, step, temperature, started);
            }

            let row = Var(rng.gen_range(0..n));
            let col = Val(rng.gen_range(0..n));
            let candidate = board.with_move(row, col);
            let delta = i64::from(candidate.conflicts()) - i64::from(current);

            if delta < 0 || rng.gen::<f64>() < (-(delta as f64) / temperature).exp() {
                board = candidate;
            }
            temperature *= self.config.cooling_factor;
        }

        let conflicts = board.conflicts();
        debug!(conflicts, "step budget exhausted");
        self.outcome(board, conflicts, self.config.max_steps, temperature, started)
    }

    fn outcome(
        &self,
        board: Board,
        conflicts: u32,
        steps: usize,
        final_temperature: f64,
        started: Instant,
    ) -> AnnealingOutcome {
        AnnealingOutcome {
            board,
            conflicts,
            steps,
            final_temperature,
            elapsed: started.elapsed(),
        }
    }
}
