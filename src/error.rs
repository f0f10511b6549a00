pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Configuration failures rejected at construction time.
///
/// An unsatisfiable problem, an exhausted search, or a local optimum are
/// *outcomes*, not errors; only malformed configuration surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("board size must be at least 1, got {0}")]
    InvalidBoardSize(usize),

    #[error("step budget must be at least 1, got {0}")]
    InvalidStepBudget(usize),

    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    #[error("cooling factor must lie in the open interval (0, 1), got {0}")]
    InvalidCoolingFactor(f64),

    #[error("population size must be at least 2, got {0}")]
    InvalidPopulationSize(usize),

    #[error("generation budget must be at least 1, got {0}")]
    InvalidGenerationBudget(usize),

    #[error("mutation rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("elite size must lie in [2, population size], got {0}")]
    InvalidEliteSize(usize),
}
