use crate::error::{Error, Result};

/// Configuration for the genetic algorithm.
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    /// Board size.
    pub n: usize,
    /// Individuals per generation; constant across the whole run.
    pub population_size: usize,
    /// Generation budget before giving up.
    pub generations: usize,
    /// Probability that a freshly bred child is mutated, in [0, 1].
    pub mutation_rate: f64,
    /// Selection draws parents from the fittest `elite_size` individuals.
    pub elite_size: usize,
}

impl GeneticConfig {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            population_size: 50,
            generations: 500,
            mutation_rate: 0.2,
            elite_size: 20,
        }
    }

    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    pub fn with_elite_size(mut self, elite_size: usize) -> Self {
        self.elite_size = elite_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n < 1 {
            return Err(Error::InvalidBoardSize(self.n));
        }
        if self.population_size < 2 {
            return Err(Error::InvalidPopulationSize(self.population_size));
        }
        if self.generations < 1 {
            return Err(Error::InvalidGenerationBudget(self.generations));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) || self.mutation_rate.is_nan() {
            return Err(Error::InvalidMutationRate(self.mutation_rate));
        }
        if self.elite_size < 2 || self.elite_size > self.population_size {
            return Err(Error::InvalidEliteSize(self.elite_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_is_valid() {
        assert!(GeneticConfig::new(5).validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_populations() {
        assert!(GeneticConfig::new(5).with_population_size(1).validate().is_err());
        assert!(GeneticConfig::new(0).validate().is_err());
        assert!(GeneticConfig::new(5).with_generations(0).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(GeneticConfig::new(5).with_mutation_rate(-0.1).validate().is_err());
        assert!(GeneticConfig::new(5).with_mutation_rate(1.5).validate().is_err());
        assert!(GeneticConfig::new(5).with_mutation_rate(f64::NAN).validate().is_err());
        assert!(GeneticConfig::new(5).with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn elite_size_must_fit_the_population() {
        assert!(GeneticConfig::new(5).with_elite_size(1).validate().is_err());
        assert!(
            GeneticConfig::new(5)
                .with_population_size(10)
                .with_elite_size(11)
                .validate()
                .is_err()
        );
        assert!(
            GeneticConfig::new(5)
                .with_population_size(10)
                .with_elite_size(10)
                .validate()
                .is_ok()
        );
    }
}
