//! Quiz settings supplied by the command line.

use rand::SeedableRng;
use rand::rngs::StdRng;

pub const DEFAULT_TITLE: &str = "Mathematics Comprehensive Quiz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Heading shown on the welcome screen.
    pub title: String,
    /// Fixed shuffle seed; a fresh one is drawn per run when unset.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            seed: None,
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random source for grouping and shuffling.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = QuizConfig::default().with_seed(Some(17));
        let mut a = config.rng();
        let mut b = config.rng();
        for _ in 0..8 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.seed, None);
        assert_eq!(config.with_title("Sets").title, "Sets");
    }
}
