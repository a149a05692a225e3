use super::traits::{check_probability, ConfigSection};
use crate::error::MotifError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecombinationConfig {
    /// Chance that a selected pair recombines instead of passing through
    pub recombination_probability: f64,
    /// Chance that a unit is swapped between the two children
    pub swap_probability: f64,
    /// Sequences drawn from the positive set to estimate synthetic connectors
    pub sample_size: usize,
    /// Lower bound for the mean of a synthetic connector
    pub min_mu: f64,
    /// Lower bound for the spread of a synthetic connector
    pub min_sigma: f64,
    pub seed: Option<u64>,
}

impl Default for RecombinationConfig {
    fn default() -> Self {
        Self {
            recombination_probability: 0.5,
            swap_probability: 0.5,
            sample_size: 10,
            min_mu: 0.0,
            min_sigma: 0.1,
            seed: None,
        }
    }
}

impl ConfigSection for RecombinationConfig {
    fn section_name() -> &'static str {
        "recombination"
    }

    fn validate(&self) -> Result<(), MotifError> {
        check_probability("recombination", "recombination_probability", self.recombination_probability)?;
        check_probability("recombination", "swap_probability", self.swap_probability)?;
        if self.sample_size == 0 {
            return Err(MotifError::Configuration(
                "recombination.sample_size must be at least 1".to_string(),
            ));
        }
        if self.min_mu < 0.0 {
            return Err(MotifError::Configuration(
                "recombination.min_mu cannot be negative".to_string(),
            ));
        }
        if !(self.min_sigma > 0.0) {
            return Err(MotifError::Configuration(
                "recombination.min_sigma must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RecombinationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = RecombinationConfig::default();
        config.swap_probability = 1.5;
        assert!(config.validate().is_err());

        let mut config = RecombinationConfig::default();
        config.sample_size = 0;
        assert!(config.validate().is_err());

        let mut config = RecombinationConfig::default();
        config.min_sigma = 0.0;
        assert!(config.validate().is_err());
    }
}
