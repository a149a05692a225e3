use super::traits::ConfigSection;
use crate::error::MotifError;
use serde::{Deserialize, Serialize};

/// Parameters for generating random organisms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganismConfig {
    /// Expected number of recognizers per organism (also its variance)
    pub num_recognizers_lambda: f64,
    pub min_mu: u32,
    pub max_mu: u32,
    pub min_sigma: u32,
    pub max_sigma: u32,
    pub pwm_length: usize,
    /// Should divide `pwm_probability_base`, e.g. 100 / 5 emulates a motif of 20 sites
    pub pwm_probability_step: u32,
    pub pwm_probability_base: u32,
    pub pwm_probability_decimals: u32,
}

impl Default for OrganismConfig {
    fn default() -> Self {
        Self {
            num_recognizers_lambda: 3.0,
            min_mu: 0,
            max_mu: 20,
            min_sigma: 1,
            max_sigma: 5,
            pwm_length: 5,
            pwm_probability_step: 5,
            pwm_probability_base: 100,
            pwm_probability_decimals: 2,
        }
    }
}

impl OrganismConfig {
    /// Binding sites distributed over the four bases of a PWM column
    pub fn sites_per_column(&self) -> u32 {
        self.pwm_probability_base / self.pwm_probability_step
    }
}

impl ConfigSection for OrganismConfig {
    fn section_name() -> &'static str {
        "organism"
    }

    fn validate(&self) -> Result<(), MotifError> {
        if self.num_recognizers_lambda < 1.0 {
            return Err(MotifError::Configuration(
                "organism.num_recognizers_lambda must be at least 1".to_string(),
            ));
        }
        if self.min_mu > self.max_mu || self.min_sigma > self.max_sigma {
            return Err(MotifError::Configuration(
                "organism connector bounds must satisfy min <= max".to_string(),
            ));
        }
        if self.pwm_length == 0 {
            return Err(MotifError::Configuration(
                "organism.pwm_length must be positive".to_string(),
            ));
        }
        if self.pwm_probability_step == 0
            || self.pwm_probability_base % self.pwm_probability_step != 0
        {
            return Err(MotifError::Configuration(
                "organism.pwm_probability_step must divide pwm_probability_base".to_string(),
            ));
        }
        if self.sites_per_column() < 4 {
            return Err(MotifError::Configuration(
                "a PWM column needs at least one site per base".to_string(),
            ));
        }
        Ok(())
    }
}
