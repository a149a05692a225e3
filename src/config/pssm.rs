use super::traits::ConfigSection;
use crate::error::MotifError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PssmConfig {
    /// Added to every base probability before taking log-odds
    pub pseudocount: f64,
}

impl Default for PssmConfig {
    fn default() -> Self {
        Self { pseudocount: 0.01 }
    }
}

impl ConfigSection for PssmConfig {
    fn section_name() -> &'static str {
        "pssm"
    }

    fn validate(&self) -> Result<(), MotifError> {
        if !(self.pseudocount > 0.0) {
            return Err(MotifError::Configuration(
                "pssm.pseudocount must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
