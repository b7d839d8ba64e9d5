//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Dynamite uses each side gets per match under the standard rules.
pub const DYNAMITE_BUDGET: u32 = 100;

/// Rule parameters the engine derives resource state from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dynamite uses per side per match
    pub dynamite_budget: u32,
}

impl EngineConfig {
    /// Standard match rules (100 Dynamite per side)
    pub fn standard() -> Self {
        Self { dynamite_budget: DYNAMITE_BUDGET }
    }

    /// Parse a config from JSON, filling missing fields from `standard()`.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.dynamite_budget == 0 {
            return Err(EngineError::InvalidConfig(
                "dynamite_budget must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
