use serde::{Deserialize, Serialize};

use crate::error::{HandlerError, Result};

/// Handler parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Moving average window length
    pub sma_period: usize,
    /// Status code placed on successful responses
    pub status_code: u16,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            sma_period: 5,
            status_code: 200,
        }
    }
}

impl HandlerConfig {
    pub fn with_sma_period(mut self, period: usize) -> Self {
        self.sma_period = period;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.sma_period == 0 {
            return Err(HandlerError::InvalidParameter(
                "sma_period must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
