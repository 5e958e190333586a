use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Weekday/weekend day coefficients, supplied once per run and passed
/// explicitly into the weigher (never captured from enclosing scope).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub weekday: f64,
    pub weekend: f64,
}

impl WeightConfig {
    pub fn validate(&self) -> AppResult<()> {
        if !(self.weekday > 0.0) {
            return Err(AppError::InvalidWeight(self.weekday));
        }
        if !(self.weekend > 0.0) {
            return Err(AppError::InvalidWeight(self.weekend));
        }
        Ok(())
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            weekday: 1.0,
            weekend: 1.5,
        }
    }
}

/// Weighting strategy. `Fractional` integrates sub-day durations across
/// midnight boundaries; `WholeDay` bills each calendar day atomically when
/// any interval touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeighMode {
    #[default]
    Fractional,
    WholeDay,
}

impl WeighMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeighMode::Fractional => "fractional",
            WeighMode::WholeDay => "whole-day",
        }
    }
}
