//! Production adjustment policy

use crate::error::{ForecastError, Result};
use std::fmt;

/// Recommended production adjustment direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionAction {
    /// Raise production for the next period
    Increase,
    /// Lower production for the next period
    Decrease,
    /// Keep production unchanged
    Maintain,
}

impl fmt::Display for ProductionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductionAction::Increase => "Increase",
            ProductionAction::Decrease => "Decrease",
            ProductionAction::Maintain => "Maintain",
        };
        write!(f, "{}", label)
    }
}

/// Production recommendation derived from a forecast
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Suggested production quantity in whole units
    pub suggested_production: u64,
    /// Change versus prior production, in percent
    pub percent_change: f64,
    /// Categorical adjustment direction
    pub action: ProductionAction,
}

/// Policy for converting a forecast into a production recommendation
#[derive(Debug, Clone)]
pub struct ProductionPolicy {
    /// Multiplicative buffer applied to the raw forecast
    safety_factor: f64,
    /// Percent change beyond which production is adjusted
    threshold_percent: f64,
}

impl Default for ProductionPolicy {
    fn default() -> Self {
        Self {
            safety_factor: 1.1,
            threshold_percent: 5.0,
        }
    }
}

impl ProductionPolicy {
    /// Create a policy with a custom safety factor and adjustment threshold
    pub fn new(safety_factor: f64, threshold_percent: f64) -> Result<Self> {
        if safety_factor <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Safety factor must be positive".to_string(),
            ));
        }

        if threshold_percent < 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Threshold percent must not be negative".to_string(),
            ));
        }

        Ok(Self {
            safety_factor,
            threshold_percent,
        })
    }

    /// Get the safety factor
    pub fn safety_factor(&self) -> f64 {
        self.safety_factor
    }

    /// Get the adjustment threshold in percent
    pub fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    /// Convert a forecast and the prior production baseline into a recommendation.
    ///
    /// The suggested quantity is the forecast buffered by the safety factor,
    /// rounded to whole units and clamped at zero. A prior production of
    /// zero counts as fully new production with a change of exactly 100
    /// percent. A change of exactly the threshold magnitude maps to
    /// Maintain.
    pub fn recommend(&self, predicted_next: f64, prior_production: f64) -> Recommendation {
        let suggested = (predicted_next * self.safety_factor).round().max(0.0);

        let percent_change = if prior_production == 0.0 {
            100.0
        } else {
            (suggested - prior_production) / prior_production * 100.0
        };

        let action = if percent_change > self.threshold_percent {
            ProductionAction::Increase
        } else if percent_change < -self.threshold_percent {
            ProductionAction::Decrease
        } else {
            ProductionAction::Maintain
        };

        Recommendation {
            suggested_production: suggested as u64,
            percent_change,
            action,
        }
    }
}
