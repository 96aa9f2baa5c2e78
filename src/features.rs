//! Feature construction for the sales regression

use crate::data::SalesDataset;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, Utc};

/// Feature matrix and target vector for model fitting
#[derive(Debug, Clone)]
pub struct FeatureSet {
    /// Feature rows: (historical sales value, seasonal indicator)
    x: Vec<[f64; 2]>,
    /// Target vector: current-period sales
    y: Vec<f64>,
}

impl FeatureSet {
    /// Create a new feature set from parallel feature rows and targets
    pub fn new(x: Vec<[f64; 2]>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Feature rows ({}) don't match target length ({})",
                x.len(),
                y.len()
            )));
        }

        Ok(Self { x, y })
    }

    /// Get the feature rows
    pub fn x(&self) -> &[[f64; 2]] {
        &self.x
    }

    /// Get the target vector
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Get the number of feature rows
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the feature set is empty
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Seasonal indicator for the current invocation: the wall-clock calendar month
pub fn current_month() -> u32 {
    Utc::now().month()
}

/// Build the feature matrix and target vector from a cleaned dataset.
///
/// Each row pairs the prior-period sales value with the seasonal indicator;
/// the indicator is identical across all rows of one invocation. The target
/// is the current-period sales. Row order follows the dataset.
pub fn build_features(data: &SalesDataset, month: u32) -> Result<FeatureSet> {
    validate_month(month)?;

    let last_sales = data.last_month_sales()?;
    let this_sales = data.this_month_sales()?;

    let x = last_sales
        .into_iter()
        .map(|sales| [sales, f64::from(month)])
        .collect();

    FeatureSet::new(x, this_sales)
}

pub(crate) fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(ForecastError::InvalidParameter(format!(
            "Seasonal month must be between 1 and 12, got {}",
            month
        )));
    }

    Ok(())
}
