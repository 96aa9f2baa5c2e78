//! Ordinary least-squares regression of current sales on sales history

use crate::error::{ForecastError, Result};
use crate::features::FeatureSet;
use crate::models::{ForecastModel, TrainedForecastModel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pivots below this fraction of the matrix scale are treated as singular
const SINGULAR_EPS: f64 = 1e-10;

/// Linear regression over (historical sales, seasonal indicator) with intercept
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// Name of the model
    name: String,
}

/// Trained linear regression model.
///
/// Evaluates `intercept + sales_coefficient * last_month_sales +
/// seasonal_coefficient * month`. Immutable after fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedLinearRegression {
    /// Name of the model
    name: String,
    /// Intercept term
    intercept: f64,
    /// Coefficient on the historical sales feature
    sales_coefficient: f64,
    /// Coefficient on the seasonal indicator
    seasonal_coefficient: f64,
}

impl LinearRegression {
    /// Create a new linear regression model
    pub fn new() -> Self {
        Self {
            name: "Linear Regression (OLS)".to_string(),
        }
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for LinearRegression {
    type Trained = TrainedLinearRegression;

    fn train(&self, features: &FeatureSet) -> Result<TrainedLinearRegression> {
        if features.len() < 2 {
            return Err(ForecastError::DegenerateFit(format!(
                "Insufficient data for OLS. Need at least 2 observations, got {}.",
                features.len()
            )));
        }

        // Normal equations over the design matrix [1, sales, month]
        let (gram, moments) = normal_equations(features);

        if let Some(solution) = solve_linear_system(gram, moments) {
            return Ok(TrainedLinearRegression {
                name: self.name.clone(),
                intercept: solution[0],
                sales_coefficient: solution[1],
                seasonal_coefficient: solution[2],
            });
        }

        // A seasonal indicator held constant across rows makes the month
        // column a multiple of the intercept column. Prune it and refit on
        // sales alone, pinning the seasonal coefficient to zero.
        let (intercept, sales_coefficient) = fit_sales_only(features)?;

        Ok(TrainedLinearRegression {
            name: self.name.clone(),
            intercept,
            sales_coefficient,
            seasonal_coefficient: 0.0,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedLinearRegression {
    fn predict(&self, last_month_sales: f64, month: u32) -> f64 {
        self.intercept
            + self.sales_coefficient * last_month_sales
            + self.seasonal_coefficient * f64::from(month)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedLinearRegression {
    /// Get the intercept term
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the coefficient on the historical sales feature
    pub fn sales_coefficient(&self) -> f64 {
        self.sales_coefficient
    }

    /// Get the coefficient on the seasonal indicator
    pub fn seasonal_coefficient(&self) -> f64 {
        self.seasonal_coefficient
    }

    /// Serialize the trained model to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a trained model from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the model artifact to disk.
    ///
    /// Advisory convenience only; the in-memory model is the source of
    /// truth and concurrent writers follow last-writer-wins.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a model artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// Accumulate the normal equations XᵀX and Xᵀy for the design matrix [1, sales, month]
fn normal_equations(features: &FeatureSet) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut gram = vec![vec![0.0; 3]; 3];
    let mut moments = vec![0.0; 3];

    for (feature, &target) in features.x().iter().zip(features.y()) {
        let row = [1.0, feature[0], feature[1]];

        for i in 0..3 {
            for j in 0..3 {
                gram[i][j] += row[i] * row[j];
            }
            moments[i] += row[i] * target;
        }
    }

    (gram, moments)
}

/// Refit with the seasonal column pruned: current ~ intercept + sales
fn fit_sales_only(features: &FeatureSet) -> Result<(f64, f64)> {
    let mut gram = vec![vec![0.0; 2]; 2];
    let mut moments = vec![0.0; 2];

    for (feature, &target) in features.x().iter().zip(features.y()) {
        let row = [1.0, feature[0]];

        for i in 0..2 {
            for j in 0..2 {
                gram[i][j] += row[i] * row[j];
            }
            moments[i] += row[i] * target;
        }
    }

    let solution = solve_linear_system(gram, moments).ok_or_else(|| {
        ForecastError::DegenerateFit(
            "Historical sales values have no variation; no unique regression line exists"
                .to_string(),
        )
    })?;

    Ok((solution[0], solution[1]))
}

/// Solve a small linear system by Gaussian elimination with partial pivoting.
///
/// Returns None when a pivot falls below the matrix scale, i.e. the system
/// has no unique solution.
fn solve_linear_system(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    let scale = a
        .iter()
        .flat_map(|row| row.iter())
        .fold(0.0_f64, |acc, value| acc.max(value.abs()))
        .max(1.0);

    for col in 0..n {
        let mut pivot_row = col;
        for row in col + 1..n {
            if a[row][col].abs() > a[pivot_row][col].abs() {
                pivot_row = row;
            }
        }

        if a[pivot_row][col].abs() < SINGULAR_EPS * scale {
            return None;
        }

        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = vec![0.0; n];
    for col in (0..n).rev() {
        let mut sum = b[col];
        for k in col + 1..n {
            sum -= a[col][k] * solution[k];
        }
        solution[col] = sum / a[col][col];
    }

    Some(solution)
}
