//! Forecasting models for sales history

use crate::error::Result;
use crate::features::FeatureSet;
use std::fmt::Debug;

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Predict current-period sales from a feature row.
    ///
    /// Pure evaluation; never fails on a fitted model.
    fn predict(&self, last_month_sales: f64, month: u32) -> f64;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on sales features
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a feature set
    fn train(&self, features: &FeatureSet) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod linear;
