//! Autoregressive two-step forecasting

use crate::error::Result;
use crate::features::validate_month;
use crate::models::TrainedForecastModel;

/// Two-step forward forecast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoStepForecast {
    /// Predicted sales for the next period
    pub next_month: f64,
    /// Predicted sales for the period after next
    pub month_after: f64,
}

/// Forecast the next two periods from the latest observed sales value.
///
/// The second step is autoregressive: the first prediction is fed back in
/// as the historical sales feature. The seasonal indicator is held constant
/// across both steps. Predictions are unbounded here; clamping happens in
/// the recommendation policy.
pub fn forecast_two_steps<M: TrainedForecastModel>(
    model: &M,
    observed_current_sales: f64,
    month: u32,
) -> Result<TwoStepForecast> {
    validate_month(month)?;

    let next_month = model.predict(observed_current_sales, month);
    let month_after = model.predict(next_month, month);

    Ok(TwoStepForecast {
        next_month,
        month_after,
    })
}
