//! Per-product report assembly and rendering

use crate::data::{SalesDataset, SalesRecord};
use crate::engine::{forecast_two_steps, TwoStepForecast};
use crate::error::Result;
use crate::features::build_features;
use crate::models::linear::LinearRegression;
use crate::models::ForecastModel;
use crate::policy::{ProductionPolicy, Recommendation};
use std::fmt;

/// Full forecast report for one selected product
#[derive(Debug, Clone)]
pub struct ProductReport {
    /// The observation the report is based on
    pub observation: SalesRecord,
    /// Two-step sales forecast
    pub forecast: TwoStepForecast,
    /// Production recommendation
    pub recommendation: Recommendation,
}

impl ProductReport {
    /// Run the full pipeline for one product.
    ///
    /// Fits the regression over the whole cleaned dataset, forecasts two
    /// periods ahead from the product's most recent observation and derives
    /// the production recommendation. Either a full report is produced or
    /// an error; there are no partial results.
    pub fn build(
        data: &SalesDataset,
        product: &str,
        month: u32,
        policy: &ProductionPolicy,
    ) -> Result<Self> {
        let features = build_features(data, month)?;
        let model = LinearRegression::new().train(&features)?;

        let observation = data.latest_for_product(product)?;
        let forecast = forecast_two_steps(&model, observation.this_month_sales, month)?;
        let recommendation =
            policy.recommend(forecast.next_month, observation.last_month_production);

        Ok(Self {
            observation,
            forecast,
            recommendation,
        })
    }
}

impl fmt::Display for ProductReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product: {}", self.observation.product)?;
        writeln!(
            f,
            "  Last month sales:      {:.0}",
            self.observation.last_month_sales
        )?;
        writeln!(
            f,
            "  This month sales:      {:.0}",
            self.observation.this_month_sales
        )?;
        writeln!(
            f,
            "  Last month production: {:.0}",
            self.observation.last_month_production
        )?;
        writeln!(f, "Predicted sales:")?;
        writeln!(f, "  Next month:  {:.2}", self.forecast.next_month)?;
        writeln!(f, "  Month after: {:.2}", self.forecast.month_after)?;
        writeln!(
            f,
            "Recommendation: {} production ({:+.1}%)",
            self.recommendation.action, self.recommendation.percent_change
        )?;
        writeln!(
            f,
            "  Suggested production: {}",
            self.recommendation.suggested_production
        )?;
        Ok(())
    }
}
