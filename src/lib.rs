//! # Forecast Sales
//!
//! A Rust library for product sales forecasting and production planning
//! recommendations.
//!
//! ## Features
//!
//! - Tabular sales history validation and cleaning (schema check, numeric
//!   coercion, row dropping)
//! - Ordinary least-squares regression of current sales on prior sales and
//!   a seasonal calendar-month indicator
//! - Autoregressive two-step sales forecasting
//! - Bounded production suggestions with a safety buffer and a three-way
//!   increase/decrease/maintain recommendation
//! - Per-product report rendering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forecast_sales::data::DataLoader;
//! use forecast_sales::features::current_month;
//! use forecast_sales::policy::ProductionPolicy;
//! use forecast_sales::report::ProductReport;
//!
//! # fn main() -> forecast_sales::error::Result<()> {
//! // Load and validate sales history
//! let data = DataLoader::from_csv("sales.csv")?;
//!
//! // List the products available for selection
//! let products = data.products()?;
//!
//! // Build the full report for one product
//! let report = ProductReport::build(
//!     &data,
//!     &products[0],
//!     current_month(),
//!     &ProductionPolicy::default(),
//! )?;
//!
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod features;
pub mod models;
pub mod policy;
pub mod report;

// Re-export commonly used types
pub use crate::data::{DataLoader, SalesDataset, SalesRecord};
pub use crate::engine::{forecast_two_steps, TwoStepForecast};
pub use crate::error::ForecastError;
pub use crate::features::{build_features, current_month, FeatureSet};
pub use crate::models::linear::{LinearRegression, TrainedLinearRegression};
pub use crate::models::{ForecastModel, TrainedForecastModel};
pub use crate::policy::{ProductionAction, ProductionPolicy, Recommendation};
pub use crate::report::ProductReport;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
