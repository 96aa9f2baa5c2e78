//! Sales history ingestion, validation and cleaning

use crate::error::{ForecastError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Name of the product identifier column
pub const PRODUCT_COLUMN: &str = "product";
/// Name of the prior-period sales column
pub const LAST_SALES_COLUMN: &str = "last_month_sales";
/// Name of the current-period sales column
pub const THIS_SALES_COLUMN: &str = "this_month_sales";
/// Name of the prior-period production column
pub const PRODUCTION_COLUMN: &str = "last_month_production";

/// Columns an input table must carry, checked exactly
pub const REQUIRED_COLUMNS: [&str; 4] = [
    PRODUCT_COLUMN,
    LAST_SALES_COLUMN,
    THIS_SALES_COLUMN,
    PRODUCTION_COLUMN,
];

/// Columns coerced to numeric values during cleaning
pub const NUMERIC_COLUMNS: [&str; 3] = [LAST_SALES_COLUMN, THIS_SALES_COLUMN, PRODUCTION_COLUMN];

/// One observed row for a product
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    /// Product identifier
    pub product: String,
    /// Sales observed in the prior period
    pub last_month_sales: f64,
    /// Sales observed in the current period
    pub this_month_sales: f64,
    /// Production quantity in the prior period
    pub last_month_production: f64,
}

/// Validated sales history with all numeric columns coerced and cleaned
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// Data frame containing the cleaned sales history
    df: DataFrame,
}

/// Data loader for sales history tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load sales history from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<SalesDataset> {
        let file = File::open(path)?;
        // Use polars DataFrame reader directly
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        SalesDataset::validate(df)
    }

    /// Validate an existing DataFrame as sales history
    pub fn from_dataframe(df: DataFrame) -> Result<SalesDataset> {
        SalesDataset::validate(df)
    }
}

impl SalesDataset {
    /// Create a new SalesDataset from parallel column vectors (for testing)
    pub fn new(
        products: Vec<String>,
        last_month_sales: Vec<f64>,
        this_month_sales: Vec<f64>,
        last_month_production: Vec<f64>,
    ) -> Result<Self> {
        let df = DataFrame::new(vec![
            Series::new(PRODUCT_COLUMN, products),
            Series::new(LAST_SALES_COLUMN, last_month_sales),
            Series::new(THIS_SALES_COLUMN, this_month_sales),
            Series::new(PRODUCTION_COLUMN, last_month_production),
        ])?;

        Self::validate(df)
    }

    /// Validate and clean a raw table.
    ///
    /// Fails with `SchemaError` before any numeric work if a required column
    /// is absent. Coerces the numeric columns cell by cell, drops rows with
    /// a value that does not coerce, and fails with `EmptyDataset` if no
    /// valid rows remain.
    pub fn validate(df: DataFrame) -> Result<Self> {
        let column_names = df.get_column_names();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !column_names.iter().any(|name| name == required))
            .collect();

        if !missing.is_empty() {
            return Err(ForecastError::SchemaError(format!(
                "Input table is missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut df = df;

        // Product identifiers are compared as strings
        let products = df.column(PRODUCT_COLUMN)?.cast(&DataType::Utf8)?;
        df.with_column(products)?;

        // Cells that fail numeric coercion become null
        for column in NUMERIC_COLUMNS {
            let coerced = df.column(column)?.cast(&DataType::Float64)?;
            df.with_column(coerced)?;
        }

        let mut valid = df.column(NUMERIC_COLUMNS[0])?.is_not_null();
        for column in &NUMERIC_COLUMNS[1..] {
            valid = valid & df.column(column)?.is_not_null();
        }

        let cleaned = df.filter(&valid)?;
        if cleaned.height() == 0 {
            return Err(ForecastError::EmptyDataset(
                "No rows with valid numeric values remain after cleaning".to_string(),
            ));
        }

        Ok(Self { df: cleaned })
    }

    /// Get the cleaned DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get the number of cleaned rows
    pub fn len(&self) -> usize {
        self.df.height()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Get the prior-period sales as a vector
    pub fn last_month_sales(&self) -> Result<Vec<f64>> {
        self.column_as_f64(LAST_SALES_COLUMN)
    }

    /// Get the current-period sales as a vector
    pub fn this_month_sales(&self) -> Result<Vec<f64>> {
        self.column_as_f64(THIS_SALES_COLUMN)
    }

    /// Get the prior-period production quantities as a vector
    pub fn last_month_production(&self) -> Result<Vec<f64>> {
        self.column_as_f64(PRODUCTION_COLUMN)
    }

    /// Get the distinct product identifiers in first-seen order
    pub fn products(&self) -> Result<Vec<String>> {
        let ids = self.df.column(PRODUCT_COLUMN)?;
        let mut products: Vec<String> = Vec::new();

        for id in ids.utf8()?.into_iter().flatten() {
            if !products.iter().any(|seen| seen == id) {
                products.push(id.to_string());
            }
        }

        Ok(products)
    }

    /// Get the most recent valid observation for a product.
    ///
    /// Takes the last cleaned row matching the identifier in document order;
    /// fails with `SelectionError` if the product has no valid rows.
    pub fn latest_for_product(&self, product: &str) -> Result<SalesRecord> {
        let ids = self.df.column(PRODUCT_COLUMN)?;
        let mut latest = None;

        for (index, id) in ids.utf8()?.into_iter().enumerate() {
            if id == Some(product) {
                latest = Some(index);
            }
        }

        let index = latest.ok_or_else(|| {
            ForecastError::SelectionError(format!(
                "Product '{}' has no valid rows in the dataset",
                product
            ))
        })?;

        Ok(SalesRecord {
            product: product.to_string(),
            last_month_sales: self.value_at(LAST_SALES_COLUMN, index)?,
            this_month_sales: self.value_at(THIS_SALES_COLUMN, index)?,
            last_month_production: self.value_at(PRODUCTION_COLUMN, index)?,
        })
    }

    /// Helper method to get a column as f64 values
    fn column_as_f64(&self, column_name: &str) -> Result<Vec<f64>> {
        let col = self.df.column(column_name).map_err(|e| {
            ForecastError::PolarsError(format!("Column '{}' not found: {}", column_name, e))
        })?;

        Ok(col.f64()?.into_iter().flatten().collect())
    }

    /// Helper method to get a single cell as f64
    fn value_at(&self, column_name: &str, index: usize) -> Result<f64> {
        let col = self.df.column(column_name)?;

        col.f64()?.get(index).ok_or_else(|| {
            ForecastError::PolarsError(format!(
                "Row {} has no value in column '{}'",
                index, column_name
            ))
        })
    }
}
