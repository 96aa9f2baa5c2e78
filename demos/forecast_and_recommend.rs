use forecast_sales::data::SalesDataset;
use forecast_sales::features::{build_features, current_month};
use forecast_sales::models::linear::{LinearRegression, TrainedLinearRegression};
use forecast_sales::models::ForecastModel;
use forecast_sales::policy::ProductionPolicy;
use forecast_sales::report::ProductReport;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Forecast Sales: Forecast and Production Recommendation");
    println!("======================================================\n");

    let data = create_sample_data()?;
    let month = current_month();
    let policy = ProductionPolicy::default();

    // Full report per product
    for product in data.products()? {
        let report = ProductReport::build(&data, &product, month, &policy)?;
        println!("{}", report);
    }

    // Optional model artifact: write after fitting, read back before predicting.
    // The in-memory path above never depends on this.
    let features = build_features(&data, month)?;
    let model = LinearRegression::new().train(&features)?;

    let artifact = std::env::temp_dir().join("forecast_sales_model.json");
    model.save(&artifact)?;
    let restored = TrainedLinearRegression::load(&artifact)?;
    println!(
        "Model artifact round-trip at {}: intercept {:.4} -> {:.4}",
        artifact.display(),
        model.intercept(),
        restored.intercept()
    );

    Ok(())
}

/// Create a sales history with rising, falling and flat products
fn create_sample_data() -> forecast_sales::error::Result<SalesDataset> {
    SalesDataset::new(
        vec![
            "Widget".to_string(),
            "Widget".to_string(),
            "Gadget".to_string(),
            "Gadget".to_string(),
            "Sprocket".to_string(),
            "Sprocket".to_string(),
        ],
        vec![100.0, 110.0, 80.0, 70.0, 150.0, 150.0],
        vec![110.0, 125.0, 70.0, 60.0, 150.0, 151.0],
        vec![105.0, 115.0, 75.0, 68.0, 150.0, 150.0],
    )
}
