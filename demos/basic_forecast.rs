use forecast_sales::data::SalesDataset;
use forecast_sales::engine::forecast_two_steps;
use forecast_sales::features::{build_features, current_month};
use forecast_sales::models::linear::LinearRegression;
use forecast_sales::models::{ForecastModel, TrainedForecastModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Forecast Sales: Basic Forecasting Example");
    println!("=========================================\n");

    // Create sample data
    println!("Creating sample sales history...");
    let data = create_sample_data()?;
    println!(
        "Sample data created: {} rows, products: {:?}\n",
        data.len(),
        data.products()?
    );

    // Fit one regression over the whole cleaned dataset
    println!("Training model...");
    let month = current_month();
    let features = build_features(&data, month)?;
    let model = LinearRegression::new().train(&features)?;
    println!(
        "{} trained: predicted = {:.4} + {:.4} * last_sales + {:.4} * month\n",
        model.name(),
        model.intercept(),
        model.sales_coefficient(),
        model.seasonal_coefficient()
    );

    // Two-step forecast for each product's latest observation
    for product in data.products()? {
        let observation = data.latest_for_product(&product)?;
        let forecast = forecast_two_steps(&model, observation.this_month_sales, month)?;

        println!("{}:", product);
        println!("  This month sales: {:.0}", observation.this_month_sales);
        println!("  Next month:       {:.2}", forecast.next_month);
        println!("  Month after:      {:.2}", forecast.month_after);
    }

    println!("\nForecasting complete!");

    Ok(())
}

/// Create a small sales history with a steady upward trend
fn create_sample_data() -> forecast_sales::error::Result<SalesDataset> {
    SalesDataset::new(
        vec![
            "Widget".to_string(),
            "Widget".to_string(),
            "Gadget".to_string(),
            "Gadget".to_string(),
            "Sprocket".to_string(),
        ],
        vec![100.0, 110.0, 50.0, 55.0, 200.0],
        vec![120.0, 130.0, 62.0, 68.0, 215.0],
        vec![110.0, 115.0, 60.0, 65.0, 210.0],
    )
}
