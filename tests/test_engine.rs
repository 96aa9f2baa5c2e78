use assert_approx_eq::assert_approx_eq;
use forecast_sales::engine::forecast_two_steps;
use forecast_sales::error::ForecastError;
use forecast_sales::features::FeatureSet;
use forecast_sales::models::linear::LinearRegression;
use forecast_sales::models::ForecastModel;

/// Train on an exact y = 2x + 1 relation with the month held at 6
fn train_doubling_model() -> forecast_sales::models::linear::TrainedLinearRegression {
    let x = vec![[1.0, 6.0], [2.0, 6.0], [3.0, 6.0], [4.0, 6.0]];
    let y = vec![3.0, 5.0, 7.0, 9.0];
    let features = FeatureSet::new(x, y).unwrap();

    LinearRegression::new().train(&features).unwrap()
}

#[test]
fn test_two_step_forecast_feeds_prediction_back() {
    let model = train_doubling_model();

    let forecast = forecast_two_steps(&model, 10.0, 6).unwrap();

    // Step one from the observation, step two from step one's output
    assert_approx_eq!(forecast.next_month, 21.0, 1e-8);
    assert_approx_eq!(forecast.month_after, 43.0, 1e-8);
}

#[test]
fn test_seasonal_indicator_constant_across_steps() {
    // Exact generator y = 1 + 2x + 3m, full-rank because the month varies
    let x = vec![[1.0, 1.0], [2.0, 2.0], [3.0, 1.0], [4.0, 2.0], [5.0, 3.0]];
    let y: Vec<f64> = x.iter().map(|row| 1.0 + 2.0 * row[0] + 3.0 * row[1]).collect();
    let features = FeatureSet::new(x, y).unwrap();
    let model = LinearRegression::new().train(&features).unwrap();

    let forecast = forecast_two_steps(&model, 5.0, 2).unwrap();

    // Both steps evaluate with month = 2
    assert_approx_eq!(forecast.next_month, 1.0 + 2.0 * 5.0 + 3.0 * 2.0, 1e-6);
    assert_approx_eq!(
        forecast.month_after,
        1.0 + 2.0 * forecast.next_month + 3.0 * 2.0,
        1e-6
    );
}

#[test]
fn test_forecast_is_monotone_in_observed_sales() {
    let model = train_doubling_model();

    let higher = forecast_two_steps(&model, 20.0, 6).unwrap();
    let lower = forecast_two_steps(&model, 10.0, 6).unwrap();

    assert!(higher.next_month >= lower.next_month);
    assert!(higher.month_after >= lower.month_after);
}

#[test]
fn test_forecast_may_be_negative() {
    // y = -x keeps predictions unbounded below; clamping is policy work
    let x = vec![[1.0, 6.0], [2.0, 6.0], [3.0, 6.0]];
    let y = vec![-1.0, -2.0, -3.0];
    let features = FeatureSet::new(x, y).unwrap();
    let model = LinearRegression::new().train(&features).unwrap();

    let forecast = forecast_two_steps(&model, 10.0, 6).unwrap();
    assert!(forecast.next_month < 0.0);
}

#[test]
fn test_invalid_month_is_rejected() {
    let model = train_doubling_model();

    let result = forecast_two_steps(&model, 10.0, 0);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));

    let result = forecast_two_steps(&model, 10.0, 13);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
}

#[test]
fn test_forecast_is_deterministic() {
    let model = train_doubling_model();

    let first = forecast_two_steps(&model, 10.0, 6).unwrap();
    let second = forecast_two_steps(&model, 10.0, 6).unwrap();

    assert_eq!(first, second);
}
