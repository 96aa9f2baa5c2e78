use assert_approx_eq::assert_approx_eq;
use forecast_sales::error::ForecastError;
use forecast_sales::policy::{ProductionAction, ProductionPolicy};
use rstest::rstest;

/// Policy with no safety buffer so percent changes come out exact
fn flat_policy() -> ProductionPolicy {
    ProductionPolicy::new(1.0, 5.0).unwrap()
}

#[rstest]
#[case(106.0, 100.0, ProductionAction::Increase)] // +6% > threshold
#[case(94.0, 100.0, ProductionAction::Decrease)] // -6% < -threshold
#[case(105.0, 100.0, ProductionAction::Maintain)] // exactly +5% stays
#[case(95.0, 100.0, ProductionAction::Maintain)] // exactly -5% stays
#[case(100.0, 100.0, ProductionAction::Maintain)] // no change
fn test_threshold_boundaries(
    #[case] predicted: f64,
    #[case] prior: f64,
    #[case] expected: ProductionAction,
) {
    let recommendation = flat_policy().recommend(predicted, prior);
    assert_eq!(recommendation.action, expected);
}

#[test]
fn test_zero_prior_production_is_fully_new() {
    let recommendation = flat_policy().recommend(42.0, 0.0);

    // Defined as exactly 100 percent regardless of the suggested quantity
    assert_eq!(recommendation.percent_change, 100.0);
    assert_eq!(recommendation.action, ProductionAction::Increase);

    let recommendation = flat_policy().recommend(0.3, 0.0);
    assert_eq!(recommendation.percent_change, 100.0);
}

#[test]
fn test_unchanged_production_is_maintain() {
    let recommendation = flat_policy().recommend(115.0, 115.0);

    assert_eq!(recommendation.suggested_production, 115);
    assert_eq!(recommendation.percent_change, 0.0);
    assert_eq!(recommendation.action, ProductionAction::Maintain);
}

#[test]
fn test_safety_factor_buffers_forecast() {
    let policy = ProductionPolicy::default();
    let recommendation = policy.recommend(150.0, 115.0);

    // round(150 * 1.1) = 165
    assert_eq!(recommendation.suggested_production, 165);
    assert_approx_eq!(recommendation.percent_change, (165.0 - 115.0) / 115.0 * 100.0);
    assert_eq!(recommendation.action, ProductionAction::Increase);
}

#[test]
fn test_negative_forecast_clamps_to_zero() {
    let recommendation = ProductionPolicy::default().recommend(-50.0, 10.0);

    assert_eq!(recommendation.suggested_production, 0);
    assert_approx_eq!(recommendation.percent_change, -100.0);
    assert_eq!(recommendation.action, ProductionAction::Decrease);
}

#[test]
fn test_suggestion_rounds_to_nearest_unit() {
    let policy = flat_policy();

    assert_eq!(policy.recommend(10.4, 10.0).suggested_production, 10);
    assert_eq!(policy.recommend(10.5, 10.0).suggested_production, 11);
}

#[test]
fn test_default_policy_values() {
    let policy = ProductionPolicy::default();

    assert_approx_eq!(policy.safety_factor(), 1.1);
    assert_approx_eq!(policy.threshold_percent(), 5.0);
}

#[test]
fn test_policy_parameter_validation() {
    let result = ProductionPolicy::new(0.0, 5.0);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));

    let result = ProductionPolicy::new(-1.0, 5.0);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));

    let result = ProductionPolicy::new(1.1, -1.0);
    assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
}

#[test]
fn test_action_labels() {
    assert_eq!(ProductionAction::Increase.to_string(), "Increase");
    assert_eq!(ProductionAction::Decrease.to_string(), "Decrease");
    assert_eq!(ProductionAction::Maintain.to_string(), "Maintain");
}
