//! 월별 분배 테스트.
use approx::assert_relative_eq;
use co2_reduction_calculator::energy::{compute_monthly_breakdown, MonthlyWeights, MONTHS};
use co2_reduction_calculator::CalcError;
use rstest::rstest;

#[rstest]
#[case([1.0; MONTHS])]
#[case([0.85, 0.85, 0.95, 1.0, 1.05, 1.1, 1.15, 1.15, 1.05, 1.0, 0.95, 0.9])]
#[case([3.0, 0.01, 7.5, 2.2, 9.9, 0.4, 1.0, 1.0, 12.0, 0.3, 5.5, 0.07])]
fn monthly_sum_equals_annual_savings(#[case] weights: [f64; MONTHS]) {
    let weights = MonthlyWeights::new(weights).expect("valid weights");
    let annual = 1_040_249.0;
    let monthly = compute_monthly_breakdown(annual, &weights).unwrap();
    let total: f64 = monthly.iter().sum();
    assert_relative_eq!(total, annual, max_relative = 1e-6);
}

#[test]
fn months_follow_weight_ratio() {
    let mut w = [1.0; MONTHS];
    w[6] = 2.0;
    let weights = MonthlyWeights::new(w).unwrap();
    let monthly = compute_monthly_breakdown(1_300.0, &weights).unwrap();
    assert_relative_eq!(monthly[6], 200.0, epsilon = 1e-9);
    assert_relative_eq!(monthly[0], 100.0, epsilon = 1e-9);
}

#[test]
fn negative_savings_rejected() {
    let err = compute_monthly_breakdown(-5.0, &MonthlyWeights::default()).unwrap_err();
    assert!(matches!(err, CalcError::InvalidParameter { .. }));
}

#[rstest]
#[case(vec![1.0; 13])]
#[case(vec![])]
#[case(vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0])]
#[case(vec![1.0, 1.0, 1.0, 1.0, 1.0, f64::NAN, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0])]
fn malformed_weights_rejected(#[case] weights: Vec<f64>) {
    assert!(matches!(
        MonthlyWeights::try_from(weights),
        Err(CalcError::InvalidParameter {
            name: "monthly_weights",
            ..
        })
    ));
}

#[test]
fn weights_with_overflowing_sum_rejected() {
    assert!(matches!(
        MonthlyWeights::new([1e308; MONTHS]),
        Err(CalcError::InvalidParameter {
            name: "monthly_weights",
            ..
        })
    ));
}

#[rstest]
#[case(1_200.0, [1e300; MONTHS])]
#[case(1e308, [1.0; MONTHS])]
#[case(1e308, [1e-300, 1e300, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1e-300])]
fn extreme_values_stay_finite(#[case] annual: f64, #[case] weights: [f64; MONTHS]) {
    let weights = MonthlyWeights::new(weights).expect("finite weight sum");
    let monthly = compute_monthly_breakdown(annual, &weights).unwrap();
    assert!(monthly.iter().all(|m| m.is_finite() && *m >= 0.0));
    let total: f64 = monthly.iter().sum();
    assert_relative_eq!(total, annual, max_relative = 1e-6);
}
