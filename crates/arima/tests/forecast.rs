//! End-to-end forecasts from fitted models.

use approx::assert_relative_eq;
use crimecast_arima::{ArimaError, ArimaSpec, Series, Z_95};

const CHHATTISGARH_MURDER: [f64; 12] = [
    880.0, 844.0, 776.0, 927.0, 1013.0, 1098.0, 1097.0, 1169.0, 1083.0, 1065.0, 1110.0, 998.0,
];

fn murders() -> Series {
    Series::new(2001, CHHATTISGARH_MURDER.to_vec()).unwrap()
}

#[test]
fn chhattisgarh_murder_arima_111() {
    let fit = ArimaSpec::new(1, 1, 1).fit(&murders()).unwrap();
    assert!(fit.aic().is_finite());
    assert!(fit.bic().is_finite());
    assert_eq!(fit.residuals().len(), 11);

    let forecast = fit.forecast(3).unwrap();
    assert_eq!(forecast.len(), 3);
    let years: Vec<i32> = forecast.steps().iter().map(|s| s.year).collect();
    assert_eq!(years, vec![2013, 2014, 2015]);
    for step in &forecast {
        assert!(
            (900.0..=1300.0).contains(&step.point),
            "{} forecast {} outside the historical band",
            step.year,
            step.point
        );
        assert!(step.lower < step.point && step.point < step.upper);
    }
}

#[test]
fn interval_width_is_non_decreasing() {
    for order in [(1, 1, 1), (1, 0, 0), (0, 1, 1), (2, 1, 0)] {
        let (p, d, q) = order;
        let forecast = ArimaSpec::new(p, d, q)
            .fit(&murders())
            .unwrap()
            .forecast(8)
            .unwrap();
        for pair in forecast.steps().windows(2) {
            assert!(
                pair[1].width() >= pair[0].width() - 1e-9,
                "order {order:?}: widths shrink {} -> {}",
                pair[0].width(),
                pair[1].width()
            );
        }
    }
}

#[test]
fn zero_horizon_is_rejected() {
    let fit = ArimaSpec::new(1, 1, 1).fit(&murders()).unwrap();
    let err = fit.forecast(0).unwrap_err();
    assert_eq!(err, ArimaError::InvalidHorizon { horizon: 0 });
}

#[test]
fn mean_model_forecasts_the_mean_with_variance_bounds() {
    let fit = ArimaSpec::new(0, 0, 0).fit(&murders()).unwrap();
    let n = CHHATTISGARH_MURDER.len() as f64;
    let mean = CHHATTISGARH_MURDER.iter().sum::<f64>() / n;
    let variance = CHHATTISGARH_MURDER
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / n;

    let forecast = fit.forecast(4).unwrap();
    for step in &forecast {
        assert_relative_eq!(step.point, mean, epsilon = 1e-9);
        assert_relative_eq!(step.upper, mean + Z_95 * variance.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(step.lower, mean - Z_95 * variance.sqrt(), epsilon = 1e-9);
    }
}

#[test]
fn random_walk_forecast_is_last_value() {
    let fit = ArimaSpec::new(0, 1, 0).fit(&murders()).unwrap();
    let forecast = fit.forecast(3).unwrap();
    for step in &forecast {
        assert_relative_eq!(step.point, 998.0, epsilon = 1e-9);
    }
    assert_relative_eq!(forecast.mean_point(), 998.0, epsilon = 1e-9);
}
