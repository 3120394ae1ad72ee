//! Behaviour of the ADF test on simulated series.

use crimecast_arima::adf_test;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn random_walk(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut level = 0.0;
    (0..n)
        .map(|_| {
            level += normal.sample(&mut rng);
            level
        })
        .collect()
}

fn generate_ar1(phi: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut data = vec![0.0; n];
    for t in 1..n {
        data[t] = phi * data[t - 1] + normal.sample(&mut rng);
    }
    data
}

#[test]
fn random_walks_are_rarely_called_stationary() {
    let non_stationary = (0..20)
        .filter(|&seed| {
            let result = adf_test(&random_walk(100, seed)).unwrap();
            result.p_value() > 0.05
        })
        .count();
    assert!(non_stationary >= 15, "only {non_stationary}/20 random walks kept the unit root");
}

#[test]
fn stationary_ar1_rejects_unit_root() {
    let rejected = (0..10)
        .filter(|&seed| adf_test(&generate_ar1(0.5, 200, 100 + seed)).unwrap().is_stationary())
        .count();
    assert!(rejected >= 9, "only {rejected}/10 stationary series rejected the unit root");
}

#[test]
fn random_walk_statistic_exceeds_one_percent_critical_value() {
    let result = adf_test(&random_walk(250, 77)).unwrap();
    assert!(result.statistic() > result.critical_values()["1%"]);
}

#[test]
fn bundled_length_series_produces_valid_result() {
    let series = [
        880.0, 844.0, 776.0, 927.0, 1013.0, 1098.0, 1097.0, 1169.0, 1083.0, 1065.0, 1110.0, 998.0,
    ];
    let result = adf_test(&series).unwrap();
    assert!(result.used_lag() <= 4);
    assert!(result.nobs() >= 7 && result.nobs() <= 11);
    assert!((0.0..=1.0).contains(&result.p_value()));
}
