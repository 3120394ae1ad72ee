//! Differencing inverses on realistic level series.

use crimecast_arima::{ArimaError, difference, integrate, reconstruct};

const MURDERS: [f64; 12] = [
    880.0, 844.0, 776.0, 927.0, 1013.0, 1098.0, 1097.0, 1169.0, 1083.0, 1065.0, 1110.0, 998.0,
];

#[test]
fn reconstruct_inverts_difference_for_every_order() {
    for d in 0..MURDERS.len() {
        let dx = difference(&MURDERS, d).unwrap();
        assert_eq!(dx.len(), MURDERS.len() - d);
        let back = reconstruct(&dx, &MURDERS[MURDERS.len() - d..], d).unwrap();
        for (a, b) in back.iter().zip(MURDERS.iter()) {
            assert!((a - b).abs() < 1e-6, "d={d}: {back:?}");
        }
    }
}

#[test]
fn integrate_continues_forward_from_leading_values() {
    for d in 0..4 {
        let dx = difference(&MURDERS, d).unwrap();
        let levels = integrate(&dx, &MURDERS[..d], d).unwrap();
        assert_eq!(levels, MURDERS[d..].to_vec());
    }
}

#[test]
fn integrate_extends_a_series_with_its_last_values() {
    // Zero second differences continue the last linear trend.
    let x = [1.0, 2.0, 4.0, 7.0];
    let ext = integrate(&[0.0, 0.0], &x[2..], 2).unwrap();
    assert_eq!(ext, vec![10.0, 13.0]);
}

#[test]
fn difference_rejects_order_at_length() {
    let err = difference(&MURDERS, MURDERS.len()).unwrap_err();
    assert!(matches!(err, ArimaError::InvalidOrder { .. }));
}

#[test]
fn seed_count_must_match_order() {
    let err = integrate(&[1.0, 2.0], &[1.0], 2).unwrap_err();
    assert!(matches!(err, ArimaError::InvalidOrder { .. }));
    let err = reconstruct(&[1.0, 2.0], &[], 1).unwrap_err();
    assert!(matches!(err, ArimaError::InvalidOrder { .. }));
}
