/// Centred rolling mean.
///
/// Position `i` averages the `window` values centred on it; for an even
/// window the extra value is taken from the left, as pandas does with
/// `rolling(window, center=True)`. Positions without a full window are
/// `None`. A `window` of zero yields all `None`.
///
/// # Example
///
/// ```
/// use crimecast_stats::moving_average;
///
/// let ma = moving_average(&[1.0, 2.0, 6.0, 7.0], 3);
/// assert_eq!(ma, vec![None, Some(3.0), Some(5.0), None]);
/// ```
pub fn moving_average(data: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = data.len();
    let mut out = vec![None; n];
    if window == 0 || window > n {
        return out;
    }
    // window ending at `end` is reported at `end - offset`
    let offset = (window - 1) / 2;
    let mut sum: f64 = data[..window - 1].iter().sum();
    for end in (window - 1)..n {
        sum += data[end];
        out[end - offset] = Some(sum / window as f64);
        sum -= data[end + 1 - window];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn window_three_leaves_both_edges_empty() {
        let ma = moving_average(&[880.0, 844.0, 776.0, 927.0, 1013.0], 3);
        assert_eq!(ma[0], None);
        assert_relative_eq!(ma[1].unwrap(), 833.333333, epsilon = 1e-5);
        assert_relative_eq!(ma[2].unwrap(), 849.0, epsilon = 1e-9);
        assert_relative_eq!(ma[3].unwrap(), 905.333333, epsilon = 1e-5);
        assert_eq!(ma[4], None);
    }

    #[test]
    fn even_window_leans_left() {
        // pandas: rolling(4, center=True) on 0..6 → NaN, NaN, 1.5, 2.5, 3.5, NaN
        let data: Vec<f64> = (0..6).map(f64::from).collect();
        let ma = moving_average(&data, 4);
        assert_eq!(ma, vec![None, None, Some(1.5), Some(2.5), Some(3.5), None]);
    }

    #[test]
    fn window_one_is_identity() {
        let ma = moving_average(&[1.0, 2.0], 1);
        assert_eq!(ma, vec![Some(1.0), Some(2.0)]);
    }

    #[test]
    fn window_larger_than_data() {
        assert_eq!(moving_average(&[1.0, 2.0], 3), vec![None, None]);
        assert_eq!(moving_average(&[1.0], 0), vec![None]);
        assert!(moving_average(&[], 3).is_empty());
    }
}
