// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Unweighted mean over a fixed number of closes.  `calculate_sma` averages the
// head of whatever slice it is handed; callers wanting the most recent window
// pass the trailing sub-slice, which is exactly what `trailing_sma` does.

/// Mean of the first `days` closes of `closes`.
///
/// Returns `None` when `days == 0` or the slice holds fewer than `days` values.
pub fn calculate_sma(closes: &[f64], days: usize) -> Option<f64> {
    if days == 0 || closes.len() < days {
        return None;
    }
    Some(closes[..days].iter().sum::<f64>() / days as f64)
}

/// Mean of the most recent `days` closes.
pub fn trailing_sma(closes: &[f64], days: usize) -> Option<f64> {
    let start = closes.len().checked_sub(days)?;
    calculate_sma(&closes[start..], days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_insufficient_data() {
        for len in 0..20 {
            let closes = vec![1.0; len];
            assert!(calculate_sma(&closes, 20).is_none(), "len {len}");
            assert!(trailing_sma(&closes, 20).is_none(), "len {len}");
        }
    }

    #[test]
    fn sma_period_zero() {
        assert!(calculate_sma(&[1.0, 2.0], 0).is_none());
        assert!(trailing_sma(&[1.0, 2.0], 0).is_none());
    }

    #[test]
    fn sma_of_identical_values() {
        let closes = vec![42.5; 20];
        assert_eq!(calculate_sma(&closes, 20), Some(42.5));
    }

    #[test]
    fn sma_takes_head_of_slice() {
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        // (1 + 2 + 3 + 4) / 4
        assert!((calculate_sma(&closes, 4).unwrap() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn trailing_sma_takes_most_recent_window() {
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        // (7 + 8 + 9 + 10) / 4
        assert!((trailing_sma(&closes, 4).unwrap() - 8.5).abs() < 1e-10);
    }

    #[test]
    fn head_and_trailing_agree_on_exact_length() {
        let closes = vec![3.0, 9.0, 6.0];
        assert_eq!(calculate_sma(&closes, 3), trailing_sma(&closes, 3));
    }
}
