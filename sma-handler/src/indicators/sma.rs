/// Calculate Simple Moving Average
///
/// # Arguments
/// * `prices` - Slice of prices
/// * `period` - SMA period
///
/// # Returns
/// Vector of Option<f64> with the same length as `prices`, None for values
/// before enough data is available
pub fn calculate_sma(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = prices.len();
    let mut sma = vec![None; n];

    if n < period || period == 0 {
        return sma;
    }

    // Calculate initial sum
    let mut sum: f64 = prices[..period].iter().sum();
    sma[period - 1] = Some(sum / period as f64);

    // Sliding window for subsequent values
    for i in period..n {
        sum = sum - prices[i - period] + prices[i];
        sma[i] = Some(sum / period as f64);
    }

    sma
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sma_basic() {
        let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let sma = calculate_sma(&prices, 3);

        assert_eq!(sma.len(), prices.len());
        assert!(sma[0].is_none());
        assert!(sma[1].is_none());
        assert_eq!(sma[2], Some(2.0)); // (1+2+3)/3
        assert_eq!(sma[3], Some(3.0)); // (2+3+4)/3
        assert_eq!(sma[9], Some(9.0)); // (8+9+10)/3
    }

    #[test]
    fn test_sma_period_larger_than_data() {
        let prices = vec![1.0, 2.0, 3.0];
        let sma = calculate_sma(&prices, 5);

        assert_eq!(sma.len(), 3);
        assert!(sma.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_sma_zero_period() {
        let sma = calculate_sma(&[1.0, 2.0], 0);
        assert_eq!(sma, vec![None, None]);
    }

    #[test]
    fn test_sma_period_one_is_identity() {
        let prices = [3.5, 1.25, 8.0];
        let sma = calculate_sma(&prices, 1);
        assert_eq!(sma, vec![Some(3.5), Some(1.25), Some(8.0)]);
    }

    #[test]
    fn test_sma_matches_direct_mean() {
        let prices = [150.0, 152.0, 153.0, 154.5, 156.0, 157.5, 159.0, 160.5, 162.0, 163.5];
        let sma = calculate_sma(&prices, 5);

        for (i, value) in sma.iter().enumerate() {
            if i < 4 {
                assert!(value.is_none());
            } else {
                let expected = prices[i - 4..=i].iter().sum::<f64>() / 5.0;
                assert_abs_diff_eq!(value.unwrap(), expected, epsilon = 1e-9);
            }
        }
        assert_abs_diff_eq!(sma[4].unwrap(), 153.1, epsilon = 1e-9);
        assert_abs_diff_eq!(sma[9].unwrap(), 160.5, epsilon = 1e-9);
    }
}
