//! Sparkline chart generation

/// Block characters of increasing height
const SPARK_BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Generate a sparkline from a series of values.
///
/// Values are normalized between the series minimum and maximum and
/// mapped onto the block ramp. With a `width` limit, longer series are
/// sampled down to fit. A constant series renders as a run of the
/// middle block.
pub fn spark_chart(values: &[f64], width: Option<usize>) -> String {
    if values.is_empty() {
        return String::new();
    }

    let sampled: Vec<f64> = match width {
        Some(w) if w > 0 && values.len() > w => {
            let step = values.len() as f64 / w as f64;
            (0..w).map(|i| values[(i as f64 * step) as usize]).collect()
        }
        _ => values.to_vec(),
    };

    let min = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return SPARK_BLOCKS[4].to_string().repeat(sampled.len());
    }

    sampled
        .iter()
        .map(|v| {
            let normalized = (v - min) / range;
            let index = (normalized * (SPARK_BLOCKS.len() - 1) as f64) as usize;
            SPARK_BLOCKS[index.min(SPARK_BLOCKS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        assert_eq!(spark_chart(&[], None), "");
    }

    #[test]
    fn test_extremes_map_to_extreme_blocks() {
        let chart = spark_chart(&[0.0, 50.0, 100.0], None);
        let chars: Vec<char> = chart.chars().collect();
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[0], ' ');
        assert_eq!(chars[2], '█');
    }

    #[test]
    fn test_constant_series_uses_middle_block() {
        assert_eq!(spark_chart(&[5.0, 5.0, 5.0, 5.0], None), "▄▄▄▄");
    }

    #[test]
    fn test_monotonic_series_never_descends() {
        let values: Vec<f64> = (0..20).map(|i| 1000.0 * 1.07f64.powi(i)).collect();
        let chart = spark_chart(&values, None);
        let heights: Vec<usize> = chart
            .chars()
            .map(|c| SPARK_BLOCKS.iter().position(|&b| b == c).unwrap())
            .collect();
        assert!(heights.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_width_limit_samples_series() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let chart = spark_chart(&values, Some(10));
        assert_eq!(chart.chars().count(), 10);
    }
}
