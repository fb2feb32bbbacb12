//! Diverging climate-stripe colors.

use iris_stats::mean;

/// One HSL color per value: blue below the series mean, red at or above
/// it, with lightness falling from 90% at the mean to 40% at the largest
/// absolute deviation.
///
/// Intensity scales by the larger of the two deviation bounds so the scale
/// is symmetric around the mean; an all-equal series has zero intensity
/// everywhere. Empty input yields an empty vector.
pub fn stripe_colors(values: &[f64]) -> Vec<String> {
    if values.is_empty() {
        return Vec::new();
    }
    let mean = mean(values);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_shift = (max - mean).abs().max((min - mean).abs());

    values
        .iter()
        .map(|&value| {
            let deviation = value - mean;
            let intensity = if max_shift == 0.0 {
                0.0
            } else {
                (deviation.abs() / max_shift).min(1.0)
            };
            let lightness = 90.0 - intensity * 50.0;
            let hue = if deviation < 0.0 { 210 } else { 0 };
            format!("hsl({hue}, 80%, {lightness}%)")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_colors() {
        assert!(stripe_colors(&[]).is_empty());
    }

    #[test]
    fn extremes_reach_full_intensity() {
        // mean = 10, deviations -10 and +10, both at max shift
        let colors = stripe_colors(&[0.0, 10.0, 20.0]);
        assert_eq!(colors[0], "hsl(210, 80%, 40%)");
        assert_eq!(colors[1], "hsl(0, 80%, 90%)");
        assert_eq!(colors[2], "hsl(0, 80%, 40%)");
    }

    #[test]
    fn below_mean_is_blue_above_is_red() {
        let colors = stripe_colors(&[1.0, 3.0]);
        assert!(colors[0].starts_with("hsl(210"));
        assert!(colors[1].starts_with("hsl(0"));
    }

    #[test]
    fn constant_series_has_zero_intensity() {
        let colors = stripe_colors(&[5.0, 5.0, 5.0]);
        assert!(colors.iter().all(|c| c == "hsl(0, 80%, 90%)"));
    }
}
