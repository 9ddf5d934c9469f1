/// Score for a mean daily temperature in Celsius. Peaks at 10 for 21-27 °C
/// and falls off toward both extremes.
pub fn temperature_score(avg_temp_c: f64) -> i32 {
    let t = avg_temp_c;
    if (21.0..=27.0).contains(&t) {
        10
    } else if (18.0..21.0).contains(&t) || (t > 27.0 && t <= 29.0) {
        9
    } else if (15.0..18.0).contains(&t) || (t > 29.0 && t <= 31.0) {
        7
    } else if (10.0..15.0).contains(&t) || (t > 31.0 && t <= 34.0) {
        5
    } else if (5.0..10.0).contains(&t) || (t > 34.0 && t <= 37.0) {
        3
    } else {
        1
    }
}

/// Penalty for average daily precipitation in millimetres.
pub fn precipitation_penalty(avg_precipitation_mm: f64) -> i32 {
    let p = avg_precipitation_mm.max(0.0);
    if p < 1.0 {
        0
    } else if p < 2.5 {
        1
    } else if p < 5.0 {
        2
    } else if p < 8.0 {
        3
    } else {
        4
    }
}

/// Comfort score in 1..=10. Never increases as precipitation rises for a
/// fixed temperature.
pub fn comfort_score(avg_temp_c: f64, avg_precipitation_mm: f64) -> u8 {
    let raw = temperature_score(avg_temp_c) - precipitation_penalty(avg_precipitation_mm);
    raw.clamp(1, 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_dry_month_scores_ten() {
        assert_eq!(comfort_score(24.0, 0.2), 10);
    }

    #[test]
    fn test_extremes_bottom_out() {
        assert_eq!(comfort_score(-10.0, 12.0), 1);
        assert_eq!(comfort_score(42.0, 0.0), 1);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(temperature_score(21.0), 10);
        assert_eq!(temperature_score(27.0), 10);
        assert_eq!(temperature_score(20.99), 9);
        assert_eq!(temperature_score(27.01), 9);
        assert_eq!(temperature_score(4.99), 1);
    }

    #[test]
    fn test_score_non_increasing_in_precipitation() {
        let temps = [-5.0, 3.0, 8.0, 12.5, 16.0, 19.5, 24.0, 28.0, 30.0, 33.0, 36.0, 40.0];
        for temp in temps {
            let mut previous = u8::MAX;
            let mut precip = 0.0;
            while precip <= 20.0 {
                let score = comfort_score(temp, precip);
                assert!(score <= previous, "score rose at temp {} precip {}", temp, precip);
                assert!((1..=10).contains(&score));
                previous = score;
                precip += 0.25;
            }
        }
    }
}
