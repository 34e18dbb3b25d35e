/// Compass bins, each spanning 22.5 degrees. North wraps around 0/360 and is
/// therefore split over the first and the last entry.
const DIRECTIONS: [(f64, f64, &str); 17] = [
    (0.0, 11.25, "N"),
    (11.25, 33.75, "NNE"),
    (33.75, 56.25, "NE"),
    (56.25, 78.75, "ENE"),
    (78.75, 101.25, "E"),
    (101.25, 123.75, "ESE"),
    (123.75, 146.25, "SE"),
    (146.25, 168.75, "SSE"),
    (168.75, 191.25, "S"),
    (191.25, 213.75, "SSW"),
    (213.75, 236.25, "SW"),
    (236.25, 258.75, "WSW"),
    (258.75, 281.25, "W"),
    (281.25, 303.75, "WNW"),
    (303.75, 326.25, "NW"),
    (326.25, 348.75, "NNW"),
    (348.75, 360.0, "N"),
];

/// Translates a wind bearing in degrees to one of 16 cardinal labels (N, NNE, NE, ...).
/// Bins are half-open, i.e. lower bound inclusive and upper bound exclusive.
///
/// Returns "Unknown" for anything outside [0, 360), NaN included.
///
/// # Arguments
///
/// * 'degrees' - the bearing to translate
pub fn cardinal_direction(degrees: f64) -> &'static str {
    DIRECTIONS
        .iter()
        .find(|(lower, upper, _)| degrees >= *lower && degrees < *upper)
        .map_or("Unknown", |(_, _, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
        "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
    ];

    #[test]
    fn every_integer_bearing_has_a_label() {
        for d in 0..360 {
            let label = cardinal_direction(d as f64);
            assert!(LABELS.contains(&label), "{} gave {}", d, label);
        }
    }

    #[test]
    fn north_wraps_around_zero() {
        assert_eq!(cardinal_direction(0.0), "N");
        assert_eq!(cardinal_direction(11.0), "N");
        assert_eq!(cardinal_direction(349.0), "N");
        assert_eq!(cardinal_direction(359.9), "N");
    }

    #[test]
    fn bin_edges() {
        assert_eq!(cardinal_direction(11.25), "NNE");
        assert_eq!(cardinal_direction(45.0), "NE");
        assert_eq!(cardinal_direction(90.0), "E");
        assert_eq!(cardinal_direction(180.0), "S");
        assert_eq!(cardinal_direction(191.25), "SSW");
        assert_eq!(cardinal_direction(270.0), "W");
        assert_eq!(cardinal_direction(348.7), "NNW");
    }

    #[test]
    fn fractional_bearings_are_classified() {
        assert_eq!(cardinal_direction(22.5), "NNE");
        assert_eq!(cardinal_direction(123.5), "ESE");
        assert_eq!(cardinal_direction(235.9), "SW");
    }

    #[test]
    fn out_of_range_is_unknown() {
        assert_eq!(cardinal_direction(360.0), "Unknown");
        assert_eq!(cardinal_direction(-0.5), "Unknown");
        assert_eq!(cardinal_direction(f64::NAN), "Unknown");
    }
}
