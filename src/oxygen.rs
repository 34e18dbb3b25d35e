use crate::models::pollutants::PollutantReading;

/// Oxygen share of clean air in percent
pub const BASELINE_OXYGEN: f64 = 20.9;

/// Estimates ambient oxygen in percent as the baseline minus the pollutant load
/// scaled down by one million. It is a linear heuristic, not a calibrated model.
///
/// Never returns a negative value.
///
/// # Arguments
///
/// * 'pollutants' - the pollutant reading to base the estimate on
pub fn oxygen_concentration(pollutants: &PollutantReading) -> f64 {
    (BASELINE_OXYGEN - pollutants.total() / 1_000_000.0).max(0.0)
}
