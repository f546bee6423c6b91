//! Linear speed-to-MET regression.

/// One calibration point relating average speed to average MET, taken from
/// the compendium of physical activities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedToMet {
    /// Average speed in miles per hour
    pub avg_speed_mph: f64,
    /// Average MET at that speed
    pub avg_met: f64,
}

impl SpeedToMet {
    /// Create a calibration point.
    pub const fn new(avg_speed_mph: f64, avg_met: f64) -> Self {
        Self {
            avg_speed_mph,
            avg_met,
        }
    }
}

/// Conversion factor from km/h to mph.
const KMH_TO_MPH: f64 = 0.621371;

/// A linear MET-over-speed model fit from calibration points.
///
/// Fit once via ordinary least squares at construction, stateless after
/// that. Constructing from an empty calibration set yields a degenerate
/// model which must not be queried; this is a programming error, not a
/// runtime condition.
#[derive(Debug, Clone, PartialEq)]
pub struct MetFunction {
    slope: f64,
    y_offset: f64,
}

impl MetFunction {
    /// Fit a linear model to the given calibration points.
    pub fn fit(lookup: &[SpeedToMet]) -> Self {
        if lookup.is_empty() {
            return Self {
                slope: 0.0,
                y_offset: 0.0,
            };
        }

        let n = lookup.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for point in lookup {
            sum_x += point.avg_speed_mph;
            sum_y += point.avg_met;
            sum_xy += point.avg_speed_mph * point.avg_met;
            sum_xx += point.avg_speed_mph * point.avg_speed_mph;
        }

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;
        let covariance_xy = sum_xy / n - mean_x * mean_y;
        let variance_x = sum_xx / n - mean_x * mean_x;

        if variance_x == 0.0 {
            // All points share one speed; the best constant model is the
            // mean MET.
            return Self {
                slope: 0.0,
                y_offset: mean_y,
            };
        }

        let slope = covariance_xy / variance_x;
        Self {
            slope,
            y_offset: mean_y - slope * mean_x,
        }
    }

    /// Whether this model was fit from an empty calibration set.
    pub fn is_degenerate(&self) -> bool {
        self.slope == 0.0 && self.y_offset == 0.0
    }

    /// Evaluate the model at a speed given in km/h.
    pub fn met_for_speed(&self, speed_kmh: f64) -> f64 {
        debug_assert!(
            !self.is_degenerate(),
            "querying a MET function fit from no calibration points"
        );
        if self.is_degenerate() {
            return 0.0;
        }
        let speed_mph = speed_kmh * KMH_TO_MPH;
        speed_mph * self.slope + self.y_offset
    }
}

impl std::fmt::Display for MetFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x + {}", self.slope, self.y_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_through_two_points() {
        // MET = speed_mph exactly
        let function = MetFunction::fit(&[SpeedToMet::new(1.0, 1.0), SpeedToMet::new(3.0, 3.0)]);
        let met = function.met_for_speed(2.0 / KMH_TO_MPH);
        assert!((met - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_degenerates_to_constant() {
        // Duplicated single calibration point: the regression collapses to
        // that point's MET at its own speed.
        let points = [SpeedToMet::new(5.0, 8.3), SpeedToMet::new(5.0, 8.3)];
        let function = MetFunction::fit(&points);
        let met = function.met_for_speed(5.0 / KMH_TO_MPH);
        assert!((met - 8.3).abs() < 0.01);
    }

    #[test]
    fn test_empty_fit_is_degenerate() {
        let function = MetFunction::fit(&[]);
        assert!(function.is_degenerate());
    }

    #[test]
    fn test_kmh_conversion() {
        // Flat model: MET independent of speed, offset carries the value
        let function = MetFunction::fit(&[SpeedToMet::new(2.0, 4.0), SpeedToMet::new(6.0, 4.0)]);
        assert!((function.met_for_speed(10.0) - 4.0).abs() < 1e-9);
        assert!((function.met_for_speed(20.0) - 4.0).abs() < 1e-9);
    }
}
