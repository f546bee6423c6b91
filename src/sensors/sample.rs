//! Sensor sample types for indoor exercise recognition.

/// Kind of physical sensor a sample originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// 3-axis accelerometer
    Acceleration,
    /// Proximity sensor (distance to the nearest object)
    Proximity,
    /// Hardware step detector (one pulse per detected step)
    StepDetector,
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorKind::Acceleration => write!(f, "Acceleration"),
            SensorKind::Proximity => write!(f, "Proximity"),
            SensorKind::StepDetector => write!(f, "Step Detector"),
        }
    }
}

/// A single timestamped measurement pushed into a recognizer.
///
/// Samples are ephemeral: they are produced by the sensor source, consumed
/// immediately by the active recognizer and never stored. Axes that a sensor
/// does not provide are zero (a proximity sample carries its distance in the
/// first slot only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    /// Which sensor produced this sample
    pub kind: SensorKind,
    /// Raw sensor values (x, y, z for acceleration)
    pub values: [f64; 3],
    /// Monotonic timestamp in milliseconds
    pub timestamp_ms: i64,
}

impl SensorSample {
    /// Create a 3-axis accelerometer sample (values in m/s²).
    pub fn acceleration(x: f64, y: f64, z: f64, timestamp_ms: i64) -> Self {
        Self {
            kind: SensorKind::Acceleration,
            values: [x, y, z],
            timestamp_ms,
        }
    }

    /// Create a proximity sample (distance in the sensor's own unit,
    /// usually centimeters).
    pub fn proximity(distance: f64, timestamp_ms: i64) -> Self {
        Self {
            kind: SensorKind::Proximity,
            values: [distance, 0.0, 0.0],
            timestamp_ms,
        }
    }

    /// Create a step-detector pulse sample.
    pub fn step_pulse(timestamp_ms: i64) -> Self {
        Self {
            kind: SensorKind::StepDetector,
            values: [0.0; 3],
            timestamp_ms,
        }
    }

    /// Euclidean norm of the three axes, in the unit of the raw values.
    pub fn magnitude(&self) -> f64 {
        let [x, y, z] = self.values;
        (x * x + y * y + z * z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let sample = SensorSample::acceleration(3.0, 4.0, 0.0, 0);
        assert!((sample.magnitude() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnitude_at_rest() {
        // A phone lying flat reports roughly gravity on one axis
        let sample = SensorSample::acceleration(0.0, 0.0, 9.81, 0);
        assert!((sample.magnitude() - 9.81).abs() < 1e-9);
    }

    #[test]
    fn test_proximity_carries_distance() {
        let sample = SensorSample::proximity(5.0, 100);
        assert_eq!(sample.kind, SensorKind::Proximity);
        assert_eq!(sample.values[0], 5.0);
        assert_eq!(sample.timestamp_ms, 100);
    }
}
