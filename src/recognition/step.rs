//! Step recognizer: pass-through of hardware step-detector pulses.

use crate::recognition::event::RepetitionEvent;
use crate::recognition::ExerciseRecognizer;
use crate::sensors::{SensorKind, SensorSample};

/// Counts steps on a treadmill.
///
/// The platform step detector already does the signal processing, so every
/// pulse becomes exactly one repetition at the pulse's timestamp.
#[derive(Debug, Default)]
pub struct StepRecognizer;

impl StepRecognizer {
    /// Create a new step recognizer.
    pub fn new() -> Self {
        Self
    }
}

impl ExerciseRecognizer for StepRecognizer {
    fn activated_sensors(&self) -> &'static [SensorKind] {
        &[SensorKind::StepDetector]
    }

    fn process(&mut self, sample: &SensorSample) -> Option<RepetitionEvent> {
        if sample.kind != SensorKind::StepDetector {
            return None;
        }
        Some(RepetitionEvent::at(sample.timestamp_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pulse_counts() {
        let mut recognizer = StepRecognizer::new();

        for i in 0..10 {
            let event = recognizer
                .process(&SensorSample::step_pulse(i * 500))
                .unwrap();
            assert_eq!(event.timestamp_ms, i * 500);
            assert_eq!(event.intensity, 0.0);
        }
    }

    #[test]
    fn test_other_sensors_ignored() {
        let mut recognizer = StepRecognizer::new();
        assert!(recognizer
            .process(&SensorSample::acceleration(0.0, 0.0, 9.81, 0))
            .is_none());
        assert!(recognizer
            .process(&SensorSample::proximity(1.0, 0))
            .is_none());
    }
}
