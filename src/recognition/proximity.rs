//! Proximity recognizer for push-ups.

use crate::recognition::event::RepetitionEvent;
use crate::recognition::ExerciseRecognizer;
use crate::sensors::{SensorKind, SensorSample};

/// Distances below this count as "close", in the proximity sensor's unit.
const THRESHOLD_DISTANCE: f64 = 2.0;

/// Counts push-ups with the phone lying under the user's chest.
///
/// Each falling edge of the proximity distance below the threshold is one
/// repetition; the latch prevents repeated low readings from re-triggering
/// until the user moves away again.
#[derive(Debug, Default)]
pub struct ProximityRecognizer {
    /// True while the last reading was below the threshold
    below_threshold: bool,
}

impl ProximityRecognizer {
    /// Create a new proximity recognizer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExerciseRecognizer for ProximityRecognizer {
    fn activated_sensors(&self) -> &'static [SensorKind] {
        &[SensorKind::Proximity]
    }

    fn process(&mut self, sample: &SensorSample) -> Option<RepetitionEvent> {
        if sample.kind != SensorKind::Proximity {
            return None;
        }
        if sample.values[0] < THRESHOLD_DISTANCE {
            if !self.below_threshold {
                self.below_threshold = true;
                return Some(RepetitionEvent::at(sample.timestamp_ms));
            }
        } else {
            self.below_threshold = false;
        }
        None
    }
}
