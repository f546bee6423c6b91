//! Pull-up recognizer based on smoothed acceleration.

use crate::recognition::event::RepetitionEvent;
use crate::recognition::ExerciseRecognizer;
use crate::sensors::{SensorKind, SensorSample};
use tracing::debug;

/// Exponential smoothing factor applied to the acceleration magnitude.
const SMOOTHING: f64 = 0.02;

/// Smoothed magnitude above this means the user is pulling up, in m/s².
const PULL_THRESHOLD: f64 = 10.2;

/// Smoothed magnitude below this means the user is hanging again, in m/s².
///
/// Deliberately below the pull threshold: the hysteresis gap keeps sensor
/// noise around gravitational rest (9.81) from toggling the state.
const RELAX_THRESHOLD: f64 = 9.65;

/// Gravitational baseline subtracted before scaling the intensity.
const GRAVITY: f64 = 9.81;

/// Minimum rest before the next pull-up, in milliseconds.
const MIN_REST_MS: i64 = 500;

/// Plausible duration range of one pull-up, in milliseconds.
const PULL_DURATION_RANGE_MS: std::ops::RangeInclusive<i64> = 400..=2000;

/// Phase of the pull-up cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotionState {
    /// Hanging or resting
    Relaxing,
    /// Pulling up
    Pulling,
}

/// Detects pull-ups with the phone in the user's pocket.
///
/// The raw magnitude is heavily smoothed, then a two-threshold hysteresis
/// splits the signal into pull and relax phases. A completed pull phase only
/// counts if the rest before it and its own duration are plausible, which
/// filters out walking to the bar and random jolts.
#[derive(Debug)]
pub struct PullupRecognizer {
    state: MotionState,
    /// Timestamp of the last Relaxing -> Pulling transition
    pull_started_ms: i64,
    /// Timestamp of the last Pulling -> Relaxing transition
    last_relax_ms: i64,
    /// Exponentially smoothed acceleration magnitude
    smoothed: f64,
    /// Peak of the smoothed magnitude since the last evaluation
    max_acceleration: f64,
}

impl PullupRecognizer {
    /// Create a new pull-up recognizer.
    pub fn new() -> Self {
        Self {
            state: MotionState::Relaxing,
            pull_started_ms: 0,
            last_relax_ms: 0,
            smoothed: 0.0,
            max_acceleration: 0.0,
        }
    }

    /// Excess g-force of the current pull, scaled to an intensity value.
    fn peak_intensity(&self) -> f64 {
        (self.max_acceleration - GRAVITY) * 10.0
    }

    /// Evaluate a finished pull phase and emit an event if it is plausible.
    fn evaluate_pull(&mut self, now: i64) -> Option<RepetitionEvent> {
        let rest = self.pull_started_ms - self.last_relax_ms;
        let duration = now - self.pull_started_ms;

        let valid = rest > MIN_REST_MS && PULL_DURATION_RANGE_MS.contains(&duration);
        debug!(
            rest_ms = rest,
            duration_ms = duration,
            intensity = self.peak_intensity(),
            valid,
            "pull-up candidate"
        );

        let event = if valid {
            Some(RepetitionEvent::new(
                self.pull_started_ms,
                self.peak_intensity(),
            ))
        } else {
            None
        };

        self.max_acceleration = 0.0;
        event
    }
}

impl Default for PullupRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseRecognizer for PullupRecognizer {
    fn activated_sensors(&self) -> &'static [SensorKind] {
        &[SensorKind::Acceleration]
    }

    fn process(&mut self, sample: &SensorSample) -> Option<RepetitionEvent> {
        if sample.kind != SensorKind::Acceleration {
            return None;
        }
        let now = sample.timestamp_ms;

        self.smoothed = (1.0 - SMOOTHING) * self.smoothed + SMOOTHING * sample.magnitude();
        self.max_acceleration = self.max_acceleration.max(self.smoothed);

        match self.state {
            MotionState::Relaxing if self.smoothed > PULL_THRESHOLD => {
                self.state = MotionState::Pulling;
                self.pull_started_ms = now;
                None
            }
            MotionState::Pulling if self.smoothed < RELAX_THRESHOLD => {
                self.state = MotionState::Relaxing;
                let event = self.evaluate_pull(now);
                self.last_relax_ms = now;
                event
            }
            _ => None,
        }
    }
}
