//! Jump recognizer for rope skipping and trampoline jumping.

use crate::recognition::event::RepetitionEvent;
use crate::recognition::ExerciseRecognizer;
use crate::sensors::{SensorKind, SensorSample};
use tracing::debug;

/// Below this acceleration magnitude the user is in free fall, in m/s².
const THRESHOLD_FALLING: f64 = 2.5;

/// Above this acceleration magnitude the user is pushing off, in m/s².
const THRESHOLD_JUMPING: f64 = 20.0;

/// Phase of the jump cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotionState {
    /// Standing still or moving gently
    Relaxing,
    /// Free fall detected, waiting for the push-off
    Prepare,
    /// Push-off spike seen, airborne
    Jumping,
    /// Back in free fall after the push-off
    Falling,
}

/// Detects jumps from the 3-axis acceleration magnitude.
///
/// One jump cycle is free fall (takeoff), a push-off spike and free fall
/// again. The push-off must also reach 60% of the previous jump's peak so
/// that residual shaking after a hard jump is not counted. A cycle that does
/// not complete within `max_jump_duration_ms` is abandoned.
#[derive(Debug)]
pub struct JumpRecognizer {
    /// Longest plausible jump cycle for this exercise, in milliseconds
    max_jump_duration_ms: i64,
    state: MotionState,
    /// Timestamp of the last takeoff/push-off detection
    last_jump_detected_ms: i64,
    /// Peak acceleration magnitude of the jump in progress
    this_jump_peak: f64,
    /// Peak acceleration magnitude of the previous jump
    last_jump_peak: f64,
}

impl JumpRecognizer {
    /// Create a jump recognizer with a custom maximum cycle duration.
    pub fn new(max_jump_duration_ms: i64) -> Self {
        Self {
            max_jump_duration_ms,
            state: MotionState::Relaxing,
            last_jump_detected_ms: 0,
            this_jump_peak: 0.0,
            last_jump_peak: 0.0,
        }
    }

    /// Recognizer tuned for rope skipping (short, quick jumps).
    pub fn rope_skipping() -> Self {
        Self::new(1250)
    }

    /// Recognizer tuned for trampoline jumping (long airtime).
    pub fn trampoline() -> Self {
        Self::new(2500)
    }

    /// The configured maximum jump cycle duration in milliseconds.
    pub fn max_jump_duration_ms(&self) -> i64 {
        self.max_jump_duration_ms
    }
}

impl ExerciseRecognizer for JumpRecognizer {
    fn activated_sensors(&self) -> &'static [SensorKind] {
        &[SensorKind::Acceleration]
    }

    fn process(&mut self, sample: &SensorSample) -> Option<RepetitionEvent> {
        if sample.kind != SensorKind::Acceleration {
            return None;
        }
        let acceleration = sample.magnitude();
        let now = sample.timestamp_ms;
        let mut event = None;

        if self.state == MotionState::Relaxing && acceleration < THRESHOLD_FALLING {
            self.state = MotionState::Prepare;
            self.last_jump_detected_ms = now;
        } else if (self.state == MotionState::Prepare || self.state == MotionState::Falling)
            && acceleration > THRESHOLD_JUMPING
            && acceleration > self.last_jump_peak * 0.6
        {
            self.state = MotionState::Jumping;
            self.last_jump_detected_ms = now;
        } else if self.state == MotionState::Jumping && acceleration < THRESHOLD_FALLING {
            self.state = MotionState::Falling;

            event = Some(RepetitionEvent::new(
                self.last_jump_detected_ms,
                self.this_jump_peak,
            ));

            self.last_jump_peak = self.this_jump_peak;
            debug!(peak = self.last_jump_peak, "jump detected");
            self.this_jump_peak = 0.0;
        } else if self.state != MotionState::Relaxing
            && now - self.last_jump_detected_ms > self.max_jump_duration_ms
        {
            self.state = MotionState::Relaxing;
            self.last_jump_peak = 0.0;
        }

        if self.state == MotionState::Jumping {
            self.this_jump_peak = self.this_jump_peak.max(acceleration);
        }

        event
    }
}
