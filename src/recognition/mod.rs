//! Repetition recognition for indoor workouts.
//!
//! Each recognizer is a small state machine fed one [`SensorSample`] at a
//! time; it returns at most one [`RepetitionEvent`] per sample. Samples of a
//! kind a recognizer does not understand are ignored, so the caller may
//! forward a mixed sensor stream unfiltered.

pub mod event;
pub mod jump;
pub mod proximity;
pub mod pullup;
pub mod step;

pub use event::RepetitionEvent;
pub use jump::JumpRecognizer;
pub use proximity::ProximityRecognizer;
pub use pullup::PullupRecognizer;
pub use step::StepRecognizer;

use crate::sensors::{SensorKind, SensorSample};
use crate::workouts::types::{
    WORKOUT_TYPE_ID_PULL_UPS, WORKOUT_TYPE_ID_PUSH_UPS, WORKOUT_TYPE_ID_ROPE_SKIPPING,
    WORKOUT_TYPE_ID_TRAMPOLINE_JUMPING, WORKOUT_TYPE_ID_TREADMILL,
};

/// A streaming classifier turning raw sensor samples into repetitions.
///
/// Implementations hold only their own private state, process samples
/// strictly in arrival order and never perform IO; processing a sample is
/// synchronous and emits zero or one event. Dropping the recognizer is all
/// the cleanup there is.
pub trait ExerciseRecognizer {
    /// The physical sensors this recognizer needs; the caller activates
    /// exactly these.
    fn activated_sensors(&self) -> &'static [SensorKind];

    /// Feed the next sample; returns a repetition event if one completed.
    fn process(&mut self, sample: &SensorSample) -> Option<RepetitionEvent>;
}

/// Select the recognizer for a workout type.
///
/// Returns `None` for types without a defined recognizer; repetition
/// counting is simply disabled for those.
pub fn recognizer_for_type(workout_type_id: &str) -> Option<Box<dyn ExerciseRecognizer + Send>> {
    match workout_type_id {
        WORKOUT_TYPE_ID_TREADMILL => Some(Box::new(StepRecognizer::new())),
        WORKOUT_TYPE_ID_ROPE_SKIPPING => Some(Box::new(JumpRecognizer::rope_skipping())),
        WORKOUT_TYPE_ID_TRAMPOLINE_JUMPING => Some(Box::new(JumpRecognizer::trampoline())),
        WORKOUT_TYPE_ID_PUSH_UPS => Some(Box::new(ProximityRecognizer::new())),
        WORKOUT_TYPE_ID_PULL_UPS => Some(Box::new(PullupRecognizer::new())),
        _ => None,
    }
}
