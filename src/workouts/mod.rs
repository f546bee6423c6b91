//! Workout types, user measurements and completed-workout records.

pub mod types;
pub mod workout;

pub use types::{RecordingType, UserMeasurements, WorkoutType, WorkoutTypeRegistry};
pub use workout::{GpsWorkout, IndoorWorkout, Workout};
