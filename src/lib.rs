//! RepTrack - Indoor Repetition Recognition and Calorie Estimation
//!
//! An open-source fitness tracking engine built in Rust. Recognizes
//! repetitions (steps, jumps, push-ups, pull-ups) from raw device sensor
//! streams, records them into indoor workout sessions and estimates
//! calories burned from MET tables fit to published compendium data.

pub mod calories;
pub mod recognition;
pub mod recording;
pub mod sensors;
pub mod workouts;

// Re-export commonly used types
pub use calories::calculator::CalorieCalculator;
pub use recognition::{recognizer_for_type, ExerciseRecognizer, RepetitionEvent};
pub use recording::recorder::IndoorRecorder;
pub use sensors::{SensorKind, SensorSample};
pub use workouts::types::{UserMeasurements, WorkoutType, WorkoutTypeRegistry};
pub use workouts::workout::{GpsWorkout, IndoorWorkout, Workout};
