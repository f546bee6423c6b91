//! Indoor workout recording.
//!
//! The recorder sits between the recognizers and the workout records: it
//! owns the recognizer for the session, batches repetition events into
//! stored samples and produces the finished [`IndoorWorkout`] with its
//! aggregate statistics.
//!
//! [`IndoorWorkout`]: crate::workouts::IndoorWorkout

pub mod recorder;
pub mod types;

pub use recorder::IndoorRecorder;
pub use types::{IndoorSample, RecorderError, RecordingStatus};
