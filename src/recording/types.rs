//! Types for indoor workout recording.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of the indoor recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingStatus {
    /// Not recording
    #[default]
    Idle,
    /// Actively recording
    Recording,
    /// Recording paused
    Paused,
    /// Recording finished and turned into a workout record
    Finished,
}

impl std::fmt::Display for RecordingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordingStatus::Idle => write!(f, "Idle"),
            RecordingStatus::Recording => write!(f, "Recording"),
            RecordingStatus::Paused => write!(f, "Paused"),
            RecordingStatus::Finished => write!(f, "Finished"),
        }
    }
}

/// A stored aggregation window of repetitions.
///
/// Consecutive repetition events are batched into one sample until the
/// window holds the workout type's batch size or grows older than the
/// window cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndoorSample {
    /// Timestamp of the first repetition in the window, monotonic ms
    pub absolute_time_ms: i64,
    /// Timestamp of the last repetition in the window, monotonic ms
    pub absolute_end_ms: i64,
    /// Offset of the window start from the workout start, pauses excluded
    pub relative_time_ms: i64,
    /// Repetitions in this window
    pub repetitions: u32,
    /// Mean intensity of the repetitions in this window
    pub intensity: f64,
    /// Repetition frequency against the previous window, in Hz
    pub frequency: f64,
    /// Heart rate during the window, if a monitor is attached
    pub heart_rate_bpm: Option<u8>,
}

/// Errors from the indoor recorder.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// Already recording
    #[error("Recording already in progress")]
    AlreadyRecording,

    /// Not currently recording
    #[error("Not currently recording")]
    NotRecording,

    /// No repetitions were recorded
    #[error("No data recorded")]
    NoData,
}
