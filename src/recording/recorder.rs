//! Indoor workout recorder.
//!
//! Owns the active recognizer for a session, batches its repetition events
//! into [`IndoorSample`] windows and produces the finished [`IndoorWorkout`]
//! record with aggregate statistics and a calorie estimate.

use crate::calories::CalorieCalculator;
use crate::recognition::{recognizer_for_type, ExerciseRecognizer, RepetitionEvent};
use crate::recording::types::{IndoorSample, RecorderError, RecordingStatus};
use crate::sensors::{SensorKind, SensorSample};
use crate::workouts::types::{UserMeasurements, WorkoutType};
use crate::workouts::workout::{IndoorWorkout, Workout};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// A gap longer than this closes the current aggregation window, in ms.
const WINDOW_CUTOFF_MS: i64 = 10_000;

/// Records one indoor workout session.
///
/// The caller activates the sensors named by [`activated_sensors`] and
/// pushes every sample through [`process_sample`]; the recorder does the
/// rest. Samples are dropped while paused.
///
/// [`activated_sensors`]: IndoorRecorder::activated_sensors
/// [`process_sample`]: IndoorRecorder::process_sample
pub struct IndoorRecorder {
    workout_type: WorkoutType,
    recognizer: Option<Box<dyn ExerciseRecognizer + Send>>,
    status: RecordingStatus,
    started_at: Option<DateTime<Utc>>,
    /// Monotonic timestamp of the session start
    start_ms: i64,
    /// Total paused time so far
    paused_ms: i64,
    /// When the current pause began
    pause_started_ms: Option<i64>,
    /// Closed and open aggregation windows; the last entry is the open one
    samples: Vec<IndoorSample>,
    repetitions: u32,
    /// Heart rate to annotate new windows with, if a monitor is attached
    heart_rate_bpm: Option<u8>,
}

impl IndoorRecorder {
    /// Create a recorder for an indoor workout type.
    ///
    /// Types without a recognizer still record (time only, no repetition
    /// counting), matching how unknown types behave elsewhere.
    pub fn new(workout_type: WorkoutType) -> Self {
        let recognizer = recognizer_for_type(&workout_type.id);
        if recognizer.is_none() {
            warn!(
                workout_type = %workout_type.id,
                "no recognizer for workout type, repetition counting disabled"
            );
        }
        Self {
            workout_type,
            recognizer,
            status: RecordingStatus::Idle,
            started_at: None,
            start_ms: 0,
            paused_ms: 0,
            pause_started_ms: None,
            samples: Vec::new(),
            repetitions: 0,
            heart_rate_bpm: None,
        }
    }

    /// Current recorder status.
    pub fn status(&self) -> RecordingStatus {
        self.status
    }

    /// The sensors the caller must activate for this session.
    pub fn activated_sensors(&self) -> &'static [SensorKind] {
        self.recognizer
            .as_deref()
            .map(|recognizer| recognizer.activated_sensors())
            .unwrap_or(&[])
    }

    /// Start recording at the given monotonic timestamp.
    pub fn start(&mut self, start_ms: i64) -> Result<(), RecorderError> {
        if self.status != RecordingStatus::Idle {
            return Err(RecorderError::AlreadyRecording);
        }
        self.status = RecordingStatus::Recording;
        self.started_at = Some(Utc::now());
        self.start_ms = start_ms;
        info!(workout_type = %self.workout_type.id, "recording started");
        Ok(())
    }

    /// Pause recording; samples are dropped until [`resume`].
    ///
    /// [`resume`]: IndoorRecorder::resume
    pub fn pause(&mut self, at_ms: i64) -> Result<(), RecorderError> {
        if self.status != RecordingStatus::Recording {
            return Err(RecorderError::NotRecording);
        }
        self.status = RecordingStatus::Paused;
        self.pause_started_ms = Some(at_ms);
        info!("recording paused");
        Ok(())
    }

    /// Resume a paused recording.
    pub fn resume(&mut self, at_ms: i64) -> Result<(), RecorderError> {
        if self.status != RecordingStatus::Paused {
            return Err(RecorderError::NotRecording);
        }
        if let Some(paused_at) = self.pause_started_ms.take() {
            self.paused_ms += (at_ms - paused_at).max(0);
        }
        self.status = RecordingStatus::Recording;
        info!("recording resumed");
        Ok(())
    }

    /// Update the heart rate annotated onto new aggregation windows.
    pub fn set_heart_rate(&mut self, bpm: Option<u8>) {
        self.heart_rate_bpm = bpm;
    }

    /// Feed the next sensor sample.
    ///
    /// Returns the repetition event if the sample completed one. Paused
    /// sessions swallow samples; feeding an idle or finished recorder is an
    /// error.
    pub fn process_sample(
        &mut self,
        sample: &SensorSample,
    ) -> Result<Option<RepetitionEvent>, RecorderError> {
        match self.status {
            RecordingStatus::Idle | RecordingStatus::Finished => {
                return Err(RecorderError::NotRecording)
            }
            RecordingStatus::Paused => return Ok(None),
            RecordingStatus::Recording => {}
        }

        let Some(recognizer) = self.recognizer.as_deref_mut() else {
            return Ok(None);
        };
        match recognizer.process(sample) {
            // Events from before the session start are stale sensor state;
            // the caller must only see events that were actually counted
            Some(event) if event.timestamp_ms > self.start_ms => {
                self.on_repetition(event);
                Ok(Some(event))
            }
            _ => Ok(None),
        }
    }

    /// Total repetitions counted so far.
    pub fn repetitions_total(&self) -> u32 {
        self.repetitions
    }

    /// Average repetition frequency in Hz up to `now_ms`, pauses excluded.
    pub fn average_frequency(&self, now_ms: i64) -> f64 {
        let mut paused_ms = self.paused_ms;
        // A pause still in progress counts up to now
        if let Some(paused_at) = self.pause_started_ms {
            paused_ms += (now_ms - paused_at).max(0);
        }
        let elapsed_s = ((now_ms - self.start_ms - paused_ms) as f64 / 1000.0).max(1.0);
        f64::from(self.repetitions) / elapsed_s
    }

    /// Momentary repetition frequency in Hz over the last two aggregation
    /// windows, or 0 before two windows exist.
    pub fn current_frequency(&self) -> f64 {
        let [.., previous, current] = self.samples.as_slice() else {
            return 0.0;
        };
        let repetitions = previous.repetitions + current.repetitions;
        let time_ms = current.absolute_end_ms - previous.absolute_time_ms;
        if time_ms > 0 {
            f64::from(repetitions) / (time_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }

    /// Mean intensity of the current aggregation window.
    pub fn current_intensity(&self) -> f64 {
        self.samples.last().map(|s| s.intensity).unwrap_or(0.0)
    }

    /// Aggregation windows recorded so far.
    pub fn samples(&self) -> &[IndoorSample] {
        &self.samples
    }

    /// Finish the session and build the workout record.
    ///
    /// Start and end are cut to the first and last repetition, per-window
    /// frequencies are recalculated and the calorie estimate is written
    /// into the record.
    pub fn finish(
        &mut self,
        end_ms: i64,
        measurements: &UserMeasurements,
        calculator: &CalorieCalculator,
    ) -> Result<IndoorWorkout, RecorderError> {
        match self.status {
            RecordingStatus::Idle | RecordingStatus::Finished => {
                return Err(RecorderError::NotRecording)
            }
            RecordingStatus::Paused => {
                // Close the dangling pause before summing up
                if let Some(paused_at) = self.pause_started_ms.take() {
                    self.paused_ms += (end_ms - paused_at).max(0);
                }
            }
            RecordingStatus::Recording => {}
        }
        if self.samples.is_empty() {
            return Err(RecorderError::NoData);
        }
        self.status = RecordingStatus::Finished;

        self.recalculate_frequencies();

        let (first_ms, last_ms) = match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => (first.absolute_time_ms, last.absolute_end_ms),
            _ => return Err(RecorderError::NoData),
        };

        let mut workout = IndoorWorkout::new(&self.workout_type.id);
        if let Some(started_at) = self.started_at {
            workout.started_at = started_at;
        }
        workout.ended_at = Some(Utc::now());
        workout.duration_ms = (last_ms - first_ms - self.paused_ms).max(1);
        workout.repetitions = self.samples.iter().map(|s| s.repetitions).sum();
        workout.avg_frequency = 1000.0 * f64::from(workout.repetitions) / workout.duration_ms as f64;
        workout.max_frequency = self
            .samples
            .iter()
            .map(|s| s.frequency)
            .fold(0.0, f64::max);
        workout.avg_intensity =
            self.samples.iter().map(|s| s.intensity).sum::<f64>() / self.samples.len() as f64;
        workout.max_intensity = self
            .samples
            .iter()
            .map(|s| s.intensity)
            .fold(0.0, f64::max);
        workout.calories =
            calculator.calculate_calories(measurements, &Workout::Indoor(workout.clone()));

        info!(
            workout_type = %workout.workout_type_id,
            repetitions = workout.repetitions,
            calories = workout.calories,
            "recording finished"
        );
        Ok(workout)
    }

    fn on_repetition(&mut self, event: RepetitionEvent) {
        debug!(
            timestamp_ms = event.timestamp_ms,
            intensity = event.intensity,
            "repetition recognized"
        );
        self.repetitions += 1;

        let batch_size = self.workout_type.reps_per_sample.unwrap_or(1);
        if let Some(current) = self.samples.last_mut() {
            let window_open = current.repetitions < batch_size
                && event.timestamp_ms - current.absolute_time_ms < WINDOW_CUTOFF_MS;
            if window_open {
                let n = f64::from(current.repetitions);
                current.intensity = (n * current.intensity + event.intensity) / (n + 1.0);
                current.absolute_end_ms = event.timestamp_ms;
                current.repetitions += 1;
                return;
            }
        }

        self.samples.push(IndoorSample {
            absolute_time_ms: event.timestamp_ms,
            absolute_end_ms: event.timestamp_ms,
            relative_time_ms: event.timestamp_ms - self.start_ms - self.paused_ms,
            repetitions: 1,
            intensity: event.intensity,
            frequency: 0.0,
            heart_rate_bpm: self.heart_rate_bpm,
        });
    }

    /// Recalculate the exact frequency between consecutive windows.
    fn recalculate_frequencies(&mut self) {
        if self.samples.len() <= 2 {
            return;
        }
        let mut last_time = self.samples[0].absolute_time_ms;
        for sample in &mut self.samples {
            let time_diff = sample.absolute_time_ms - last_time;
            sample.frequency = if time_diff > 0 {
                1000.0 * f64::from(sample.repetitions) / time_diff as f64
            } else {
                0.0
            };
            last_time = sample.absolute_time_ms;
        }
    }
}
