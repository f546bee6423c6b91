//! Completed-workout records consumed by the calorie engine.

use crate::workouts::types::{UserMeasurements, WORKOUT_TYPE_ID_TREADMILL};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A finished GPS-tracked outdoor workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpsWorkout {
    /// Unique identifier
    pub id: Uuid,
    /// Workout type id ("running", "cycling", ...)
    pub workout_type_id: String,
    /// Workout start timestamp
    pub started_at: DateTime<Utc>,
    /// Workout end timestamp
    pub ended_at: Option<DateTime<Utc>>,
    /// Active duration in milliseconds (pauses excluded)
    pub duration_ms: i64,
    /// Average speed in meters per second
    pub avg_speed_ms: f64,
    /// Cumulative positive elevation gain in meters
    pub ascent_m: f64,
    /// Estimated calories burned
    pub calories: u32,
}

impl GpsWorkout {
    /// Create a new GPS workout record for the given type.
    pub fn new(workout_type_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_type_id: workout_type_id.to_string(),
            started_at: Utc::now(),
            ended_at: None,
            duration_ms: 0,
            avg_speed_ms: 0.0,
            ascent_m: 0.0,
            calories: 0,
        }
    }
}

/// A finished indoor workout counted in repetitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndoorWorkout {
    /// Unique identifier
    pub id: Uuid,
    /// Workout type id ("treadmill", "push-ups", ...)
    pub workout_type_id: String,
    /// Workout start timestamp
    pub started_at: DateTime<Utc>,
    /// Workout end timestamp
    pub ended_at: Option<DateTime<Utc>>,
    /// Active duration in milliseconds (pauses excluded)
    pub duration_ms: i64,
    /// Total counted repetitions
    pub repetitions: u32,
    /// Average repetition frequency over the workout, in Hz
    pub avg_frequency: f64,
    /// Highest per-sample repetition frequency, in Hz
    pub max_frequency: f64,
    /// Mean repetition intensity over all samples
    pub avg_intensity: f64,
    /// Highest per-sample repetition intensity
    pub max_intensity: f64,
    /// Estimated calories burned
    pub calories: u32,
}

impl IndoorWorkout {
    /// Create a new indoor workout record for the given type.
    pub fn new(workout_type_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_type_id: workout_type_id.to_string(),
            started_at: Utc::now(),
            ended_at: None,
            duration_ms: 0,
            repetitions: 0,
            avg_frequency: 0.0,
            max_frequency: 0.0,
            avg_intensity: 0.0,
            max_intensity: 0.0,
            calories: 0,
        }
    }

    /// Whether a distance can be estimated for this workout.
    ///
    /// Only step-based workouts have a usable distance-per-repetition
    /// heuristic (step length).
    pub fn has_estimated_distance(&self) -> bool {
        self.workout_type_id == WORKOUT_TYPE_ID_TREADMILL && self.repetitions > 0
    }

    /// Estimated distance in meters, from repetitions and step length.
    pub fn estimate_distance(&self, measurements: &UserMeasurements) -> Option<f64> {
        if self.has_estimated_distance() {
            Some(f64::from(self.repetitions) * measurements.step_length_m)
        } else {
            None
        }
    }

    /// Estimated average speed in meters per second.
    pub fn estimate_speed(&self, measurements: &UserMeasurements) -> Option<f64> {
        let distance = self.estimate_distance(measurements)?;
        if self.duration_ms > 0 {
            Some(distance / (self.duration_ms as f64 / 1000.0))
        } else {
            None
        }
    }
}

/// A finished workout of either recording kind.
///
/// The calorie engine reads the type id, duration and the speed/ascent
/// fields of the underlying record and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    /// GPS-tracked outdoor workout
    Gps(GpsWorkout),
    /// Repetition-counted indoor workout
    Indoor(IndoorWorkout),
}

impl Workout {
    /// The workout type id of the underlying record.
    pub fn workout_type_id(&self) -> &str {
        match self {
            Workout::Gps(workout) => &workout.workout_type_id,
            Workout::Indoor(workout) => &workout.workout_type_id,
        }
    }

    /// Active duration in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match self {
            Workout::Gps(workout) => workout.duration_ms,
            Workout::Indoor(workout) => workout.duration_ms,
        }
    }

    /// Ascent in meters; zero for indoor workouts.
    pub fn ascent_m(&self) -> f64 {
        match self {
            Workout::Gps(workout) => workout.ascent_m,
            Workout::Indoor(_) => 0.0,
        }
    }
}
