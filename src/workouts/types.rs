//! Workout types and the type registry.
//!
//! The registry mirrors the preset catalogue the rest of the application
//! selects workouts from. The calorie engine only reads the id, the static
//! default MET and the recording type; the recording layer additionally uses
//! the indoor repetition batch size.

use serde::{Deserialize, Serialize};

/// Built-in workout type id: running (GPS).
pub const WORKOUT_TYPE_ID_RUNNING: &str = "running";
/// Built-in workout type id: walking (GPS).
pub const WORKOUT_TYPE_ID_WALKING: &str = "walking";
/// Built-in workout type id: hiking (GPS).
pub const WORKOUT_TYPE_ID_HIKING: &str = "hiking";
/// Built-in workout type id: cycling (GPS).
pub const WORKOUT_TYPE_ID_CYCLING: &str = "cycling";
/// Built-in workout type id: inline skating (GPS).
pub const WORKOUT_TYPE_ID_INLINE_SKATING: &str = "inline_skating";
/// Built-in workout type id: skateboarding (GPS).
pub const WORKOUT_TYPE_ID_SKATEBOARDING: &str = "skateboarding";
/// Built-in workout type id: rowing (GPS).
pub const WORKOUT_TYPE_ID_ROWING: &str = "rowing";
/// Built-in workout type id: swimming (GPS).
pub const WORKOUT_TYPE_ID_SWIMMING: &str = "swimming";
/// Built-in workout type id: catch-all for unclassified activities.
pub const WORKOUT_TYPE_ID_OTHER: &str = "other";
/// Built-in workout type id: treadmill (indoor, step counting).
pub const WORKOUT_TYPE_ID_TREADMILL: &str = "treadmill";
/// Built-in workout type id: rope skipping (indoor, jump counting).
pub const WORKOUT_TYPE_ID_ROPE_SKIPPING: &str = "rope_skipping";
/// Built-in workout type id: trampoline jumping (indoor, jump counting).
pub const WORKOUT_TYPE_ID_TRAMPOLINE_JUMPING: &str = "trampoline_jumping";
/// Built-in workout type id: push-ups (indoor, proximity counting).
pub const WORKOUT_TYPE_ID_PUSH_UPS: &str = "push-ups";
/// Built-in workout type id: pull-ups (indoor, acceleration counting).
pub const WORKOUT_TYPE_ID_PULL_UPS: &str = "pull-ups";

/// How a workout of a given type is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingType {
    /// Outdoor workout tracked via GNSS
    Gps,
    /// Indoor workout tracked via repetition recognition
    Indoor,
}

impl std::fmt::Display for RecordingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordingType::Gps => write!(f, "GPS"),
            RecordingType::Indoor => write!(f, "Indoor"),
        }
    }
}

/// A workout type known to the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutType {
    /// Stable identifier ("running", "push-ups", ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// How workouts of this type are recorded
    pub recording_type: RecordingType,
    /// Static last-resort MET value for calorie estimation, if one is defined
    pub default_met: Option<f64>,
    /// Indoor types: how many repetitions are batched into one stored sample
    pub reps_per_sample: Option<u32>,
}

impl WorkoutType {
    /// Create a GPS workout type without a static MET default.
    pub fn gps(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            recording_type: RecordingType::Gps,
            default_met: None,
            reps_per_sample: None,
        }
    }

    /// Create an indoor workout type without a static MET default.
    pub fn indoor(id: &str, name: &str, reps_per_sample: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            recording_type: RecordingType::Indoor,
            default_met: None,
            reps_per_sample: Some(reps_per_sample),
        }
    }

    /// Attach a static MET default.
    pub fn with_default_met(mut self, met: f64) -> Self {
        self.default_met = Some(met);
        self
    }
}

/// Catalogue of known workout types.
///
/// Built explicitly by whoever composes the session (no ambient singleton);
/// custom types can be registered next to the presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTypeRegistry {
    types: Vec<WorkoutType>,
}

impl WorkoutTypeRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self { types: Vec::new() }
    }

    /// Create a registry with the built-in preset types.
    pub fn presets() -> Self {
        let mut registry = Self::empty();
        registry.register(WorkoutType::gps(WORKOUT_TYPE_ID_RUNNING, "Running"));
        registry.register(WorkoutType::gps(WORKOUT_TYPE_ID_WALKING, "Walking"));
        registry.register(WorkoutType::gps(WORKOUT_TYPE_ID_HIKING, "Hiking"));
        registry.register(WorkoutType::gps(WORKOUT_TYPE_ID_CYCLING, "Cycling"));
        registry.register(WorkoutType::gps(
            WORKOUT_TYPE_ID_INLINE_SKATING,
            "Inline Skating",
        ));
        registry.register(WorkoutType::gps(
            WORKOUT_TYPE_ID_SKATEBOARDING,
            "Skateboarding",
        ));
        registry.register(WorkoutType::gps(WORKOUT_TYPE_ID_ROWING, "Rowing"));
        registry.register(
            WorkoutType::gps(WORKOUT_TYPE_ID_SWIMMING, "Swimming").with_default_met(8.0),
        );
        registry.register(WorkoutType::gps(WORKOUT_TYPE_ID_OTHER, "Other"));
        // Treadmill has no compendium MET default; estimation relies on the
        // step-based speed heuristic instead.
        registry.register(WorkoutType::indoor(WORKOUT_TYPE_ID_TREADMILL, "Treadmill", 5));
        registry.register(
            WorkoutType::indoor(WORKOUT_TYPE_ID_ROPE_SKIPPING, "Rope Skipping", 3)
                .with_default_met(11.0),
        );
        registry.register(
            WorkoutType::indoor(WORKOUT_TYPE_ID_TRAMPOLINE_JUMPING, "Trampoline Jumping", 3)
                .with_default_met(4.0),
        );
        registry.register(
            WorkoutType::indoor(WORKOUT_TYPE_ID_PUSH_UPS, "Push-Ups", 1).with_default_met(6.0),
        );
        registry.register(
            WorkoutType::indoor(WORKOUT_TYPE_ID_PULL_UPS, "Pull-Ups", 1).with_default_met(6.0),
        );
        registry
    }

    /// Register a workout type, replacing any existing type with the same id.
    pub fn register(&mut self, workout_type: WorkoutType) {
        self.types.retain(|t| t.id != workout_type.id);
        self.types.push(workout_type);
    }

    /// Look up a workout type by id.
    pub fn get(&self, id: &str) -> Option<&WorkoutType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Static default MET for a workout type, if the type is known and
    /// defines one.
    pub fn default_met(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(|t| t.default_met)
    }

    /// All registered types.
    pub fn all(&self) -> &[WorkoutType] {
        &self.types
    }
}

impl Default for WorkoutTypeRegistry {
    fn default() -> Self {
        Self::presets()
    }
}

/// Body measurements supplied by the user, read-only to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserMeasurements {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Step length in meters (used to estimate treadmill distance)
    pub step_length_m: f64,
}

impl UserMeasurements {
    /// Create measurements from weight and step length.
    pub fn new(weight_kg: f64, step_length_m: f64) -> Self {
        Self {
            weight_kg,
            step_length_m,
        }
    }
}

impl Default for UserMeasurements {
    fn default() -> Self {
        Self {
            weight_kg: 80.0,
            step_length_m: 0.7,
        }
    }
}
