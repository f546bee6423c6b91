//! MET providers queried by the calorie calculator.
//!
//! Calibration data comes from the compendium of physical activities
//! (<https://sites.google.com/site/compendiumofphysicalactivities/Activity-Categories>):
//! published points like "5 mph -> 8.3 MET" are fit into per-activity
//! regression curves, with closed-form fallback formulas and static
//! per-type defaults behind them.

use crate::calories::met_function::{MetFunction, SpeedToMet};
use crate::workouts::types::{
    UserMeasurements, WorkoutTypeRegistry, WORKOUT_TYPE_ID_CYCLING, WORKOUT_TYPE_ID_HIKING,
    WORKOUT_TYPE_ID_INLINE_SKATING, WORKOUT_TYPE_ID_ROWING, WORKOUT_TYPE_ID_RUNNING,
    WORKOUT_TYPE_ID_SKATEBOARDING, WORKOUT_TYPE_ID_TREADMILL, WORKOUT_TYPE_ID_WALKING,
};
use std::collections::HashMap;

/// Estimates the MET of a workout from its type and average speed.
///
/// Returns `None` when the provider has nothing to say about the given
/// type; the calculator then asks the next provider in its chain.
pub trait MetProvider {
    /// Estimate the MET, or `None` if this provider does not cover the type.
    fn estimate_met(
        &self,
        measurements: &UserMeasurements,
        workout_type_id: &str,
        speed_kmh: f64,
    ) -> Option<f64>;
}

/// Regression curves fit from compendium calibration points, one per
/// covered activity. Hiking and walking share a curve.
#[derive(Debug, Clone)]
pub struct MetTableProvider {
    functions: HashMap<String, MetFunction>,
}

impl MetTableProvider {
    /// Build the provider with the built-in compendium tables.
    pub fn new() -> Self {
        let mut functions = HashMap::new();

        let walking = MetFunction::fit(&[
            SpeedToMet::new(2.0, 2.8),
            SpeedToMet::new(2.5, 3.0),
            SpeedToMet::new(3.0, 3.5),
            SpeedToMet::new(3.5, 4.3),
            SpeedToMet::new(4.0, 5.0),
            SpeedToMet::new(5.0, 8.3),
        ]);
        functions.insert(WORKOUT_TYPE_ID_HIKING.to_string(), walking.clone());
        functions.insert(WORKOUT_TYPE_ID_WALKING.to_string(), walking);

        functions.insert(
            WORKOUT_TYPE_ID_RUNNING.to_string(),
            MetFunction::fit(&[
                SpeedToMet::new(4.0, 6.0),
                SpeedToMet::new(5.0, 8.3),
                SpeedToMet::new(5.2, 9.0),
                SpeedToMet::new(6.0, 9.8),
                SpeedToMet::new(6.7, 10.5),
                SpeedToMet::new(7.0, 11.0),
                SpeedToMet::new(7.5, 11.8),
                SpeedToMet::new(8.0, 11.8),
                SpeedToMet::new(8.6, 12.3),
                SpeedToMet::new(9.0, 12.8),
                SpeedToMet::new(10.0, 14.5),
                SpeedToMet::new(11.0, 16.0),
                SpeedToMet::new(12.0, 19.0),
                SpeedToMet::new(13.0, 19.8),
                SpeedToMet::new(14.0, 23.0),
            ]),
        );

        functions.insert(
            WORKOUT_TYPE_ID_CYCLING.to_string(),
            MetFunction::fit(&[
                SpeedToMet::new(5.5, 3.5),
                SpeedToMet::new(9.4, 5.8),
                SpeedToMet::new(11.0, 6.8),
                SpeedToMet::new(13.0, 8.0),
                SpeedToMet::new(15.0, 10.0),
                SpeedToMet::new(17.5, 12.0),
            ]),
        );

        Self { functions }
    }
}

impl Default for MetTableProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetProvider for MetTableProvider {
    fn estimate_met(
        &self,
        _measurements: &UserMeasurements,
        workout_type_id: &str,
        speed_kmh: f64,
    ) -> Option<f64> {
        self.functions
            .get(workout_type_id)
            .map(|function| function.met_for_speed(speed_kmh))
    }
}

impl std::fmt::Display for MetTableProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (type_id, function) in &self.functions {
            writeln!(f, "- {type_id}: {function}")?;
        }
        Ok(())
    }
}

/// Closed-form empirical MET formulas for a smaller set of activities,
/// each clamped to a per-activity minimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackMetProvider;

impl FallbackMetProvider {
    /// Create the fallback provider.
    pub fn new() -> Self {
        Self
    }
}

impl MetProvider for FallbackMetProvider {
    fn estimate_met(
        &self,
        _measurements: &UserMeasurements,
        workout_type_id: &str,
        speed_kmh: f64,
    ) -> Option<f64> {
        match workout_type_id {
            WORKOUT_TYPE_ID_RUNNING
            | WORKOUT_TYPE_ID_WALKING
            | WORKOUT_TYPE_ID_HIKING
            | WORKOUT_TYPE_ID_TREADMILL => Some(f64::max(3.0, speed_kmh * 0.97)),
            WORKOUT_TYPE_ID_CYCLING => Some(f64::max(
                3.5,
                0.00818 * speed_kmh.powi(2) + 0.1925 * speed_kmh + 1.13,
            )),
            WORKOUT_TYPE_ID_INLINE_SKATING => Some(f64::max(3.0, 0.6747 * speed_kmh - 2.1893)),
            WORKOUT_TYPE_ID_SKATEBOARDING => Some(f64::max(4.0, 0.43 * speed_kmh + 0.89)),
            WORKOUT_TYPE_ID_ROWING => Some(f64::max(
                2.5,
                0.18 * speed_kmh.powi(2) - 1.375 * speed_kmh + 5.2,
            )),
            _ => None,
        }
    }
}

/// Last-resort provider: the static default MET configured on the workout
/// type itself.
#[derive(Debug, Clone)]
pub struct WorkoutTypeMetProvider {
    registry: WorkoutTypeRegistry,
}

impl WorkoutTypeMetProvider {
    /// Create the provider over a workout-type registry.
    pub fn new(registry: WorkoutTypeRegistry) -> Self {
        Self { registry }
    }
}

impl MetProvider for WorkoutTypeMetProvider {
    fn estimate_met(
        &self,
        _measurements: &UserMeasurements,
        workout_type_id: &str,
        _speed_kmh: f64,
    ) -> Option<f64> {
        self.registry
            .default_met(workout_type_id)
            .filter(|met| *met > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::{WORKOUT_TYPE_ID_PULL_UPS, WORKOUT_TYPE_ID_SWIMMING};

    #[test]
    fn test_running_met_at_16_kmh() {
        // Reference point: 16 km/h running is roughly 14.5 MET in the
        // compendium tables.
        let provider = MetTableProvider::new();
        let met = provider
            .estimate_met(&UserMeasurements::default(), WORKOUT_TYPE_ID_RUNNING, 16.0)
            .unwrap();
        assert!((met - 14.5).abs() < 1.0, "expected ~14.5 MET, got {met}");
    }

    #[test]
    fn test_hiking_and_walking_share_a_curve() {
        let provider = MetTableProvider::new();
        let measurements = UserMeasurements::default();
        let hiking = provider.estimate_met(&measurements, WORKOUT_TYPE_ID_HIKING, 5.0);
        let walking = provider.estimate_met(&measurements, WORKOUT_TYPE_ID_WALKING, 5.0);
        assert_eq!(hiking, walking);
        assert!(hiking.is_some());
    }

    #[test]
    fn test_table_provider_unknown_type() {
        let provider = MetTableProvider::new();
        assert!(provider
            .estimate_met(&UserMeasurements::default(), "yoga", 5.0)
            .is_none());
        // Indoor types have no regression curve either
        assert!(provider
            .estimate_met(
                &UserMeasurements::default(),
                WORKOUT_TYPE_ID_PULL_UPS,
                0.0
            )
            .is_none());
    }

    #[test]
    fn test_fallback_floors() {
        let provider = FallbackMetProvider::new();
        let measurements = UserMeasurements::default();

        // Standing still never drops below the activity floor
        let running = provider
            .estimate_met(&measurements, WORKOUT_TYPE_ID_RUNNING, 0.0)
            .unwrap();
        assert_eq!(running, 3.0);
        let cycling = provider
            .estimate_met(&measurements, WORKOUT_TYPE_ID_CYCLING, 0.0)
            .unwrap();
        assert_eq!(cycling, 3.5);
        let skateboarding = provider
            .estimate_met(&measurements, WORKOUT_TYPE_ID_SKATEBOARDING, 0.0)
            .unwrap();
        assert_eq!(skateboarding, 4.0);

        // Above the floor the formula takes over, unbounded upwards
        let fast = provider
            .estimate_met(&measurements, WORKOUT_TYPE_ID_RUNNING, 20.0)
            .unwrap();
        assert!((fast - 19.4).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_unknown_type() {
        let provider = FallbackMetProvider::new();
        assert!(provider
            .estimate_met(&UserMeasurements::default(), WORKOUT_TYPE_ID_SWIMMING, 3.0)
            .is_none());
    }

    #[test]
    fn test_workout_type_defaults() {
        let provider = WorkoutTypeMetProvider::new(WorkoutTypeRegistry::presets());
        let measurements = UserMeasurements::default();

        assert_eq!(
            provider.estimate_met(&measurements, WORKOUT_TYPE_ID_SWIMMING, 0.0),
            Some(8.0)
        );
        assert_eq!(
            provider.estimate_met(&measurements, WORKOUT_TYPE_ID_PULL_UPS, 0.0),
            Some(6.0)
        );
        // Treadmill carries a batch size but no static MET, so it must not
        // be answered here; its estimate comes from speed-based providers
        assert_eq!(
            provider.estimate_met(&measurements, WORKOUT_TYPE_ID_TREADMILL, 0.0),
            None
        );
        // GPS types without a configured default fall through
        assert!(provider
            .estimate_met(&measurements, WORKOUT_TYPE_ID_RUNNING, 10.0)
            .is_none());
        assert!(provider.estimate_met(&measurements, "yoga", 0.0).is_none());
    }
}
