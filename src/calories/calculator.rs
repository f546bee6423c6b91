//! Calorie estimation for finished workouts.

use crate::calories::providers::{
    FallbackMetProvider, MetProvider, MetTableProvider, WorkoutTypeMetProvider,
};
use crate::workouts::types::{UserMeasurements, WorkoutTypeRegistry};
use crate::workouts::workout::Workout;
use tracing::trace;

/// Estimates calories burned from a workout's aggregate statistics.
///
/// MET providers are asked in order; the first that covers the workout type
/// wins. If no provider answers, the MET is 0 and only the ascent
/// contributes; an unknown type is a degraded estimate, not an error.
///
/// The calculator is pure: identical inputs always produce identical
/// results, and no provider state changes per call.
pub struct CalorieCalculator {
    providers: Vec<Box<dyn MetProvider + Send + Sync>>,
}

impl CalorieCalculator {
    /// Create a calculator over an explicit provider chain.
    pub fn new(providers: Vec<Box<dyn MetProvider + Send + Sync>>) -> Self {
        Self { providers }
    }

    /// Create a calculator with the standard chain: compendium regression
    /// tables, then closed-form fallback formulas, then the static defaults
    /// of the given workout-type registry.
    pub fn with_default_chain(registry: WorkoutTypeRegistry) -> Self {
        Self::new(vec![
            Box::new(MetTableProvider::new()),
            Box::new(FallbackMetProvider::new()),
            Box::new(WorkoutTypeMetProvider::new(registry)),
        ])
    }

    /// Estimate the calories burned during a workout.
    ///
    /// Requires the workout's type id, duration and speed fields to be set.
    /// GPS ascent contributes one calorie per meter of climb.
    pub fn calculate_calories(&self, measurements: &UserMeasurements, workout: &Workout) -> u32 {
        let weight = measurements.weight_kg;
        let minutes = (workout.duration_ms() as f64 / 1000.0) / 60.0;
        let ascent = workout.ascent_m();
        let met = self.met_for(measurements, workout);

        trace!(
            workout_type = workout.workout_type_id(),
            met,
            minutes,
            ascent,
            "calculating calories"
        );

        (minutes * (met * 3.5 * weight) / 200.0) as u32 + ascent as u32
    }

    fn met_for(&self, measurements: &UserMeasurements, workout: &Workout) -> f64 {
        let speed_kmh = Self::speed_kmh(measurements, workout);

        self.providers
            .iter()
            .find_map(|provider| {
                provider.estimate_met(measurements, workout.workout_type_id(), speed_kmh)
            })
            .unwrap_or(0.0)
    }

    /// Speed input for the MET lookup: the GPS average, the estimated
    /// indoor speed, or 0 when neither exists.
    fn speed_kmh(measurements: &UserMeasurements, workout: &Workout) -> f64 {
        match workout {
            Workout::Gps(gps) => gps.avg_speed_ms * 3.6,
            Workout::Indoor(indoor) => indoor
                .estimate_speed(measurements)
                .map(|speed_ms| speed_ms * 3.6)
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::{
        WORKOUT_TYPE_ID_PULL_UPS, WORKOUT_TYPE_ID_RUNNING, WORKOUT_TYPE_ID_TREADMILL,
    };
    use crate::workouts::workout::{GpsWorkout, IndoorWorkout};

    fn running_workout(duration_ms: i64, avg_speed_ms: f64, ascent_m: f64) -> Workout {
        let mut workout = GpsWorkout::new(WORKOUT_TYPE_ID_RUNNING);
        workout.duration_ms = duration_ms;
        workout.avg_speed_ms = avg_speed_ms;
        workout.ascent_m = ascent_m;
        Workout::Gps(workout)
    }

    #[test]
    fn test_running_reference_estimate() {
        // 30 min at 16 km/h, default weight, no climb. The regression table
        // puts 16 km/h running at ~14.5 MET.
        let calculator = CalorieCalculator::with_default_chain(WorkoutTypeRegistry::presets());
        let measurements = UserMeasurements::default();
        let workout = running_workout(30 * 60 * 1000, 4.444, 0.0);

        let calories = calculator.calculate_calories(&measurements, &workout);
        let expected = (30.0 * (14.5 * 3.5 * 80.0) / 200.0) as u32;
        // Within the 1 MET tolerance of the reference table
        let tolerance = (30.0 * (1.0 * 3.5 * 80.0) / 200.0) as u32;
        assert!(
            calories.abs_diff(expected) <= tolerance,
            "calories {calories} not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn test_fallback_reference_estimate() {
        // Matches the fallback-only reference: 10 min running at 2.7 m/s,
        // 80 kg, roughly 130 kcal.
        let calculator = CalorieCalculator::new(vec![Box::new(FallbackMetProvider::new())]);
        let measurements = UserMeasurements::new(80.0, 0.7);
        let workout = running_workout(1000 * 60 * 10, 2.7, 0.0);

        let calories = calculator.calculate_calories(&measurements, &workout);
        assert!(
            calories.abs_diff(130) <= 50,
            "calories {calories} not within 50 of 130"
        );
    }

    #[test]
    fn test_ascent_contributes_one_calorie_per_meter() {
        let calculator = CalorieCalculator::with_default_chain(WorkoutTypeRegistry::presets());
        let measurements = UserMeasurements::default();

        let flat = calculator.calculate_calories(&measurements, &running_workout(600_000, 3.0, 0.0));
        let climb =
            calculator.calculate_calories(&measurements, &running_workout(600_000, 3.0, 250.0));
        assert_eq!(climb - flat, 250);
    }

    #[test]
    fn test_unknown_type_degrades_to_ascent_only() {
        let calculator = CalorieCalculator::with_default_chain(WorkoutTypeRegistry::presets());
        let measurements = UserMeasurements::default();

        let mut workout = GpsWorkout::new("parkour");
        workout.duration_ms = 3_600_000;
        workout.avg_speed_ms = 2.0;
        workout.ascent_m = 42.0;

        let calories = calculator.calculate_calories(&measurements, &Workout::Gps(workout));
        assert_eq!(calories, 42);
    }

    #[test]
    fn test_indoor_without_distance_uses_static_default() {
        // Pull-ups have no estimated distance, so speed is 0 and the chain
        // falls through to the static 6.0 MET default.
        let calculator = CalorieCalculator::with_default_chain(WorkoutTypeRegistry::presets());
        let measurements = UserMeasurements::default();

        let mut workout = IndoorWorkout::new(WORKOUT_TYPE_ID_PULL_UPS);
        workout.duration_ms = 10 * 60 * 1000;
        workout.repetitions = 30;

        let calories = calculator.calculate_calories(&measurements, &Workout::Indoor(workout));
        let expected = (10.0 * (6.0 * 3.5 * 80.0) / 200.0) as u32;
        assert_eq!(calories, expected);
    }

    #[test]
    fn test_treadmill_uses_estimated_speed() {
        // 6000 steps x 0.7 m over 30 min = 4200 m, 8.4 km/h. The fallback
        // treadmill formula gives 8.4 * 0.97 = ~8.15 MET (no regression
        // curve covers treadmill).
        let calculator = CalorieCalculator::with_default_chain(WorkoutTypeRegistry::presets());
        let measurements = UserMeasurements::default();

        let mut workout = IndoorWorkout::new(WORKOUT_TYPE_ID_TREADMILL);
        workout.duration_ms = 30 * 60 * 1000;
        workout.repetitions = 6000;

        let calories = calculator.calculate_calories(&measurements, &Workout::Indoor(workout));
        let expected = (30.0 * (8.4 * 0.97 * 3.5 * 80.0) / 200.0) as u32;
        assert_eq!(calories, expected);
    }

    #[test]
    fn test_idempotence() {
        let calculator = CalorieCalculator::with_default_chain(WorkoutTypeRegistry::presets());
        let measurements = UserMeasurements::default();
        let workout = running_workout(45 * 60 * 1000, 3.5, 120.0);

        let first = calculator.calculate_calories(&measurements, &workout);
        let second = calculator.calculate_calories(&measurements, &workout);
        assert_eq!(first, second);
    }
}
