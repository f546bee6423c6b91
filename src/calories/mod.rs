//! MET-based calorie estimation.

pub mod calculator;
pub mod met_function;
pub mod providers;

pub use calculator::CalorieCalculator;
pub use met_function::{MetFunction, SpeedToMet};
pub use providers::{FallbackMetProvider, MetProvider, MetTableProvider, WorkoutTypeMetProvider};
