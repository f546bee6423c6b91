//! Sensor sample types consumed by the recognition layer.
//!
//! The surrounding application owns sensor activation and scheduling; this
//! crate only defines the sample values that are pushed into recognizers.

pub mod sample;

pub use sample::{SensorKind, SensorSample};
