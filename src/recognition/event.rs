//! Repetition events emitted by recognizers.

/// One detected repetition (a step, jump, push-up or pull-up).
///
/// Consumed by the recording layer to increment the live repetition counter
/// and to annotate the current aggregation window with an intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepetitionEvent {
    /// When the repetition happened, monotonic milliseconds
    pub timestamp_ms: i64,
    /// Exercise-specific intensity of the repetition (0.0 when the
    /// recognizer cannot measure one)
    pub intensity: f64,
}

impl RepetitionEvent {
    /// Create an event with an intensity value.
    pub fn new(timestamp_ms: i64, intensity: f64) -> Self {
        Self {
            timestamp_ms,
            intensity,
        }
    }

    /// Create an event without a measured intensity.
    pub fn at(timestamp_ms: i64) -> Self {
        Self::new(timestamp_ms, 0.0)
    }
}
