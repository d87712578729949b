//! Tracing integration for Horizon Rating.
//!
//! Horizon Rating uses the `tracing` crate for instrumentation. The libraries
//! never install a subscriber; applications choose their own:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_rating=debug")
//!     .init();
//! ```

/// Span names used throughout Horizon Rating for tracing.
pub mod span_names {
    /// Icon layout pass span.
    pub const LAYOUT: &str = "horizon_rating::layout";
    /// Widget paint span.
    pub const PAINT: &str = "horizon_rating::paint";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_rating_core::signal";
    /// Widget target (slots, layout, input).
    pub const WIDGET: &str = "horizon_rating::widget";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_rating::config";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_are_namespaced() {
        assert!(targets::SIGNAL.starts_with("horizon_rating_core::"));
        assert!(targets::WIDGET.starts_with("horizon_rating::"));
        assert!(targets::CONFIG.starts_with("horizon_rating::"));
        assert!(span_names::LAYOUT.starts_with("horizon_rating::"));
        assert!(span_names::PAINT.starts_with("horizon_rating::"));
    }
}
