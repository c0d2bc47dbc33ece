//! Telemetry helpers for applications embedding `loupe-graph`.
//!
//! This module keeps tracing setup explicit and opt-in.
//! Consumers can either call `init_tracing` or wire their own `tracing`
//! subscriber and filters. Library code only emits events.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is
/// enabled, filtering at `info` unless the environment overrides it.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or
/// if a global subscriber was already set by the host application.
#[must_use]
pub fn init_tracing() -> bool {
    init_tracing_with("info")
}

/// Same as [`init_tracing`] with explicit fallback filter directives.
#[must_use]
pub fn init_tracing_with(default_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directives;
        false
    }
}
