//! Telemetry helpers for hosts embedding `payview`.
//!
//! The views emit `tracing` events (recompute vs memo hit, sort toggles,
//! granularity switches, degenerate proportions). Subscriber setup stays
//! explicit and opt-in: call `init_default_tracing` or wire your own.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or by
/// `payview=info` when the variable is unset.
///
/// `false` means nothing was installed: the `telemetry` feature is off, or the
/// host already owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("payview=info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
