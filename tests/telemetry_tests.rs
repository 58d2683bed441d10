use payview::telemetry::init_default_tracing;

#[test]
fn repeated_initialization_reports_existing_subscriber() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
