use tracing::Level;

/// Initializes the global tracing subscriber. Safe to call more than once;
/// later calls are no-ops (tests init it per-process).
pub fn init_observability() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .try_init();
}
