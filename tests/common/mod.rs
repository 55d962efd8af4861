use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Routes library events to the test output. `RUST_LOG` overrides the
/// default WARN level, e.g. `RUST_LOG=narrow3d=trace`.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
