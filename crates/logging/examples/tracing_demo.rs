//! Routes `tracing` events through a `DEBUG`-style namespace pattern.
//!
//! ```text
//! DEBUG='demo:*,-demo:noisy' cargo run -p logging --example tracing_demo --features tracing
//! ```

use logging::{DebugConfig, Registry, init_tracing};

fn main() {
    let mut config = DebugConfig::from_env();
    if config.namespaces.is_none() {
        config.namespaces = Some("demo:*,-demo:noisy".to_owned());
    }

    let registry = Registry::from_config(&config);
    if let Err(error) = init_tracing(registry.clone()) {
        eprintln!("tracing already initialised: {error}");
        return;
    }

    let app = registry.logger("demo:app");
    app.log("active pattern %j", &[registry.namespaces().into()]);

    tracing::info!(target: "demo::db", rows = 42, "query finished");
    tracing::info!(target: "demo::noisy", "never shown");

    let worker = app.extend("worker");
    for job in 0..3_u32 {
        worker.log("job %d done", &[job.into()]);
    }
}
