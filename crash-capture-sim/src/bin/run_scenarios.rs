//! Human-readable runner for the hosted scenario suite: prints a
//! PASS/FAIL line per scenario and exits nonzero if any failed.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("crash-capture scenario harness");

    let results = crash_capture_sim::scenarios::run_all();
    let mut failures = 0;
    for r in &results {
        if r.passed {
            info!(scenario = r.name, "PASS");
        } else {
            error!(scenario = r.name, detail = %r.detail, "FAIL");
            failures += 1;
        }
    }

    info!(total = results.len(), failures, "scenario run complete");
    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
