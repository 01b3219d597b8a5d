//! Diagnostic tracing for the `kata` and `eval` binaries.
//!
//! Three streams never mix:
//!
//! - stdout carries exercise results (`kata run`, `kata isbn`, plain or JSON
//!   as `kata.toml` selects) and the `eval` run and report lines.
//! - stderr carries tracing events from this module plus the one-line error
//!   printed before a non-zero exit.
//! - `eval/results/` holds the per-run `meta.json` and `checks.json` files,
//!   written whatever `RUST_LOG` says.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, first thing in `main`.
///
/// The filter comes from `RUST_LOG` and falls back to `warn`, so a normal
/// run prints nothing but results. `kata::core` never logs; events come from
/// the CLI, the catalog callers and the eval harness.
///
/// ```bash
/// RUST_LOG=eval=debug cargo run -p eval -- run isbn-verifier
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
