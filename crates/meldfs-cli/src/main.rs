//! meldfs CLI entry point.
//!
//! Assemble and report the disk set for a mountpoint:
//! ```bash
//! meldfs /mnt/pool
//! ```

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    meldfs_cli::run(std::env::args().skip(1))
}
