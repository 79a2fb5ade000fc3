//! Wiggler - mouse jiggler that keeps the workstation awake.
//!
//! Moves the cursor 10 px right and back every 5 seconds until Ctrl+C.

use wiggler::pointer::SystemPointer;
use wiggler::shutdown::{install_ctrlc_handler, ShutdownSignal};
use wiggler::wiggler::{Wiggler, WigglerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging. Diagnostics go to stderr; stdout is for status lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wiggler=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let shutdown = ShutdownSignal::new();
    install_ctrlc_handler(&shutdown)?;

    // The started notice goes out before the first pointer read, so a
    // missing input subsystem fails after it.
    let device = SystemPointer::new();

    let stdout = std::io::stdout();
    let mut wiggler = Wiggler::new(device, shutdown, stdout.lock(), WigglerConfig::default());

    let cycles = wiggler.run()?;
    tracing::debug!(cycles, "Exiting");

    Ok(())
}
