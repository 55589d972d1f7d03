use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact subscriber for binaries or tests embedding the client.
/// The library itself only emits `tracing` events and never installs one.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "onfleet=debug,info"
    } else {
        "onfleet=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
