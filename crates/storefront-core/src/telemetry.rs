//! Logging setup.
//!
//! Everything in the storefront logs through `tracing`; this installs the
//! subscriber. Timestamps are left out because `wasm32` has no system clock.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when neither the caller nor `RUST_LOG` supplies one.
pub const DEFAULT_FILTER: &str = "info,storefront_data=debug,storefront_core=debug";

/// Install a stderr subscriber.
///
/// Returns `false` if a global subscriber was already set; calling twice is
/// harmless.
pub fn init(filter: Option<&str>) -> bool {
    init_with_writer(filter, std::io::stderr)
}

/// Install a subscriber writing through `writer` (e.g. the browser console).
pub fn init_with_writer<W>(filter: Option<&str>, writer: W) -> bool
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter))
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .try_init()
        .is_ok()
}

fn build_filter(filter: Option<&str>) -> EnvFilter {
    match filter {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("invalid log filter {:?}: {}", directives, e);
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}
