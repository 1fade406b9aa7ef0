use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre panic/error hooks.
///
/// Call before any fallible work in main() so reports carry location
/// sections. Safe to call more than once.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global tracing subscriber.
///
/// Production gets flattened JSON events for log aggregation; development
/// gets the pretty human-readable format. Both carry `tracing-error`'s
/// `ErrorLayer` so span traces attach to error reports. `RUST_LOG`
/// overrides the default filter. Re-initialization (common in tests) is
/// silently skipped.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=info,sea_orm=warn")
        } else {
            EnvFilter::new("debug")
        }
    });

    let registry = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());

    let result = if environment.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(filter)
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized with ErrorLayer"),
        Err(_) => debug!("Tracing already initialized, skipping"),
    }
}
