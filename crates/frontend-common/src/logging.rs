//! Browser console logging

use crate::config::PanelConfig;
use tracing_subscriber::{
    Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};
use tracing_web::MakeWebConsoleWriter;

/// Route `tracing` events to the browser console.
///
/// Timestamps are left out because `std::time` is unavailable on wasm32.
pub fn init_logging() -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(PanelConfig::LOG_LEVEL));

    tracing_subscriber::registry().with(fmt_layer).try_init()
}
