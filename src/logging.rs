// SPDX-License-Identifier: Apache-2.0
use std::env;
use std::io::Stdout;

use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Environment variable selecting the log output format (`json` or `console`)
pub const LOG_FORMAT_ENV: &str = "LETTERFORGE_LOG_FORMAT";

const SERVICE_NAME: &str = "letterforge";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}=info,actix_web=info", SERVICE_NAME))
    })
}

/// Initialize the global tracing subscriber.
///
/// Defaults to a human-readable console format; set
/// `LETTERFORGE_LOG_FORMAT=json` for Bunyan-style JSON lines suitable
/// for log shippers.
pub fn init_tracing() {
    // Route log-crate records through tracing; ignore if already set
    let _ = LogTracer::init();

    let json = env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        let formatting_layer: BunyanFormattingLayer<fn() -> Stdout> =
            BunyanFormattingLayer::new(SERVICE_NAME.into(), std::io::stdout);
        let subscriber = Registry::default()
            .with(env_filter())
            .with(JsonStorageLayer)
            .with(formatting_layer);
        set_global_default(subscriber).expect("Failed to set tracing subscriber");
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_target(true)
            .with_level(true)
            .with_env_filter(env_filter())
            .finish();
        set_global_default(subscriber).expect("Failed to set tracing subscriber");
    }

    tracing::info!("Tracing initialized");
}
