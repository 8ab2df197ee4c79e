//! Beacon Dash - Main Entry Point
//!
//! Native dashboard for a sharded beacon chain simulator

use beacon_dash::app::application::run_app;
use beacon_dash::utils::config_store::get_or_create_data_dir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Daily rolling log file in the data dir; the guard flushes on exit
    let (file_writer, _guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "beacon-dash.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
        }))
        .init();

    tracing::info!("Starting Beacon Dash...");

    // Run the GPUI application
    run_app();
}
