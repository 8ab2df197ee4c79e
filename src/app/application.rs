//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::time::Duration;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::domain::config::DashboardConfig;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::services::api::BeaconApi;
use crate::services::head_poller::HeadPoller;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store::{config_path, load_dashboard_config};

actions!(beacon_dash, [Quit]);

/// Config file contents, falling back to defaults when it cannot be read
fn load_config() -> (DashboardConfig, Option<String>) {
    let path = config_path()
        .ok()
        .map(|path| path.display().to_string());
    match load_dashboard_config() {
        Ok(config) => (config, path),
        Err(e) => {
            warn!(error = %e, "Using default config");
            (DashboardConfig::default(), path)
        }
    }
}

fn open_main_window(cx: &mut App) -> Result<()> {
    let (config, path) = load_config();
    let base_url = config.server.base_url();
    let poll_interval = Duration::from_millis(config.poll_interval_ms);

    let entities = AppEntities::init(cx, config, path);
    cx.set_global(entities.clone());

    // Service -> UI events
    let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

    let api = BeaconApi::new(&base_url)?;
    cx.set_global(ServiceHub::new(api, event_tx));

    let head = entities.head.clone();
    let poller = cx.new(|cx| HeadPoller::new(head, poll_interval, cx));

    let bounds = Bounds::centered(
        None,
        gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
        cx,
    );
    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Beacon Dash")),
            appears_transparent: false,
            traffic_light_position: None,
        }),
        ..Default::default()
    };

    // The workspace owns the poller; closing the window stops polling
    cx.open_window(window_options, |window, cx| {
        let workspace = cx.new(|cx| Workspace::new(entities.clone(), event_rx, poller, cx));
        cx.new(|cx| Root::new(workspace, window, cx))
    })
    .map_err(|e| crate::error::Error::Invalid {
        message: format!("Failed to open window: {e}"),
    })?;

    info!(%base_url, interval_ms = poll_interval.as_millis() as u64, "Dashboard ready");
    Ok(())
}

/// Run the Beacon Dash application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if let Err(e) = open_main_window(cx) {
            error!(error = %e, "Failed to start");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
