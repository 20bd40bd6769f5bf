//! Overlay: always-on-top chat overlay with a global click-through hotkey.

mod app;
mod app_event;
mod config;
mod error;
mod event_forwarder;
mod hotkey_backend;
mod keymap;
mod layout_resolver;
#[cfg(test)]
mod tests;
mod tray_icon_state;
mod tray_manager;

pub(crate) use {
    app::App,
    app_event::AppEvent,
    error::{AppError, Result as AppResult},
    hotkey_backend::GlobalHotkeyBackend,
    tray_icon_state::TrayIconState,
    tray_manager::TrayManager,
};

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("overlay=debug,overlay_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    event_forwarder::spawn(proxy.clone());

    // Built on Init so the window, tray icon and OS hotkey manager all live on
    // the thread that pumps the event loop. Dropping the App unregisters the
    // hotkey.
    let mut app: Option<App> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => match App::new(target, proxy.clone()) {
                Ok(a) => app = Some(a),
                Err(e) => {
                    error!(error = ?e, "Failed to start overlay");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            },
            Event::LoopDestroyed => {
                // Registration must go before the event loop's resources do.
                if let Some(mut app) = app.take() {
                    app.shutdown();
                }
                info!("Overlay shut down");
            }
            event => {
                if let Some(app) = app.as_mut() {
                    app.handle_event(event, control_flow);
                }
            }
        }
    });
}
