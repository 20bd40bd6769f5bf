//! Bridges the global hotkey and tray menu channels into the event loop.

use crate::AppEvent;

use global_hotkey::GlobalHotKeyEvent;
use tao::event_loop::EventLoopProxy;
use tracing::{debug, error};
use tray_icon::menu::MenuEvent;

/// Spawn one forwarding thread per channel.
///
/// `GlobalHotKeyEvent::receiver()` and `MenuEvent::receiver()` return
/// crossbeam receivers with a blocking `recv()`: zero polling, instant
/// response. Each thread exits once the event loop is gone and
/// `send_event` fails; a thread still parked in `recv()` at that point is
/// cleaned up on process exit.
pub(crate) fn spawn(proxy: EventLoopProxy<AppEvent>) {
    let hotkey_proxy = proxy.clone();
    let spawned = std::thread::Builder::new()
        .name("hotkey-events".to_string())
        .spawn(move || {
            let receiver = GlobalHotKeyEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if hotkey_proxy.send_event(AppEvent::GlobalHotkey(event)).is_err() {
                    break;
                }
            }
            debug!("Hotkey event forwarder stopped");
        });
    if let Err(e) = spawned {
        error!(error = ?e, "Failed to spawn hotkey event forwarder");
    }

    let spawned = std::thread::Builder::new()
        .name("menu-events".to_string())
        .spawn(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if proxy.send_event(AppEvent::Menu(event)).is_err() {
                    break;
                }
            }
            debug!("Menu event forwarder stopped");
        });
    if let Err(e) = spawned {
        error!(error = ?e, "Failed to spawn menu event forwarder");
    }
}
