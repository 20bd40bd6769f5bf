use crate::{
    AppError, AppEvent, AppResult, GlobalHotkeyBackend, TrayIconState, TrayManager,
    config::Config, keymap, layout_resolver,
};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use overlay_core::{
    CaptureState, GlobalHotkeyState, HotkeyBinding, HotkeyCaptureSession, HotkeyRegistry, KeyEvent,
    KeyLabelFormatter, LocalDisposition, ModifierFlags, RegistrationToken,
};
use tao::{
    dpi::LogicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoopProxy, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// Main application state.
///
/// Lives on the main thread: the window, the tray icon and the OS hotkey
/// manager are all bound to the thread running the event loop. Hotkey
/// presses and captured bindings come back as [`AppEvent`]s through `proxy`
/// rather than by calling into `App` from inside a callback.
pub struct App {
    registry: HotkeyRegistry<GlobalHotkeyBackend>,
    capture: HotkeyCaptureSession,
    formatter: KeyLabelFormatter,
    config: Config,
    tray_manager: TrayManager,
    window: Window,
    modifiers: ModifierFlags,
    click_through: bool,
}

impl App {
    /// Build the window, tray and hotkey registration.
    ///
    /// A hotkey registration failure is logged, not fatal: the overlay still
    /// runs and a new shortcut can be recorded from the tray.
    #[track_caller]
    #[instrument(skip_all)]
    pub(crate) fn new(
        target: &EventLoopWindowTarget<AppEvent>,
        proxy: EventLoopProxy<AppEvent>,
    ) -> AppResult<Self> {
        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = ?e, "Config unavailable, using defaults");
                Config::default()
            }
        };
        let binding = config.hotkey_binding();

        let window = WindowBuilder::new()
            .with_title("Overlay")
            .with_always_on_top(true)
            .with_inner_size(LogicalSize::new(400.0, 600.0))
            .build(target)
            .map_err(|e| AppError::WindowError {
                reason: format!("Failed to create overlay window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let formatter = layout_resolver::platform_formatter();
        let tray_manager = TrayManager::new(&formatter.format(&binding))?;

        let mut registry = HotkeyRegistry::new(GlobalHotkeyBackend::new()?);
        let toggle_proxy = proxy.clone();
        if let Err(e) = registry.register(binding, move || {
            if let Err(e) = toggle_proxy.send_event(AppEvent::ToggleClickThrough) {
                warn!(error = ?e, "Event loop closed, dropping hotkey toggle");
            }
        }) {
            error!(error = ?e, binding = %binding, "Failed to register hotkey");
        }

        let capture = HotkeyCaptureSession::new(binding).on_resolved(move |binding| {
            if let Err(e) = proxy.send_event(AppEvent::HotkeyCaptured(*binding)) {
                warn!(error = ?e, "Event loop closed, dropping captured hotkey");
            }
        });

        let mut app = Self {
            registry,
            capture,
            formatter,
            config,
            tray_manager,
            window,
            modifiers: ModifierFlags::empty(),
            click_through: false,
        };
        app.sync_recording_state();

        info!(hotkey = %app.formatter.format(&binding), "Overlay started");

        Ok(app)
    }

    /// Handle one event from the loop.
    pub(crate) fn handle_event(&mut self, event: Event<'_, AppEvent>, control_flow: &mut ControlFlow) {
        match event {
            Event::UserEvent(app_event) => self.handle_app_event(app_event, control_flow),
            Event::WindowEvent {
                window_id, event, ..
            } if window_id == self.window.id() => self.handle_window_event(event, control_flow),
            _ => {}
        }
    }

    /// Release the system-wide registration. Safe to call more than once.
    pub(crate) fn shutdown(&mut self) {
        self.registry.unregister_all();
    }

    fn handle_app_event(&mut self, event: AppEvent, control_flow: &mut ControlFlow) {
        match event {
            AppEvent::GlobalHotkey(event) => self.handle_global_hotkey(event),
            AppEvent::Menu(event) => self.handle_menu_event(event, control_flow),
            AppEvent::ToggleClickThrough => self.toggle_click_through(),
            AppEvent::HotkeyCaptured(binding) => self.apply_binding(binding),
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent<'_>, control_flow: &mut ControlFlow) {
        match event {
            WindowEvent::Focused(focused) => {
                self.registry.set_focused(focused);
                if !focused && self.capture.focus_lost() == CaptureState::Cancelled {
                    self.sync_recording_state();
                }
            }
            WindowEvent::ModifiersChanged(state) => {
                self.modifiers = keymap::modifiers_from_tao(state);
                self.handle_key_event(KeyEvent::flags_changed(self.modifiers));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key) = keymap::from_tao(event.physical_key) else {
                    return;
                };

                let key_event = match event.state {
                    ElementState::Pressed if event.repeat => KeyEvent::key_repeat(key, self.modifiers),
                    ElementState::Pressed => KeyEvent::key_down(key, self.modifiers),
                    ElementState::Released => KeyEvent::key_up(key, self.modifiers),
                    _ => return,
                };

                self.handle_key_event(key_event);
            }
            WindowEvent::CloseRequested => {
                info!("Overlay window closed");
                self.shutdown();
                *control_flow = ControlFlow::Exit;
            }
            _ => {}
        }
    }

    /// Route window key events: to the recorder while it is listening,
    /// otherwise through the local hotkey filter.
    fn handle_key_event(&mut self, event: KeyEvent) {
        if self.capture.is_recording() {
            match self.capture.handle_event(&event) {
                CaptureState::Cancelled | CaptureState::Resolved(_) => self.sync_recording_state(),
                CaptureState::Recording | CaptureState::Idle => {}
            }
            return;
        }

        if self.registry.dispatch_local(&event) == LocalDisposition::Consumed {
            debug!(event = ?event.kind, "Key event consumed by hotkey");
        }
    }

    fn handle_global_hotkey(&mut self, event: GlobalHotKeyEvent) {
        let state = if event.state == HotKeyState::Pressed {
            GlobalHotkeyState::Pressed
        } else {
            GlobalHotkeyState::Released
        };

        self.registry
            .dispatch_global(RegistrationToken(event.id), state);
    }

    fn handle_menu_event(&mut self, event: MenuEvent, control_flow: &mut ControlFlow) {
        let event_id = &event.id;

        if event_id == self.tray_manager.click_through_item_id() {
            self.toggle_click_through();
        } else if event_id == self.tray_manager.shortcut_item_id() {
            self.start_recording();
        } else if event_id == self.tray_manager.quit_item_id() {
            info!("Quit requested from tray menu");
            self.shutdown();
            *control_flow = ControlFlow::Exit;
        }
    }

    #[instrument(skip(self))]
    fn start_recording(&mut self) {
        // Keys only reach the recorder through the overlay window.
        if self.click_through {
            self.toggle_click_through();
        }
        self.window.set_visible(true);
        self.window.set_focus();

        self.capture.begin();
        self.sync_recording_state();
    }

    /// Swap the registry to a freshly captured binding and persist it.
    #[instrument(skip_all, fields(binding = %binding))]
    fn apply_binding(&mut self, binding: HotkeyBinding) {
        match self.registry.update(binding) {
            Ok(()) => {
                self.config.set_hotkey_binding(binding);
                if let Err(e) = self.config.save() {
                    error!(error = ?e, "Failed to persist hotkey");
                }
            }
            Err(e) => {
                error!(error = ?e, "Failed to apply new hotkey, keeping previous");
                if let Some(active) = self.registry.active_binding() {
                    self.capture.set_committed(active);
                }
            }
        }

        self.sync_recording_state();
    }

    fn toggle_click_through(&mut self) {
        self.click_through = !self.click_through;

        if let Err(e) = self.window.set_ignore_cursor_events(self.click_through) {
            error!(error = ?e, "Failed to change click-through mode");
        }

        let state = TrayIconState::from_click_through(self.click_through);
        if let Err(e) = self.tray_manager.update_state(state) {
            error!(error = ?e, "Failed to update tray icon");
        }

        info!(click_through = self.click_through, "Click-through toggled");
    }

    /// Pause hotkey dispatch while recording and refresh the shortcut label.
    fn sync_recording_state(&mut self) {
        self.registry.set_paused(self.capture.is_recording());

        let label = self.capture.label(&self.formatter);
        self.tray_manager.set_shortcut_label(&label);

        if self.capture.is_recording() {
            self.window.set_title(&format!("Overlay: {}", label));
        } else {
            self.window.set_title("Overlay");
        }
    }
}
