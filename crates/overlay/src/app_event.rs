use global_hotkey::GlobalHotKeyEvent;
use overlay_core::HotkeyBinding;
use tray_icon::menu::MenuEvent;

/// User events delivered to the main thread's event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// The system-wide hotkey service reported a press or release.
    GlobalHotkey(GlobalHotKeyEvent),
    /// A tray menu item was activated.
    Menu(MenuEvent),
    /// The active hotkey fired; flip click-through mode.
    ToggleClickThrough,
    /// The shortcut recorder captured a new binding.
    HotkeyCaptured(HotkeyBinding),
}
