/// Tray icon states corresponding to the overlay's mouse mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Overlay receives mouse input.
    Interactive,
    /// Mouse input passes through the overlay.
    ClickThrough,
}

impl TrayIconState {
    /// State for a click-through flag.
    pub fn from_click_through(enabled: bool) -> Self {
        if enabled {
            Self::ClickThrough
        } else {
            Self::Interactive
        }
    }
}
