//! Status-bar icon with click-through state and shortcut entry.
//!
//! The menu shows a click-through toggle, the current toggle shortcut (click
//! to record a new one) and Quit.

use crate::{AppError, AppResult, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    click_through_item: CheckMenuItem,
    shortcut_item: MenuItem,
    click_through_item_id: MenuId,
    shortcut_item_id: MenuId,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create a new tray manager in the interactive state.
    #[track_caller]
    #[instrument]
    pub fn new(shortcut_label: &str) -> AppResult<Self> {
        let menu = Menu::new();

        let click_through_item = CheckMenuItem::new("Click-Through", true, false, None);
        let shortcut_item = MenuItem::new(Self::shortcut_text(shortcut_label), true, None);
        let quit_item = MenuItem::new("Quit Overlay", true, None);

        let click_through_item_id = click_through_item.id().clone();
        let shortcut_item_id = shortcut_item.id().clone();
        let quit_item_id = quit_item.id().clone();

        menu.append(&click_through_item)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add click-through menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        menu.append(&shortcut_item)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add shortcut menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        menu.append(&PredefinedMenuItem::separator())
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to add menu separator: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        menu.append(&quit_item).map_err(|e| AppError::TrayError {
            reason: format!("Failed to add quit menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let icon = Self::load_icon(TrayIconState::Interactive)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(Self::tooltip(TrayIconState::Interactive))
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            click_through_item,
            shortcut_item,
            click_through_item_id,
            shortcut_item_id,
            quit_item_id,
        })
    }

    /// Update icon, tooltip and check mark for a new click-through state.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: TrayIconState) -> AppResult<()> {
        let icon = Self::load_icon(state)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(Self::tooltip(state)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.click_through_item
            .set_checked(state == TrayIconState::ClickThrough);

        Ok(())
    }

    /// Show `label` on the shortcut entry.
    pub fn set_shortcut_label(&self, label: &str) {
        self.shortcut_item.set_text(Self::shortcut_text(label));
    }

    /// Get the click-through menu item ID.
    pub fn click_through_item_id(&self) -> &MenuId {
        &self.click_through_item_id
    }

    /// Get the shortcut menu item ID.
    pub fn shortcut_item_id(&self) -> &MenuId {
        &self.shortcut_item_id
    }

    /// Get the quit menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }

    fn shortcut_text(label: &str) -> String {
        format!("Shortcut: {}", label)
    }

    fn tooltip(state: TrayIconState) -> &'static str {
        match state {
            TrayIconState::Interactive => "Overlay",
            TrayIconState::ClickThrough => "Overlay - Click-Through",
        }
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon(state: TrayIconState) -> AppResult<Icon> {
        let png_bytes: &[u8] = match state {
            TrayIconState::Interactive => include_bytes!("../resources/icons/interactive.png"),
            TrayIconState::ClickThrough => include_bytes!("../resources/icons/click_through.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
