#[allow(clippy::module_inception)]
mod config;
mod hotkey_config;

pub(crate) use {config::Config, hotkey_config::HotkeyConfig};
