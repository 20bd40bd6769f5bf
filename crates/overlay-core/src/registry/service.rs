use crate::{CoreResult, HotkeyBinding};

use std::fmt;

/// Opaque identifier of one system-wide registration.
///
/// Dispatch events from the service carry this token; the registry resolves
/// it back to its active handle instead of relying on process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationToken(pub u32);

impl fmt::Display for RegistrationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// System-wide hotkey registration service.
///
/// Delivers presses of a registered combination regardless of which
/// application has focus. Only one registration per identifier may be live;
/// registering again before unregistering is an error.
pub trait GlobalHotkeyService {
    /// Register `binding` system-wide.
    ///
    /// # Errors
    ///
    /// Returns [`HotkeyError::AlreadyRegistered`](crate::HotkeyError::AlreadyRegistered)
    /// if the identifier is still in use, or
    /// [`HotkeyError::RegistrationFailed`](crate::HotkeyError::RegistrationFailed)
    /// if the service rejects the combination.
    fn register(&mut self, binding: &HotkeyBinding) -> CoreResult<RegistrationToken>;

    /// Release a registration made by [`GlobalHotkeyService::register`].
    fn unregister(&mut self, token: RegistrationToken) -> CoreResult<()>;
}
