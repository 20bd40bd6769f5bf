use crate::HotkeyBinding;

/// State of the shortcut recorder.
///
/// Only `Idle` and `Recording` are ever held by a session. `Resolved` and
/// `Cancelled` are reported by the transition that produced them, after
/// which the session is already back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Showing the committed binding, not listening.
    Idle,
    /// Waiting for a key combination.
    Recording,
    /// A new binding was captured.
    Resolved(HotkeyBinding),
    /// Recording ended without a binding.
    Cancelled,
}
