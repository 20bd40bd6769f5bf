//! Interactive "click, then press keys" shortcut recorder.

use crate::{CaptureState, HotkeyBinding, KeyCode, KeyEvent, KeyEventKind, KeyLabelFormatter};

use tracing::{debug, info, instrument};

/// Label shown while the recorder is waiting for keys.
pub const RECORDING_PLACEHOLDER: &str = "Press keys...";

/// Owner notification for a freshly captured binding.
pub type BindingCallback = Box<dyn FnMut(&HotkeyBinding)>;

/// State machine behind the shortcut recorder control.
///
/// A capture needs a key-down with at least one of Control, Option, Shift
/// or Command held. Modifier-only changes are never captured, a bare Escape
/// cancels, and any other bare key is ignored while the session keeps
/// waiting.
pub struct HotkeyCaptureSession {
    committed: HotkeyBinding,
    state: CaptureState,
    cancel_key: KeyCode,
    on_resolved: Option<BindingCallback>,
}

impl HotkeyCaptureSession {
    /// Create an idle session showing `committed`.
    pub fn new(committed: HotkeyBinding) -> Self {
        Self {
            committed,
            state: CaptureState::Idle,
            cancel_key: KeyCode::ESCAPE,
            on_resolved: None,
        }
    }

    /// Install the owner callback invoked with every captured binding.
    pub fn on_resolved<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&HotkeyBinding) + 'static,
    {
        self.on_resolved = Some(Box::new(callback));
        self
    }

    /// Current held state: `Idle` or `Recording`.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Whether key events should be routed here instead of the hotkey filter.
    pub fn is_recording(&self) -> bool {
        self.state == CaptureState::Recording
    }

    /// Binding displayed when not recording.
    pub fn committed(&self) -> HotkeyBinding {
        self.committed
    }

    /// Replace the displayed binding after it changed elsewhere.
    pub fn set_committed(&mut self, binding: HotkeyBinding) {
        self.committed = binding;
    }

    /// The control became the active input target: start listening.
    #[instrument(skip(self))]
    pub fn begin(&mut self) -> CaptureState {
        if self.state != CaptureState::Recording {
            self.state = CaptureState::Recording;
            info!("Shortcut recording started");
        }
        self.state
    }

    /// Feed one keyboard event.
    ///
    /// Returns the state the event led to. `Recording` means the event was
    /// ignored and the session is still waiting; `Idle` means the session was
    /// not recording at all.
    pub fn handle_event(&mut self, event: &KeyEvent) -> CaptureState {
        if self.state != CaptureState::Recording {
            return CaptureState::Idle;
        }

        let KeyEventKind::KeyDown { key, repeat } = event.kind else {
            // Modifier taps and releases never complete a combination.
            return CaptureState::Recording;
        };

        if repeat {
            return CaptureState::Recording;
        }

        let modifiers = event.canonical_modifiers();

        if modifiers.is_empty() {
            if key == self.cancel_key {
                return self.cancel("escape");
            }
            debug!(key = %key, "Ignoring key without modifiers");
            return CaptureState::Recording;
        }

        self.resolve(HotkeyBinding::new(key, modifiers))
    }

    /// The control lost input focus. Cancels an unfinished capture.
    pub fn focus_lost(&mut self) -> CaptureState {
        if self.state == CaptureState::Recording {
            self.cancel("focus lost")
        } else {
            CaptureState::Idle
        }
    }

    /// Text for the control: a placeholder while recording, otherwise the
    /// committed binding.
    pub fn label(&self, formatter: &KeyLabelFormatter) -> String {
        match self.state {
            CaptureState::Recording => RECORDING_PLACEHOLDER.to_string(),
            _ => formatter.format(&self.committed),
        }
    }

    fn cancel(&mut self, reason: &'static str) -> CaptureState {
        self.state = CaptureState::Idle;
        info!(reason, committed = %self.committed, "Shortcut recording cancelled");
        CaptureState::Cancelled
    }

    fn resolve(&mut self, binding: HotkeyBinding) -> CaptureState {
        self.committed = binding;
        self.state = CaptureState::Idle;
        info!(binding = %binding, "Shortcut captured");

        if let Some(callback) = self.on_resolved.as_mut() {
            callback(&binding);
        }

        CaptureState::Resolved(binding)
    }
}

impl std::fmt::Debug for HotkeyCaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotkeyCaptureSession")
            .field("committed", &self.committed)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
