//! Single active hotkey with two event sources.
//!
//! The registry owns one [`RegistrationHandle`]: a system-wide registration
//! plus the in-process key filter, both tied to the same binding. Presses
//! can reach it from either source; each physical press invokes the toggle
//! callback at most once.

use crate::{
    CoreResult, GlobalHotkeyService, HotkeyBinding, KeyEvent, KeyEventKind, RegistrationToken,
};

use tracing::{debug, error, info, instrument, warn};

/// Zero-argument notification invoked when the active hotkey is pressed.
pub type ToggleCallback = Box<dyn FnMut()>;

/// The live registration of the active binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationHandle {
    binding: HotkeyBinding,
    token: RegistrationToken,
}

impl RegistrationHandle {
    /// Binding both halves of the registration listen for.
    pub fn binding(&self) -> HotkeyBinding {
        self.binding
    }

    /// Identifier shared with the system-wide service.
    pub fn token(&self) -> RegistrationToken {
        self.token
    }
}

/// What the host should do with a key event after the local filter saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalDisposition {
    /// The event was the hotkey; do not deliver it to text input.
    Consumed,
    /// Not ours; deliver normally.
    PassThrough,
}

/// Press/release phase reported by the system-wide service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalHotkeyState {
    /// The combination went down.
    Pressed,
    /// The key of the combination came back up.
    Released,
}

/// Presses already fired by one source whose report from the other source
/// has not arrived yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PendingEchoes {
    /// Fired globally, local key-down still due.
    local: u32,
    /// Fired locally, global press still due.
    global: u32,
}

/// Owner of the active hotkey registration.
///
/// All methods run on the UI thread. The two event sources are arbitrated
/// per physical press: whichever source reports the press first fires the
/// callback, and the other source's report of that same press is swallowed
/// whenever it arrives. The global report travels through a forwarding
/// thread, so it may land after the local key-up. Outstanding reports are
/// forgotten on focus changes, since the other source may never see them.
pub struct HotkeyRegistry<S: GlobalHotkeyService> {
    service: S,
    callback: Option<ToggleCallback>,
    active: Option<RegistrationHandle>,
    pending: PendingEchoes,
    focused: bool,
    paused: bool,
}

impl<S: GlobalHotkeyService> HotkeyRegistry<S> {
    /// Create an empty registry on top of a system-wide hotkey service.
    pub fn new(service: S) -> Self {
        Self {
            service,
            callback: None,
            active: None,
            pending: PendingEchoes::default(),
            focused: false,
            paused: false,
        }
    }

    /// Install `binding` with `callback` as the active hotkey.
    ///
    /// Any registration that is already live is released first, so there is
    /// never more than one handle.
    ///
    /// # Errors
    ///
    /// Returns the service's registration error. The previously active
    /// binding, if any, stays registered together with its callback.
    #[track_caller]
    #[instrument(skip_all, fields(binding = %binding))]
    pub fn register<F>(
        &mut self,
        binding: HotkeyBinding,
        callback: F,
    ) -> CoreResult<RegistrationToken>
    where
        F: FnMut() + 'static,
    {
        let token = self.swap(binding)?;
        self.callback = Some(Box::new(callback));
        Ok(token)
    }

    /// Replace the active binding, keeping the callback.
    ///
    /// The old registration is always released before the new one is made;
    /// the service rejects a second registration while the first is live.
    ///
    /// # Errors
    ///
    /// Returns the service's error. On failure the previous binding is
    /// re-registered so the user keeps a working shortcut.
    #[track_caller]
    #[instrument(skip_all, fields(binding = %binding))]
    pub fn update(&mut self, binding: HotkeyBinding) -> CoreResult<()> {
        if self.active_binding() == Some(binding) {
            debug!("Binding unchanged, keeping current registration");
            return Ok(());
        }

        self.swap(binding).map(|_| ())
    }

    /// Release the active registration. Safe to call repeatedly.
    ///
    /// Must run while the host's event infrastructure is still alive.
    #[instrument(skip(self))]
    pub fn unregister_all(&mut self) {
        self.pending = PendingEchoes::default();

        let Some(handle) = self.active.take() else {
            return;
        };

        match self.service.unregister(handle.token) {
            Ok(()) => info!(token = %handle.token, binding = %handle.binding, "Hotkey unregistered"),
            Err(e) => warn!(token = %handle.token, error = ?e, "Failed to unregister hotkey"),
        }
    }

    /// Record whether the host application has input focus.
    ///
    /// Reports still due from the other source are forgotten: after a focus
    /// change they may be delivered elsewhere or never.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            debug!(focused, "Focus changed");
            self.pending = PendingEchoes::default();
        }
        self.focused = focused;
    }

    /// Whether the host application currently has input focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Suspend both dispatch paths, e.g. while a new shortcut is being
    /// recorded. The registration itself stays live.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, "Hotkey dispatch pause changed");
            self.pending = PendingEchoes::default();
        }
        self.paused = paused;
    }

    /// Whether dispatch is suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// In-process filter for key events seen while the host has focus.
    pub fn dispatch_local(&mut self, event: &KeyEvent) -> LocalDisposition {
        let Some(handle) = self.active else {
            return LocalDisposition::PassThrough;
        };
        if self.paused {
            return LocalDisposition::PassThrough;
        }
        let binding = handle.binding;

        match event.kind {
            KeyEventKind::KeyDown { key, repeat } => {
                if !binding.matches(key, event.modifiers) {
                    return LocalDisposition::PassThrough;
                }

                if repeat {
                    debug!(binding = %binding, "Ignoring auto-repeat of hotkey");
                } else if self.pending.local > 0 {
                    // Same press already fired through the system-wide path.
                    debug!(binding = %binding, "Hotkey press already handled globally");
                    self.pending.local -= 1;
                } else {
                    self.pending.global = self.pending.global.saturating_add(1);
                    self.fire("local");
                }

                LocalDisposition::Consumed
            }
            KeyEventKind::KeyUp { key } => {
                // A key-down for a globally fired press can no longer arrive.
                if key == binding.key() {
                    self.pending.local = 0;
                }
                LocalDisposition::PassThrough
            }
            KeyEventKind::FlagsChanged => LocalDisposition::PassThrough,
        }
    }

    /// Entry point for the system-wide service's dispatch callback.
    ///
    /// `token` is resolved against the active handle; events for stale or
    /// foreign registrations are ignored. Returns whether the callback ran.
    pub fn dispatch_global(&mut self, token: RegistrationToken, state: GlobalHotkeyState) -> bool {
        let Some(handle) = self.active else {
            return false;
        };
        if self.paused {
            debug!(token = %token, "Hotkey dispatch paused, ignoring global event");
            return false;
        }

        if handle.token != token {
            debug!(token = %token, active = %handle.token, "Ignoring event for inactive registration");
            return false;
        }

        match state {
            GlobalHotkeyState::Released => false,
            GlobalHotkeyState::Pressed if self.pending.global > 0 => {
                debug!(binding = %handle.binding, "Hotkey press already handled locally");
                self.pending.global -= 1;
                false
            }
            GlobalHotkeyState::Pressed => {
                // Without focus the local monitor never reports this press.
                if self.focused {
                    self.pending.local = self.pending.local.saturating_add(1);
                }
                self.fire("global");
                true
            }
        }
    }

    /// Binding of the live registration, if any.
    pub fn active_binding(&self) -> Option<HotkeyBinding> {
        self.active.map(|h| h.binding)
    }

    /// The live registration, if any.
    pub fn active_handle(&self) -> Option<&RegistrationHandle> {
        self.active.as_ref()
    }

    /// The underlying system-wide service.
    pub fn service(&self) -> &S {
        &self.service
    }

    fn fire(&mut self, source: &'static str) {
        match self.callback.as_mut() {
            Some(callback) => {
                debug!(source, "Hotkey triggered");
                callback();
            }
            None => warn!(source, "Hotkey triggered with no callback installed"),
        }
    }

    /// Unregister the current handle, then register `binding`.
    #[track_caller]
    fn swap(&mut self, binding: HotkeyBinding) -> CoreResult<RegistrationToken> {
        debug_assert!(
            binding.has_modifiers(),
            "global hotkey binding without modifiers"
        );

        let previous = self.active.take();
        self.pending = PendingEchoes::default();

        if let Some(old) = previous {
            if let Err(e) = self.service.unregister(old.token) {
                // Old registration is still live; keep it as the active one.
                self.active = Some(old);
                warn!(token = %old.token, error = ?e, "Could not release previous hotkey");
                return Err(e);
            }
            debug!(token = %old.token, binding = %old.binding, "Previous hotkey released");
        }

        match self.service.register(&binding) {
            Ok(token) => {
                self.active = Some(RegistrationHandle { binding, token });
                info!(token = %token, binding = %binding, "Hotkey registered");
                Ok(token)
            }
            Err(e) => {
                warn!(binding = %binding, error = ?e, "Hotkey registration rejected");
                if let Some(old) = previous {
                    self.restore(old.binding);
                }
                Err(e)
            }
        }
    }

    fn restore(&mut self, binding: HotkeyBinding) {
        match self.service.register(&binding) {
            Ok(token) => {
                self.active = Some(RegistrationHandle { binding, token });
                info!(token = %token, binding = %binding, "Previous hotkey restored");
            }
            Err(e) => {
                error!(binding = %binding, error = ?e, "Failed to restore previous hotkey, no shortcut active");
            }
        }
    }
}

impl<S: GlobalHotkeyService> Drop for HotkeyRegistry<S> {
    fn drop(&mut self) {
        self.unregister_all();
    }
}
