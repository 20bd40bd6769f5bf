//! Keyboard-layout lookups for shortcut labels.

use overlay_core::KeyLabelFormatter;

/// Formatter backed by the current keyboard layout where the platform
/// exposes one.
pub(crate) fn platform_formatter() -> KeyLabelFormatter {
    #[cfg(target_os = "macos")]
    {
        KeyLabelFormatter::new(carbon::CurrentLayout)
    }
    #[cfg(not(target_os = "macos"))]
    {
        KeyLabelFormatter::new(overlay_core::NoLayout)
    }
}

#[cfg(target_os = "macos")]
mod carbon {
    use std::ffi::c_void;

    use core_foundation::{
        base::{CFRelease, CFTypeRef},
        data::{CFDataGetBytePtr, CFDataRef},
        string::CFStringRef,
    };
    use overlay_core::{KeyCode, LayoutResolver};
    use tracing::debug;

    type TISInputSourceRef = *mut c_void;

    const UC_KEY_ACTION_DISPLAY: u16 = 3;
    const UC_KEY_TRANSLATE_NO_DEAD_KEYS_MASK: u32 = 1;
    const MAX_CHARS: usize = 4;

    #[link(name = "Carbon", kind = "framework")]
    unsafe extern "C" {
        static kTISPropertyUnicodeKeyLayoutData: CFStringRef;

        fn TISCopyCurrentKeyboardLayoutInputSource() -> TISInputSourceRef;
        fn TISGetInputSourceProperty(source: TISInputSourceRef, key: CFStringRef) -> *const c_void;
        fn LMGetKbdType() -> u8;
        fn UCKeyTranslate(
            layout: *const c_void,
            virtual_key_code: u16,
            key_action: u16,
            modifier_key_state: u32,
            keyboard_type: u32,
            key_translate_options: u32,
            dead_key_state: *mut u32,
            max_string_length: usize,
            actual_string_length: *mut usize,
            unicode_string: *mut u16,
        ) -> i32;
    }

    /// Resolver asking the active keyboard layout via `UCKeyTranslate`.
    ///
    /// Queried on every call so a layout switch is reflected immediately.
    /// Must run on the main thread.
    pub(super) struct CurrentLayout;

    impl LayoutResolver for CurrentLayout {
        fn character_for(&self, key: KeyCode) -> Option<String> {
            // SAFETY: TIS/UC calls happen on the main thread; the input source
            // is released after use and the layout data pointer is only read
            // while the source is alive.
            unsafe {
                let source = TISCopyCurrentKeyboardLayoutInputSource();
                if source.is_null() {
                    return None;
                }

                let data = TISGetInputSourceProperty(source, kTISPropertyUnicodeKeyLayoutData)
                    as CFDataRef;
                if data.is_null() {
                    CFRelease(source as CFTypeRef);
                    return None;
                }

                let layout = CFDataGetBytePtr(data) as *const c_void;
                let mut dead_key_state = 0u32;
                let mut chars = [0u16; MAX_CHARS];
                let mut length = 0usize;

                let status = UCKeyTranslate(
                    layout,
                    key.raw(),
                    UC_KEY_ACTION_DISPLAY,
                    0,
                    u32::from(LMGetKbdType()),
                    UC_KEY_TRANSLATE_NO_DEAD_KEYS_MASK,
                    &mut dead_key_state,
                    MAX_CHARS,
                    &mut length,
                    chars.as_mut_ptr(),
                );

                CFRelease(source as CFTypeRef);

                if status != 0 || length == 0 {
                    debug!(key = %key, status, "Layout has no character for key");
                    return None;
                }

                String::from_utf16(&chars[..length.min(MAX_CHARS)]).ok()
            }
        }
    }
}
