use crate::{HotkeyBinding, HotkeyError, KeyCode, KeyEvent, ModifierFlags};

/// WHAT: Non-semantic modifier bits are dropped when building a binding
/// WHY: Caps Lock or keypad noise must not make equal shortcuts compare unequal
#[test]
fn given_noisy_modifiers_when_creating_binding_then_only_canonical_bits_kept() {
    // Given: Control plus Caps Lock and keypad flags
    let noisy = ModifierFlags::CONTROL | ModifierFlags::CAPS_LOCK | ModifierFlags::NUMERIC_PAD;

    // When: Building a binding from the noisy set
    let binding = HotkeyBinding::new(KeyCode::SECTION, noisy);

    // Then: It equals the clean Control binding
    assert_eq!(binding.modifiers(), ModifierFlags::CONTROL);
    assert_eq!(binding, HotkeyBinding::DEFAULT);
}

/// WHAT: Bindings with different keys are unequal
/// WHY: Key identity is part of binding equality
#[test]
fn given_same_modifiers_different_keys_when_comparing_then_not_equal() {
    // Given: Two Control bindings on different keys
    let a = HotkeyBinding::new(KeyCode::A, ModifierFlags::CONTROL);
    let b = HotkeyBinding::new(KeyCode::B, ModifierFlags::CONTROL);

    // Then: They differ
    assert_ne!(a, b);
}

/// WHAT: Exact modifier set is required for a match
/// WHY: A superset such as Control+Shift must not trigger a Control binding
#[test]
fn given_control_binding_when_matching_supersets_and_subsets_then_only_exact_set_matches() {
    // Given: Control + § binding
    let binding = HotkeyBinding::DEFAULT;

    // Then: Exact set matches, with or without noise bits
    assert!(binding.matches(KeyCode::SECTION, ModifierFlags::CONTROL));
    assert!(binding.matches(
        KeyCode::SECTION,
        ModifierFlags::CONTROL | ModifierFlags::CAPS_LOCK | ModifierFlags::FUNCTION
    ));

    // And: Supersets, subsets and other keys do not
    assert!(!binding.matches(
        KeyCode::SECTION,
        ModifierFlags::CONTROL | ModifierFlags::SHIFT
    ));
    assert!(!binding.matches(KeyCode::SECTION, ModifierFlags::empty()));
    assert!(!binding.matches(KeyCode::GRAVE, ModifierFlags::CONTROL));
}

/// WHAT: Two-modifier bindings reject a single modifier
/// WHY: Matching is symmetric set equality, not containment
#[test]
fn given_control_shift_binding_when_only_control_held_then_no_match() {
    // Given: Control + Shift + K
    let binding = HotkeyBinding::new(KeyCode::K, ModifierFlags::CONTROL | ModifierFlags::SHIFT);

    // Then: Only the full set matches
    assert!(!binding.matches(KeyCode::K, ModifierFlags::CONTROL));
    assert!(binding.matches(KeyCode::K, ModifierFlags::SHIFT | ModifierFlags::CONTROL));
}

/// WHAT: Raw persisted values round into a valid binding
/// WHY: Settings store the key code and the raw modifier mask
#[test]
#[allow(clippy::unwrap_used)]
fn given_persisted_pair_when_loading_binding_then_binding_restored() {
    // Given: key 10 with Control bit (1 << 18) and Caps Lock noise
    let raw = (1u64 << 18) | (1u64 << 16);

    // When: Rebuilding from raw values
    let binding = HotkeyBinding::from_raw(10, raw).unwrap();

    // Then: The default Control + § comes back
    assert_eq!(binding, HotkeyBinding::DEFAULT);
}

/// WHAT: Persisted values without modifiers are rejected
/// WHY: A bare key would swallow normal typing system-wide
#[test]
fn given_bare_key_when_loading_binding_then_invalid_binding_error() {
    // Given: key A with only Caps Lock set
    let raw = ModifierFlags::CAPS_LOCK.bits();

    // When: Rebuilding from raw values
    let result = HotkeyBinding::from_raw(KeyCode::A.raw(), raw);

    // Then: Rejected as invalid
    assert!(matches!(result, Err(HotkeyError::InvalidBinding { .. })));
}

/// WHAT: Unknown raw bits survive until canonicalization
/// WHY: Canonicalization is the single place noise is discarded
#[test]
fn given_unknown_raw_bits_when_canonicalizing_then_bits_removed() {
    // Given: An event mask with device-specific low bits
    let raw = ModifierFlags::from_raw(ModifierFlags::OPTION.bits() | 0x0102);

    // Then: Raw keeps them, canonical drops them
    assert_eq!(raw.bits() & 0x0102, 0x0102);
    assert_eq!(raw.canonical(), ModifierFlags::OPTION);
    assert!(!raw.is_bare());
    assert!(ModifierFlags::CAPS_LOCK.is_bare());
}

/// WHAT: Key events expose canonical modifiers
/// WHY: Both dispatch and recording compare canonical sets
#[test]
fn given_key_event_with_noise_when_reading_canonical_modifiers_then_noise_removed() {
    // Given: Shift + keypad flag
    let event = KeyEvent::key_down(KeyCode::A, ModifierFlags::SHIFT | ModifierFlags::NUMERIC_PAD);

    // Then: Only Shift remains
    assert_eq!(event.canonical_modifiers(), ModifierFlags::SHIFT);
}

/// WHAT: Display renders the default binding as glyphs
/// WHY: Labels without layout access still need a readable form
#[test]
fn given_default_binding_when_displaying_then_control_section_glyphs() {
    assert_eq!(HotkeyBinding::DEFAULT.to_string(), "⌃§");
    assert_eq!(HotkeyBinding::default(), HotkeyBinding::DEFAULT);
}
