use crate::{
    CaptureState, HotkeyBinding, HotkeyCaptureSession, KeyCode, KeyEvent, KeyLabelFormatter,
    ModifierFlags, RECORDING_PLACEHOLDER,
};

use std::{cell::RefCell, rc::Rc};

fn recording_session() -> (HotkeyCaptureSession, Rc<RefCell<Vec<HotkeyBinding>>>) {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&captured);
    let mut session = HotkeyCaptureSession::new(HotkeyBinding::DEFAULT)
        .on_resolved(move |binding| sink.borrow_mut().push(*binding));
    session.begin();
    (session, captured)
}

/// WHAT: Clicking the control starts recording with a placeholder label
/// WHY: The user needs feedback that keys are being listened for
#[test]
fn given_idle_session_when_beginning_then_recording_with_placeholder() {
    // Given: Idle session
    let mut session = HotkeyCaptureSession::new(HotkeyBinding::DEFAULT);
    let formatter = KeyLabelFormatter::default();
    assert_eq!(session.label(&formatter), "⌃§");

    // When: Recording begins
    let state = session.begin();

    // Then: Recording, placeholder shown
    assert_eq!(state, CaptureState::Recording);
    assert!(session.is_recording());
    assert_eq!(session.label(&formatter), RECORDING_PLACEHOLDER);
}

/// WHAT: Modifier-only taps are ignored, then a Shift+A press resolves
/// WHY: A habitual Shift tap must not be mistaken for a shortcut
#[test]
fn given_recording_when_shift_tapped_then_shift_a_pressed_then_resolves_to_shift_a() {
    // Given: Recording session
    let (mut session, captured) = recording_session();

    // When: Shift alone changes flags
    let after_flags = session.handle_event(&KeyEvent::flags_changed(ModifierFlags::SHIFT));

    // Then: Still recording
    assert_eq!(after_flags, CaptureState::Recording);
    assert!(session.is_recording());

    // When: Shift + A goes down
    let resolved = session.handle_event(&KeyEvent::key_down(KeyCode::A, ModifierFlags::SHIFT));

    // Then: Resolved to Shift + A, session back to Idle, owner notified once
    let expected = HotkeyBinding::new(KeyCode::A, ModifierFlags::SHIFT);
    assert_eq!(resolved, CaptureState::Resolved(expected));
    assert_eq!(session.state(), CaptureState::Idle);
    assert_eq!(session.committed(), expected);
    assert_eq!(*captured.borrow(), vec![expected]);
}

/// WHAT: Bare Escape cancels without producing a binding
/// WHY: Escape is the explicit way out of recording
#[test]
fn given_recording_when_escape_pressed_then_cancelled_and_committed_kept() {
    // Given: Recording session over the default binding
    let (mut session, captured) = recording_session();
    let formatter = KeyLabelFormatter::default();

    // When: Escape with no modifiers
    let state = session.handle_event(&KeyEvent::key_down(KeyCode::ESCAPE, ModifierFlags::empty()));

    // Then: Cancelled, idle, label reverts to the committed binding
    assert_eq!(state, CaptureState::Cancelled);
    assert_eq!(session.state(), CaptureState::Idle);
    assert_eq!(session.committed(), HotkeyBinding::DEFAULT);
    assert_eq!(session.label(&formatter), "⌃§");
    assert!(captured.borrow().is_empty());
}

/// WHAT: Escape with a modifier is captured, not cancelled
/// WHY: Cancel applies only to a bare Escape
#[test]
fn given_recording_when_control_escape_pressed_then_resolves() {
    let (mut session, _captured) = recording_session();

    let state =
        session.handle_event(&KeyEvent::key_down(KeyCode::ESCAPE, ModifierFlags::CONTROL));

    assert_eq!(
        state,
        CaptureState::Resolved(HotkeyBinding::new(KeyCode::ESCAPE, ModifierFlags::CONTROL))
    );
}

/// WHAT: Bare non-cancel keys are ignored
/// WHY: Plain letters are not legal global shortcuts
#[test]
fn given_recording_when_plain_key_pressed_then_still_recording() {
    // Given: Recording session
    let (mut session, captured) = recording_session();

    // When: Plain A, and A with only Caps Lock
    let plain = session.handle_event(&KeyEvent::key_down(KeyCode::A, ModifierFlags::empty()));
    let caps = session.handle_event(&KeyEvent::key_down(KeyCode::A, ModifierFlags::CAPS_LOCK));

    // Then: No transition
    assert_eq!(plain, CaptureState::Recording);
    assert_eq!(caps, CaptureState::Recording);
    assert!(session.is_recording());
    assert!(captured.borrow().is_empty());
}

/// WHAT: Captured bindings carry only canonical modifiers
/// WHY: Noise bits would make the stored binding fail to match later
#[test]
fn given_recording_when_key_pressed_with_noise_bits_then_binding_is_canonical() {
    let (mut session, _captured) = recording_session();

    let state = session.handle_event(&KeyEvent::key_down(
        KeyCode::F5,
        ModifierFlags::COMMAND | ModifierFlags::OPTION | ModifierFlags::FUNCTION,
    ));

    let CaptureState::Resolved(binding) = state else {
        unreachable!("expected a resolved binding, got {state:?}");
    };
    assert_eq!(binding.modifiers(), ModifierFlags::COMMAND | ModifierFlags::OPTION);
    assert_eq!(binding.key(), KeyCode::F5);
}

/// WHAT: Losing focus mid-capture cancels
/// WHY: Clicking elsewhere must not commit a stray binding
#[test]
fn given_recording_when_focus_lost_then_cancelled_without_binding() {
    // Given: Recording session
    let (mut session, captured) = recording_session();

    // When: Focus moves away
    let state = session.focus_lost();

    // Then: Cancelled, subsequent key-downs are not captured
    assert_eq!(state, CaptureState::Cancelled);
    let after = session.handle_event(&KeyEvent::key_down(KeyCode::A, ModifierFlags::SHIFT));
    assert_eq!(after, CaptureState::Idle);
    assert!(captured.borrow().is_empty());
}

/// WHAT: Focus loss while idle is a no-op
/// WHY: Only an unfinished capture can be cancelled
#[test]
fn given_idle_session_when_focus_lost_then_stays_idle() {
    let mut session = HotkeyCaptureSession::new(HotkeyBinding::DEFAULT);

    assert_eq!(session.focus_lost(), CaptureState::Idle);
}

/// WHAT: After a capture the session can record again
/// WHY: The control is ready without further user action
#[test]
fn given_resolved_capture_when_beginning_again_then_records_next_binding() {
    // Given: A completed capture
    let (mut session, captured) = recording_session();
    session.handle_event(&KeyEvent::key_down(KeyCode::A, ModifierFlags::SHIFT));

    // When: Recording again
    session.begin();
    session.handle_event(&KeyEvent::key_down(KeyCode::B, ModifierFlags::CONTROL));

    // Then: Both captures reached the owner
    assert_eq!(captured.borrow().len(), 2);
    assert_eq!(
        session.committed(),
        HotkeyBinding::new(KeyCode::B, ModifierFlags::CONTROL)
    );
}

/// WHAT: Auto-repeat and key-up events are ignored while recording
/// WHY: Only a fresh key-down completes a combination
#[test]
fn given_recording_when_repeat_or_key_up_arrives_then_still_recording() {
    let (mut session, _captured) = recording_session();

    let repeat = session.handle_event(&KeyEvent::key_repeat(KeyCode::A, ModifierFlags::SHIFT));
    let up = session.handle_event(&KeyEvent::key_up(KeyCode::A, ModifierFlags::SHIFT));

    assert_eq!(repeat, CaptureState::Recording);
    assert_eq!(up, CaptureState::Recording);
}

/// WHAT: Beginning twice keeps a single recording
/// WHY: A second click on the control must not reset anything
#[test]
fn given_recording_when_beginning_again_then_still_recording() {
    let (mut session, _captured) = recording_session();

    assert_eq!(session.begin(), CaptureState::Recording);
    assert!(session.is_recording());
}

/// WHAT: External commits update the displayed label
/// WHY: A rejected registration reverts the recorder to the live binding
#[test]
fn given_resolved_capture_when_committed_externally_then_label_follows() {
    let (mut session, _captured) = recording_session();
    session.handle_event(&KeyEvent::key_down(KeyCode::A, ModifierFlags::SHIFT));

    session.set_committed(HotkeyBinding::DEFAULT);

    assert_eq!(session.label(&KeyLabelFormatter::default()), "⌃§");
}
