use super::*;

#[test]
fn key_press_converts_code_and_modifiers() {
    let event = ct::Event::Key(ct::KeyEvent::new(
        ct::KeyCode::Char('q'),
        ct::KeyModifiers::CONTROL,
    ));
    let Some(InputEvent::Key(key)) = into_input_event(event) else {
        panic!("expected key event");
    };
    assert_eq!(key.code, KeyCode::Char('q'));
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));
    assert_eq!(key.kind, KeyEventKind::Press);
}

#[test]
fn key_release_is_dropped() {
    let event = ct::Event::Key(ct::KeyEvent::new_with_kind(
        ct::KeyCode::Char('1'),
        ct::KeyModifiers::NONE,
        ct::KeyEventKind::Release,
    ));
    assert_eq!(into_input_event(event), None);
}

#[test]
fn shifted_punctuation_keeps_shift_until_normalized() {
    let key = into_key_event(ct::KeyEvent::new(
        ct::KeyCode::Char('+'),
        ct::KeyModifiers::SHIFT,
    ));
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
    let normalized = crate::core::event::Key::from(key);
    assert_eq!(
        normalized,
        crate::core::event::Key::simple(KeyCode::Char('+'))
    );
}

#[test]
fn unsupported_keys_become_unknown() {
    let key = into_key_event(ct::KeyEvent::new(
        ct::KeyCode::Insert,
        ct::KeyModifiers::NONE,
    ));
    assert_eq!(key.code, KeyCode::Unknown);
}

#[test]
fn mouse_click_keeps_position() {
    let event = ct::Event::Mouse(ct::MouseEvent {
        kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
        column: 12,
        row: 7,
        modifiers: ct::KeyModifiers::NONE,
    });
    assert_eq!(
        into_input_event(event),
        Some(InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }))
    );
}

#[test]
fn resize_passes_through() {
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        Some(InputEvent::Resize(80, 24))
    );
}
