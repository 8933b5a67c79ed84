use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('q'));
    assert_eq!(key.code, KeyCode::Char('q'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event() {
    let event = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    let key: Key = event.into();
    assert_eq!(key, Key::simple(KeyCode::Enter));
}

#[test]
fn shifted_punctuation_drops_shift() {
    let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
    let key: Key = event.into();
    assert_eq!(key, Key::simple(KeyCode::Char('+')));

    let event = KeyEvent::new(KeyCode::Char('('), KeyModifiers::SHIFT);
    let key: Key = event.into();
    assert_eq!(key, Key::simple(KeyCode::Char('(')));
}

#[test]
fn uppercase_letters_normalize_to_shift() {
    let event = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::CONTROL);
    let key: Key = event.into();
    assert_eq!(key.code, KeyCode::Char('q'));
    assert!(key.modifiers.contains(KeyModifiers::CONTROL));
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn modifiers_combine() {
    let mut mods = KeyModifiers::NONE;
    assert!(mods.is_empty());
    mods |= KeyModifiers::CONTROL;
    mods |= KeyModifiers::ALT;
    assert!(mods.contains(KeyModifiers::CONTROL | KeyModifiers::ALT));
    assert!(!mods.contains(KeyModifiers::SHIFT));
    mods.remove(KeyModifiers::ALT);
    assert_eq!(mods, KeyModifiers::CONTROL);
}

#[test]
fn test_input_event_accessors() {
    let input = InputEvent::Key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
    assert!(input.is_key());
    assert!(!input.is_mouse());
    assert!(input.as_key().is_some());
    assert!(input.as_mouse().is_none());
}
