use super::*;

#[test]
fn digits_and_operators_append() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Char('7'))),
        Some(&Command::Append('7'))
    );
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Char('%'))),
        Some(&Command::Append('%'))
    );
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Char('('))),
        Some(&Command::Append('('))
    );
}

#[test]
fn comma_appends_a_dot() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Char(','))),
        Some(&Command::Append('.'))
    );
}

#[test]
fn enter_and_equals_sign_commit() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Enter)),
        Some(&Command::Equals)
    );
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Char('='))),
        Some(&Command::Equals)
    );
}

#[test]
fn editing_keys() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Backspace)),
        Some(&Command::Backspace)
    );
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Delete)),
        Some(&Command::Clear)
    );
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Esc)),
        Some(&Command::AllClear)
    );
}

#[test]
fn ctrl_q_and_ctrl_c_quit() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(&Key::ctrl(KeyCode::Char('q'))),
        Some(&Command::Quit)
    );
    assert_eq!(
        service.resolve(&Key::ctrl(KeyCode::Char('c'))),
        Some(&Command::Quit)
    );
    assert_eq!(service.resolve(&Key::simple(KeyCode::Char('q'))), None);
}

#[test]
fn rules_rebind_and_unbind() {
    let mut service = KeybindingService::new();
    let applied = service.apply_rules(&[
        KeybindingRule {
            key: "x".to_string(),
            command: "append:*".to_string(),
        },
        KeybindingRule {
            key: "esc".to_string(),
            command: String::new(),
        },
        KeybindingRule {
            key: "ctrl+".to_string(),
            command: "clear".to_string(),
        },
    ]);

    assert_eq!(applied, 2);
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Char('x'))),
        Some(&Command::Append('*'))
    );
    assert_eq!(service.resolve(&Key::simple(KeyCode::Esc)), None);
}

#[test]
fn bind_replaces_and_unbind_returns_previous() {
    let mut service = KeybindingService::new();
    service.bind(Key::simple(KeyCode::Enter), Command::AllClear);
    assert_eq!(
        service.unbind(&Key::simple(KeyCode::Enter)),
        Some(Command::AllClear)
    );
    assert_eq!(service.resolve(&Key::simple(KeyCode::Enter)), None);
}
