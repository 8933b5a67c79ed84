use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Append('7').name(), "append");
    assert_eq!(Command::AllClear.name(), "all-clear");
    assert_eq!(Command::Equals.name(), "equals");
    assert_eq!(Command::Custom("myCommand".to_string()).name(), "myCommand");
}

#[test]
fn from_name_parses_named_actions() {
    assert_eq!(Command::from_name("backspace"), Command::Backspace);
    assert_eq!(Command::from_name("clear"), Command::Clear);
    assert_eq!(Command::from_name("all-clear"), Command::AllClear);
    assert_eq!(Command::from_name("allClear"), Command::AllClear);
    assert_eq!(Command::from_name(" equals "), Command::Equals);
    assert_eq!(Command::from_name("quit"), Command::Quit);
}

#[test]
fn from_name_parses_append_tokens() {
    assert_eq!(Command::from_name("append:7"), Command::Append('7'));
    assert_eq!(Command::from_name("append:×"), Command::Append('×'));
    assert_eq!(
        Command::from_name("append:12"),
        Command::Custom("append:12".to_string())
    );
}
