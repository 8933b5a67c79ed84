use super::*;

fn display_of(expression: &str) -> Display {
    render_display(&CalcState::with_expression(expression))
}

#[test]
fn empty_expression_renders_zero_and_zero_preview() {
    let display = display_of("");
    assert_eq!(display.expression, "0");
    assert_eq!(display.preview, "= 0");
}

#[test]
fn live_preview_tracks_expression() {
    let display = display_of("12+3");
    assert_eq!(display.expression, "12+3");
    assert_eq!(display.preview, "= 15");
}

#[test]
fn preview_shows_err_and_infinity_sentinels() {
    assert_eq!(display_of("12+").preview, "= Err");
    assert_eq!(display_of("7/0").preview, "= ∞");
}

#[test]
fn failed_commit_flashes_err() {
    let mut state = CalcState::with_expression("5/");
    state.commit();
    let display = render_display(&state);
    assert_eq!(display.expression, "Err");
    assert_eq!(display.preview, "= 0");
}
