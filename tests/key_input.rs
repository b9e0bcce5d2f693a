use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use guess_number::config::UiConfig;
use guess_number::game::{Session, Status};
use guess_number::ui::app::App;
use guess_number::ui::input::handle_key;

fn app_with_secret(secret: i64) -> App {
    App::with_session(UiConfig::default(), Session::with_secret(secret).expect("valid"))
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn digits_then_enter_submits() {
    let mut app = app_with_secret(6);
    press(&mut app, KeyCode::Char('6'));
    assert_eq!(app.screen().form().input(), "6");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().session().status(), Status::Won);
}

#[test]
fn backspace_edits_input() {
    let mut app = app_with_secret(6);
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('0'));
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.screen().form().input(), "1");
}

#[test]
fn letters_never_reach_the_field() {
    let mut app = app_with_secret(6);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.screen().form().input(), "");
}

#[test]
fn escape_and_ctrl_c_quit() {
    let mut app = app_with_secret(6);
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());

    let mut app = app_with_secret(6);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = app_with_secret(6);
    let mut key = KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(app.screen().form().input(), "");
}

#[test]
fn r_plays_again_after_game_over() {
    let mut app = app_with_secret(6);
    press(&mut app, KeyCode::Char('6'));
    press(&mut app, KeyCode::Enter);
    assert!(app.screen().restart_offered());

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.round(), 1);
    assert_eq!(app.game().session().status(), Status::Playing);
}

#[test]
fn enter_plays_again_after_game_over() {
    let mut app = app_with_secret(6);
    press(&mut app, KeyCode::Char('6'));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.round(), 1);
    assert!(!app.screen().restart_offered());
}
