use std::time::{Duration, Instant};

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use rstest::rstest;

use super::{App, InputMode, Screen};
use crate::interaction::{FabState, NavigationHost};
use crate::model::Priority;
use crate::tui::constants::{STATUS_FAB_UNAVAILABLE, STATUS_TTL};
use crate::tui::helpers::{
    bottom_right_rect, centered_rect, fab_glyph, priority_color, progress_bar, toast_drop,
    FG_DANGER, FG_MUTED, FG_SUCCESS, FG_WARNING,
};

fn test_app() -> App {
    App::new(Utc::now()).expect("app loads")
}

fn press_at(app: &mut App, code: KeyCode, now: Instant) {
    app.on_key_at(KeyEvent::new(code, KeyModifiers::NONE), now)
        .expect("key handled");
}

fn press(app: &mut App, code: KeyCode) {
    press_at(app, code, Instant::now());
}

fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
    app.on_key_at(KeyEvent::new(code, modifiers), now)
        .expect("key handled");
}

fn status_text(app: &App) -> Option<&str> {
    app.status.as_ref().map(|status| status.text.as_str())
}

fn render(
    app: &mut App,
    width: u16,
    height: u16,
    now: Instant,
    today: DateTime<Utc>,
) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.draw_at(f, now, today)).expect("draw");
    terminal.backend().buffer().clone()
}

fn render_to_string(app: &mut App, width: u16, height: u16, now: Instant) -> String {
    let buf = render(app, width, height, now, Utc::now());
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buf.get(x, y).symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn find_text(buf: &Buffer, text: &str) -> Option<(u16, u16)> {
    let area = buf.area;
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        let mut columns = Vec::new();
        for x in area.x..area.x + area.width {
            columns.push((x, line.len()));
            line.push_str(buf.get(x, y).symbol());
        }
        if let Some(offset) = line.find(text) {
            let x = columns
                .iter()
                .find(|(_, start)| *start == offset)
                .map(|(x, _)| *x)?;
            return Some((x, y));
        }
    }
    None
}

#[test]
fn starts_on_focused_with_first_task_selected() {
    let app = test_app();
    assert_eq!(app.current_screen(), Screen::Focused);
    assert_eq!(app.focused.selected(), Some(0));
    assert_eq!(app.focused.tasks.len(), 3);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[rstest]
#[case('1', Screen::Focused)]
#[case('2', Screen::Backlogs)]
#[case('3', Screen::Goals)]
#[case('4', Screen::Progress)]
fn number_keys_open_tabs(#[case] key: char, #[case] expected: Screen) {
    let mut app = test_app();
    press(&mut app, KeyCode::Char(key));
    assert_eq!(app.current_screen(), expected);
}

#[test]
fn tab_keys_cycle_and_wrap() {
    let mut app = test_app();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.current_screen(), Screen::Progress);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_screen(), Screen::Focused);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.current_screen(), Screen::Goals);
}

#[test]
fn long_press_shows_toast_without_navigating() {
    let mut app = test_app();
    let now = Instant::now();
    press_with(&mut app, KeyCode::Char('3'), KeyModifiers::ALT, now);

    assert_eq!(app.current_screen(), Screen::Focused);
    assert_eq!(app.tab_bar.toast().label(), Some("Goals"));
}

#[test]
fn second_long_press_replaces_toast() {
    let mut app = test_app();
    let start = Instant::now();
    press_with(&mut app, KeyCode::Char('3'), KeyModifiers::ALT, start);
    press_with(
        &mut app,
        KeyCode::Char('4'),
        KeyModifiers::ALT,
        start + Duration::from_millis(500),
    );

    assert_eq!(app.tab_bar.toast().label(), Some("Progress"));

    // The restarted timeline is still holding past the first one's end.
    app.on_tick(start + Duration::from_millis(2000));
    assert_eq!(app.tab_bar.toast().label(), Some("Progress"));
}

#[test]
fn long_press_current_tab_names_the_focused_route() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('L'));

    assert_eq!(app.current_screen(), Screen::Progress);
    assert_eq!(app.tab_bar.toast().label(), Some("Progress"));
}

#[test]
fn toast_hides_after_its_timeline() {
    let mut app = test_app();
    let start = Instant::now();
    press_at(&mut app, KeyCode::Char('L'), start);
    assert_eq!(app.tab_bar.toast().label(), Some("Focused"));

    app.on_tick(start + Duration::from_millis(1000));
    assert!(app.tab_bar.toast().is_visible());

    app.on_tick(start + Duration::from_millis(2000));
    assert!(!app.tab_bar.toast().is_visible());
}

#[test]
fn space_toggles_selected_task() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char(' '));

    assert!(app.focused.tasks[0].completed);
    assert_eq!(
        status_text(&app),
        Some("ℹ️  Completed \"Complete project proposal\"")
    );
}

#[test]
fn toggling_completed_task_reopens_it() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert!(!app.focused.tasks[1].completed);
    assert_eq!(
        status_text(&app),
        Some("ℹ️  Reopened \"Review code changes\"")
    );
}

#[test]
fn selection_stays_within_list() {
    let mut app = test_app();
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.focused.selected(), Some(2));

    for _ in 0..5 {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(app.focused.selected(), Some(0));
}

#[test]
fn toggle_is_ignored_outside_focused() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char(' '));

    assert!(!app.focused.tasks[0].completed);
    assert_eq!(app.progress.stats().completed, 3);
}

#[test]
fn fab_is_unavailable_off_backlogs() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('+'));

    assert_eq!(app.fab.state(), FabState::Closed);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(status_text(&app)
        .unwrap_or_default()
        .ends_with(STATUS_FAB_UNAVAILABLE));
}

#[test]
fn selecting_regular_task_posts_notice_and_closes() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.fab.state(), FabState::Open);
    assert_eq!(app.input_mode, InputMode::FabMenu);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.fab.state(), FabState::Closed);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(
        status_text(&app),
        Some("Regular Task: Create a new regular task in backlog")
    );
}

#[test]
fn enter_selects_highlighted_action() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.fab_cursor, 1);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.fab.state(), FabState::Closed);
    assert_eq!(
        status_text(&app),
        Some("Recurring Task: Create a new recurring task in backlog")
    );
}

#[test]
fn escape_dismisses_menu_without_notice() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.fab.state(), FabState::Closed);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(status_text(&app), None);
}

#[test]
fn leaving_backlogs_resets_fab_animation() {
    let mut app = test_app();
    let now = Instant::now();
    press_at(&mut app, KeyCode::Char('2'), now);
    press_at(&mut app, KeyCode::Char('+'), now);
    press_at(&mut app, KeyCode::Char('+'), now);
    assert!(app.fab.is_animating(now));

    press_at(&mut app, KeyCode::Char('1'), now);
    assert_eq!(app.current_screen(), Screen::Focused);
    assert!(!app.fab.is_animating(now));
    assert_eq!(app.fab_cursor, 0);
}

#[test]
fn ctrl_c_quits_from_menu() {
    let mut app = test_app();
    let now = Instant::now();
    press_at(&mut app, KeyCode::Char('2'), now);
    press_at(&mut app, KeyCode::Char('+'), now);
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL, now);

    assert!(app.should_quit());
    assert_eq!(app.fab.state(), FabState::Open);
}

#[test]
fn help_overlay_opens_and_closes() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.input_mode, InputMode::Help);

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(status_text(&app), None);
}

#[test]
fn q_quits() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn status_expires_on_tick() {
    let mut app = test_app();
    let now = Instant::now();
    press_at(&mut app, KeyCode::Char(' '), now);
    app.on_tick(now + Duration::from_secs(1));
    assert!(app.status.is_some());

    app.on_tick(now + STATUS_TTL + Duration::from_millis(1));
    assert!(app.status.is_none());
}

#[test]
fn renders_progress_overview() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    let screen = render_to_string(&mut app, 100, 40, Instant::now());

    assert!(screen.contains("Progress Overview"));
    assert!(screen.contains("60%"));
    assert!(screen.contains("Progress by Category"));
    assert!(screen.contains("Development"));
}

#[test]
fn progress_lists_every_category_on_a_small_terminal() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    let screen = render_to_string(&mut app, 80, 24, Instant::now());

    for category in ["Work", "Development", "Documentation", "Meetings"] {
        assert!(screen.contains(category), "{category} missing:\n{screen}");
    }
}

#[test]
fn progress_keys_scroll_categories() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.progress.category_state.selected(), Some(0));

    for _ in 0..6 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.progress.category_state.selected(), Some(3));

    press(&mut app, KeyCode::Up);
    assert_eq!(app.progress.category_state.selected(), Some(2));
    assert_eq!(app.focused.selected(), Some(0));
}

#[test]
fn progress_categories_scroll_into_view() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('4'));
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }

    // Only a couple of rows are left for categories at this height.
    let screen = render_to_string(&mut app, 80, 20, Instant::now());
    assert!(screen.contains("Meetings"));
}

#[test]
fn due_dates_turn_red_once_passed() {
    let mut app = test_app();
    let now = Instant::now();

    let fresh = render(&mut app, 100, 40, now, Utc::now());
    let (x, y) = find_text(&fresh, "Due:").expect("due date rendered");
    assert_eq!(fresh.get(x, y).fg, FG_MUTED);

    // The first task falls due a week after start-up.
    let later = render(&mut app, 100, 40, now, Utc::now() + ChronoDuration::days(8));
    let (x, y) = find_text(&later, "Due:").expect("due date rendered");
    assert_eq!(later.get(x, y).fg, FG_DANGER);
}

#[test]
fn renders_focused_tasks() {
    let mut app = test_app();
    let screen = render_to_string(&mut app, 100, 40, Instant::now());

    assert!(screen.contains("Focused Tasks"));
    assert!(screen.contains("Complete project proposal"));
    assert!(screen.contains("Update documentation"));
}

#[test]
fn renders_fab_glyph_for_state() {
    let mut app = test_app();
    let now = Instant::now();
    press_at(&mut app, KeyCode::Char('2'), now);
    let closed = render_to_string(&mut app, 100, 40, now);
    assert!(closed.contains(" + "));
    assert!(!closed.contains("Regular Task"));

    press_at(&mut app, KeyCode::Char('+'), now);
    let open = render_to_string(&mut app, 100, 40, now + Duration::from_secs(1));
    assert!(open.contains("✕"));
    assert!(open.contains("Regular Task"));
    assert!(open.contains("Recurring Task"));
}

#[test]
fn renders_toast_while_holding() {
    let mut app = test_app();
    let now = Instant::now();
    press_with(&mut app, KeyCode::Char('3'), KeyModifiers::ALT, now);

    let hidden = render_to_string(&mut app, 100, 40, now);
    assert!(!hidden.contains("Goals"));

    let shown = render_to_string(&mut app, 100, 40, now + Duration::from_millis(800));
    assert!(shown.contains("Goals"));
}

#[test]
fn navigator_tracks_focused_route() {
    let mut app = test_app();
    press(&mut app, KeyCode::Char('3'));
    let route = app
        .navigator
        .state()
        .focused_route()
        .map(|route| route.key.clone());
    assert_eq!(route.as_deref(), Some("goals-tab"));
}

#[test]
fn centered_rect_keeps_within_bounds() {
    let area = Rect::new(0, 0, 80, 24);
    let rect = centered_rect(40, 10, area);
    assert_eq!(rect, Rect::new(20, 7, 40, 10));

    let clamped = centered_rect(200, 100, area);
    assert_eq!(clamped, area);
}

#[test]
fn bottom_right_rect_respects_margin() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(bottom_right_rect(7, 3, 1, area), Rect::new(72, 20, 7, 3));
}

#[rstest]
#[case(0.0, "+")]
#[case(20.0, "+")]
#[case(22.5, "✕")]
#[case(45.0, "✕")]
fn fab_glyph_flips_past_half_turn(#[case] rotation: f32, #[case] expected: &str) {
    assert_eq!(fab_glyph(rotation), expected);
}

#[rstest]
#[case(-50.0, 2)]
#[case(-25.0, 1)]
#[case(0.0, 0)]
fn toast_drop_scales_offset(#[case] offset: f32, #[case] expected: u16) {
    assert_eq!(toast_drop(offset, 2), expected);
}

#[rstest]
#[case(0, "░░░░░░░░░░")]
#[case(60, "██████░░░░")]
#[case(100, "██████████")]
fn progress_bar_fills_proportionally(#[case] percentage: u8, #[case] expected: &str) {
    assert_eq!(progress_bar(percentage, 10), expected);
}

#[test]
fn progress_bar_handles_zero_width() {
    assert_eq!(progress_bar(50, 0), "");
}

#[test]
fn priority_colors() {
    assert_eq!(priority_color(Priority::High), FG_DANGER);
    assert_eq!(priority_color(Priority::Medium), FG_WARNING);
    assert_eq!(priority_color(Priority::Low), FG_SUCCESS);
}
