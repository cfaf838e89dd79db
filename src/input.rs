//! Keyboard and mouse routing.
//!
//! Turns terminal events into state changes on [`App`]. Requests are
//! handed back to the event loop rather than sent from here.

use crate::app::{App, PendingRequest, UiMode};
use crate::browser::open_in_browser;
use crate::panel::FilterField;
use crate::ui::{self, ScreenLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::warn;

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running
    Continue,
    /// Leave the event loop
    Quit,
    /// Send this request
    Dispatch(PendingRequest),
}

/// Handle a key press.
///
/// # Details
/// Ctrl+C always quits. While the filter dropdown is open every key goes
/// to the dropdown; otherwise keys are routed by [`UiMode`].
pub fn handle_key_event(key: KeyEvent, app: &mut App) -> KeyOutcome {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    if app.panel.is_dropdown_open() {
        handle_filter_key(key, app);
        return KeyOutcome::Continue;
    }

    match app.mode {
        UiMode::Query => match key.code {
            KeyCode::Enter => {
                if let Some((query, filters)) = app.panel.submit() {
                    app.mode = UiMode::Results;
                    return KeyOutcome::Dispatch(app.search(query, filters));
                }
            }
            KeyCode::Esc => app.mode = UiMode::Results,
            KeyCode::Backspace => app.panel.pop_char(),
            KeyCode::Tab => app.panel.toggle_dropdown(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.panel.push_char(c)
            }
            _ => {}
        },
        UiMode::Results => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter | KeyCode::Char('o') => open_selected(app),
            KeyCode::Char('/') | KeyCode::Char('i') => app.mode = UiMode::Query,
            KeyCode::Char('f') => app.panel.toggle_dropdown(),
            KeyCode::Char('l') => return KeyOutcome::Dispatch(app.fetch_latest()),
            KeyCode::Char('t') => app.toggle_dark_mode(),
            _ => {}
        },
    }
    KeyOutcome::Continue
}

fn handle_filter_key(key: KeyEvent, app: &mut App) {
    let panel = &mut app.panel;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('x') {
            panel.clear();
        }
        return;
    }

    match key.code {
        KeyCode::Enter => panel.apply(),
        KeyCode::Esc => panel.toggle_dropdown(),
        KeyCode::Tab => panel.focus_next(),
        KeyCode::BackTab => panel.focus_prev(),
        code => match panel.focus {
            FilterField::Date => match code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => panel.cycle_date(true),
                KeyCode::Left | KeyCode::Char('h') => panel.cycle_date(false),
                KeyCode::Char('f') => panel.toggle_dropdown(),
                _ => {}
            },
            FilterField::Authors => match code {
                KeyCode::Backspace => panel.pop_author_char(),
                KeyCode::Char(c) => panel.push_author_char(c),
                _ => {}
            },
            FilterField::Sources => match code {
                KeyCode::Up | KeyCode::Char('k') => panel.move_source_cursor(false),
                KeyCode::Down | KeyCode::Char('j') => panel.move_source_cursor(true),
                KeyCode::Char(' ') => panel.toggle_source_at_cursor(),
                KeyCode::Char('f') => panel.toggle_dropdown(),
                _ => {}
            },
        },
    }
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// A click outside the open dropdown only closes it. Otherwise clicks on
/// the header toggle the theme, on the search bar focus the query, and on
/// a card select and open it.
pub fn handle_mouse_event(mouse: MouseEvent, app: &mut App, layout: &ScreenLayout) {
    match mouse.kind {
        MouseEventKind::ScrollUp if !app.panel.is_dropdown_open() => app.move_up(),
        MouseEventKind::ScrollDown if !app.panel.is_dropdown_open() => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            let (column, row) = (mouse.column, mouse.row);
            if app.panel.on_pointer_down(column, row) || app.panel.is_dropdown_open() {
                return;
            }
            if contains(layout.header, column, row) {
                app.toggle_dark_mode();
            } else if contains(layout.search, column, row) {
                app.mode = UiMode::Query;
            } else if let Some(index) = ui::results::card_at(app, layout.results, column, row) {
                app.selected_index = index;
                app.mode = UiMode::Results;
                open_selected(app);
            }
        }
        _ => {}
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Open the selected article in the system browser.
fn open_selected(app: &mut App) {
    let Some(article) = app.selected_article() else {
        return;
    };
    let url = article.url.clone();
    let title = article.title.clone();
    match open_in_browser(&url) {
        Ok(()) => app.set_status(format!("Opened: {}", title)),
        Err(e) => {
            warn!(%url, error = %e, "failed to open article");
            app.set_status(format!("Failed to open article: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Completion;
    use crate::news::{Article, Endpoint};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(handle_key_event(press(KeyCode::Char(c)), app), KeyOutcome::Continue);
        }
    }

    fn article(url: &str) -> Article {
        Article {
            url: url.to_string(),
            title: url.to_string(),
            description: String::new(),
            source: "example.com".to_string(),
            date_published: String::new(),
            image: None,
            score: None,
        }
    }

    fn screen() -> ScreenLayout {
        ui::screen_layout(Rect::new(0, 0, 100, 40), 6)
    }

    #[test]
    fn test_enter_with_query_dispatches_one_search() {
        let mut app = App::new(Vec::new(), false);
        type_text(&mut app, "  climate ");

        let outcome = handle_key_event(press(KeyCode::Enter), &mut app);
        match outcome {
            KeyOutcome::Dispatch(request) => match request.endpoint {
                Endpoint::Search { query, .. } => assert_eq!(query, "climate"),
                Endpoint::Latest => panic!("expected a search"),
            },
            other => panic!("expected a dispatch, got {:?}", other),
        }
        assert!(app.loading);
        assert_eq!(app.mode, UiMode::Results);

        // Enter in results mode opens a card rather than searching again
        let outcome = handle_key_event(press(KeyCode::Enter), &mut app);
        assert_eq!(outcome, KeyOutcome::Continue);
    }

    #[test]
    fn test_enter_with_blank_query_dispatches_nothing() {
        let mut app = App::new(Vec::new(), false);
        type_text(&mut app, "   ");

        assert_eq!(handle_key_event(press(KeyCode::Enter), &mut app), KeyOutcome::Continue);
        assert!(!app.loading);
        assert_eq!(app.mode, UiMode::Query);

        assert_eq!(handle_key_event(press(KeyCode::Enter), &mut app), KeyOutcome::Continue);
        assert!(!app.loading);
    }

    #[test]
    fn test_quit_and_latest_keys() {
        let mut app = App::new(Vec::new(), false);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut app), KeyOutcome::Quit);

        app.mode = UiMode::Results;
        match handle_key_event(press(KeyCode::Char('l')), &mut app) {
            KeyOutcome::Dispatch(request) => assert_eq!(request.endpoint, Endpoint::Latest),
            other => panic!("expected a dispatch, got {:?}", other),
        }
        assert!(app.loading);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut app), KeyOutcome::Quit);
    }

    #[test]
    fn test_keys_go_to_dropdown_while_open() {
        let mut app = App::new(vec!["bbc.com".to_string()], false);
        handle_key_event(press(KeyCode::Tab), &mut app);
        assert!(app.panel.is_dropdown_open());

        // 'q' would quit in results mode; here it is author text
        handle_key_event(press(KeyCode::Tab), &mut app);
        assert_eq!(app.panel.focus, FilterField::Authors);
        type_text(&mut app, "q");
        assert_eq!(app.panel.authors_input, "q");

        handle_key_event(press(KeyCode::Enter), &mut app);
        assert!(!app.panel.is_dropdown_open());
        assert_eq!(app.panel.filters.authors.as_deref(), Some("q"));
        assert!(!app.loading);
    }

    #[test]
    fn test_click_outside_open_dropdown_only_closes_it() {
        let layout = screen();
        let mut app = App::new(Vec::new(), false);
        let request = app.fetch_latest();
        app.complete(Completion {
            ticket: request.ticket,
            result: Ok(vec![article("https://a.test"), article("https://b.test")]),
        });
        app.mode = UiMode::Results;
        app.move_down();
        let status = app.status_message.clone();

        app.panel.toggle_dropdown();
        app.panel.track_dropdown_region(layout.dropdown);
        handle_mouse_event(left_click(5, 0), &mut app, &layout);
        assert!(!app.panel.is_dropdown_open());
        assert!(!app.dark_mode);

        app.panel.toggle_dropdown();
        app.panel.track_dropdown_region(layout.dropdown);
        assert_eq!(card_under(&app, &layout, 5, 6), Some(0));
        handle_mouse_event(left_click(5, 6), &mut app, &layout);
        assert!(!app.panel.is_dropdown_open());
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.status_message, status);
        assert_eq!(app.mode, UiMode::Results);
    }

    #[test]
    fn test_click_inside_open_dropdown_keeps_it_open() {
        let layout = screen();
        let mut app = App::new(Vec::new(), false);
        app.panel.toggle_dropdown();
        app.panel.track_dropdown_region(layout.dropdown);

        let (column, row) = (layout.dropdown.x + 1, layout.dropdown.y + 1);
        handle_mouse_event(left_click(column, row), &mut app, &layout);
        assert!(app.panel.is_dropdown_open());
    }

    #[test]
    fn test_click_header_toggles_theme_when_closed() {
        let layout = screen();
        let mut app = App::new(Vec::new(), false);
        handle_mouse_event(left_click(5, 0), &mut app, &layout);
        assert!(app.dark_mode);

        app.mode = UiMode::Results;
        handle_mouse_event(left_click(5, layout.search.y + 1), &mut app, &layout);
        assert_eq!(app.mode, UiMode::Query);
    }

    fn card_under(app: &App, layout: &ScreenLayout, column: u16, row: u16) -> Option<usize> {
        ui::results::card_at(app, layout.results, column, row)
    }
}
