//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod filters;
pub mod header;
pub mod results;
pub mod search;
pub mod theme;

pub use filters::{dropdown_area, render_filters};
pub use header::render_header;
pub use results::render_results;
pub use search::render_search;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const KEY_HINTS: &str = "'/' search, 'f' filters, 'l' latest, 't' theme, Enter open, 'q' quit";

/// Areas of the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title and theme toggle
    pub header: Rect,
    /// Query input
    pub search: Rect,
    /// Result cards
    pub results: Rect,
    /// Status bar
    pub status: Rect,
    /// Filter dropdown, overlays the results when open
    pub dropdown: Rect,
}

/// Split the frame into the screen areas.
pub fn screen_layout(area: Rect, source_count: usize) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Results
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        search: chunks[1],
        results: chunks[2],
        status: chunks[3],
        dropdown: dropdown_area(chunks[1], area, source_count),
    }
}

/// Render the complete UI.
///
/// # Details
/// The theme is resolved once from the application state and passed to
/// every widget. The dropdown is drawn last so it overlays the results.
pub fn render(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let theme = app.theme();
    let palette = theme.palette();

    f.render_widget(Block::default().style(palette.base()), f.area());

    render_header(theme, &palette, layout.header, f.buffer_mut());
    render_search(app, &palette, layout.search, f.buffer_mut());
    render_results(app, &palette, layout.results, f.buffer_mut());

    let status_text = match app.status_message.as_deref() {
        Some(message) => format!("{}  │  {}", message, KEY_HINTS),
        None => KEY_HINTS.to_string(),
    };
    let status = Paragraph::new(Line::from(status_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style(false))
            .style(palette.base().fg(palette.dim)),
    );
    f.render_widget(status, layout.status);

    if app.panel.is_dropdown_open() {
        render_filters(app, &palette, layout.dropdown, f.buffer_mut());
    }
}
