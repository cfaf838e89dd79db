//! Results list widget rendering.
//!
//! Displays the result set as a scrollable list of article cards, the
//! "no results" message, or the loading indicator.

use crate::app::App;
use crate::news::Article;
use crate::ui::theme::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Lines each card occupies: meta, title, description, image, separator.
pub const LINES_PER_CARD: u16 = 5;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// What the results area shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsContent<'a> {
    /// A search returned nothing
    NoResults,
    /// One card per article, in order (possibly none before any query)
    Cards(&'a [Article]),
}

/// Decide the results area content.
///
/// # Details
/// An empty result set after a non-empty query is "no results"; any other
/// state, including the initial one, is a (possibly empty) card list.
pub fn results_content<'a>(articles: &'a [Article], last_query: &str) -> ResultsContent<'a> {
    if articles.is_empty() && !last_query.is_empty() {
        ResultsContent::NoResults
    } else {
        ResultsContent::Cards(articles)
    }
}

/// Number of cards that fit in `area`.
pub fn visible_cards(area: Rect) -> usize {
    (area.height.saturating_sub(2) / LINES_PER_CARD).max(1) as usize
}

/// First visible card so the selection stays centered.
pub fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    let center = visible / 2;
    let offset = selected.saturating_sub(center);
    offset.min(len.saturating_sub(visible))
}

/// Map a mouse position to the index of the card under it.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area the results list was drawn in
/// * `column`, `row` - Mouse position
pub fn card_at(app: &App, area: Rect, column: u16, row: u16) -> Option<usize> {
    if app.loading
        || column < area.x
        || column >= area.x + area.width
        || row <= area.y
        || row >= area.y + area.height.saturating_sub(1)
    {
        return None;
    }
    let len = app.articles.len();
    let offset = scroll_offset(app.selected_index, len, visible_cards(area));
    let index = offset + ((row - area.y - 1) / LINES_PER_CARD) as usize;
    (index < len).then_some(index)
}

/// Render the results widget.
///
/// # Arguments
/// * `app` - Application state
/// * `palette` - Colors of the active theme
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
pub fn render_results(app: &App, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .style(palette.base());

    if app.loading {
        let frame = SPINNER[app.tick % SPINNER.len()];
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!("{} Loading...", frame),
            Style::default().fg(palette.accent),
        )))
        .alignment(Alignment::Center)
        .block(block.title("Results"));
        Widget::render(paragraph, area, buf);
        return;
    }

    let query = if app.showing_latest { "" } else { app.last_query.as_str() };
    let articles = match results_content(&app.articles, query) {
        ResultsContent::NoResults => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No results found",
                Style::default().fg(palette.dim),
            )))
            .alignment(Alignment::Center)
            .block(block.title(format!("Results for \"{}\"", app.last_query)));
            Widget::render(paragraph, area, buf);
            return;
        }
        ResultsContent::Cards(articles) => articles,
    };

    let title = if app.showing_latest {
        format!("Latest ({})", articles.len())
    } else if app.last_query.is_empty() {
        format!("Articles ({})", articles.len())
    } else {
        format!("Results for \"{}\" ({})", app.last_query, articles.len())
    };

    let selected_index = app.selected_index.min(articles.len().saturating_sub(1));
    let visible = visible_cards(area);
    let offset = scroll_offset(selected_index, articles.len(), visible);
    let separator = "─".repeat(area.width.saturating_sub(2).max(10) as usize);

    let items: Vec<ListItem> = articles
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, article)| card(article, idx == selected_index, &separator, palette))
        .collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(selected_index - offset));
    }

    let list = List::new(items)
        .block(block.title(title))
        .highlight_style(Style::default().bg(palette.selection_bg));

    StatefulWidget::render(list, area, buf, &mut list_state);
}

fn card<'a>(article: &'a Article, selected: bool, separator: &str, palette: &Palette) -> ListItem<'a> {
    let mut meta = vec![
        Span::styled(
            article.source.as_str(),
            Style::default().fg(palette.source).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ·  ", Style::default().fg(palette.dim)),
        Span::styled(article.format_date(), Style::default().fg(palette.date)),
    ];
    if let Some(score) = article.score {
        meta.push(Span::styled(
            format!("  ·  score {:.2}", score),
            Style::default().fg(palette.dim),
        ));
    }

    let mut title_style = Style::default()
        .fg(palette.link)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    if selected {
        title_style = title_style.add_modifier(Modifier::REVERSED);
    }
    let title = Line::from(Span::styled(article.title.as_str(), title_style));

    let description = Line::from(Span::styled(
        article.description.as_str(),
        Style::default().fg(palette.text),
    ));

    let image = match article.image_url() {
        Some(url) => Line::from(Span::styled(
            format!("[image] {}", url),
            Style::default().fg(palette.dim).add_modifier(Modifier::ITALIC),
        )),
        None => Line::default(),
    };

    let separator = Line::from(Span::styled(
        separator.to_string(),
        Style::default().fg(if selected { palette.accent } else { palette.border }),
    ));

    ListItem::new(vec![Line::from(meta), title, description, image, separator])
}
