//! Query input panel state.
//!
//! Holds the query text, the filter selections and the filter dropdown.
//! Emits a `(query, filters)` pair when the user asks for a search.

use crate::news::{DateRange, SearchFilters};
use ratatui::layout::Rect;

/// Field focused inside the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Publication date window
    Date,
    /// Author name text
    Authors,
    /// Source checklist
    Sources,
}

impl FilterField {
    fn next(self) -> Self {
        match self {
            FilterField::Date => FilterField::Authors,
            FilterField::Authors => FilterField::Sources,
            FilterField::Sources => FilterField::Date,
        }
    }

    fn prev(self) -> Self {
        match self {
            FilterField::Date => FilterField::Sources,
            FilterField::Authors => FilterField::Date,
            FilterField::Sources => FilterField::Authors,
        }
    }
}

/// Mouse-down listener that closes the dropdown on clicks outside it.
///
/// Only exists while the dropdown is open: opening creates it and every
/// close path drops it, so no listener outlives the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideClick {
    /// Rendered dropdown region, updated on each draw
    region: Rect,
}

impl OutsideClick {
    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.region.x
            && column < self.region.x.saturating_add(self.region.width)
            && row >= self.region.y
            && row < self.region.y.saturating_add(self.region.height)
    }
}

/// Transient input state of the search bar and its filter dropdown.
#[derive(Debug, Clone)]
pub struct QueryPanel {
    /// Query text as typed
    pub query: String,
    /// Current filter selections
    pub filters: SearchFilters,
    /// Author text as typed (mirrored into `filters.authors` trimmed)
    pub authors_input: String,
    /// Focused dropdown field
    pub focus: FilterField,
    /// Highlighted row in the source checklist
    pub source_cursor: usize,
    /// Sources that may be selected
    sources: Vec<String>,
    /// Outside-click listener, present exactly while the dropdown is open
    outside_click: Option<OutsideClick>,
}

impl QueryPanel {
    /// Create an empty panel offering `sources` in the source filter.
    pub fn new(sources: Vec<String>) -> Self {
        Self {
            query: String::new(),
            filters: SearchFilters::default(),
            authors_input: String::new(),
            focus: FilterField::Date,
            source_cursor: 0,
            sources,
            outside_click: None,
        }
    }

    /// Sources offered in the source filter.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Append a character to the query text.
    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    /// Remove the last character of the query text.
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Request a search.
    ///
    /// # Returns
    /// * `Option<(String, SearchFilters)>` - Trimmed query and a copy of the
    ///   filters, or None when the trimmed query is empty
    pub fn submit(&self) -> Option<(String, SearchFilters)> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        Some((query.to_string(), self.filters.clone()))
    }

    /// Whether the filter dropdown is open.
    pub fn is_dropdown_open(&self) -> bool {
        self.outside_click.is_some()
    }

    /// Open the dropdown if closed, close it if open.
    pub fn toggle_dropdown(&mut self) {
        if self.is_dropdown_open() {
            self.close_dropdown();
        } else {
            self.outside_click = Some(OutsideClick {
                region: Rect::default(),
            });
        }
    }

    /// Apply the filters and close the dropdown.
    pub fn apply(&mut self) {
        self.close_dropdown();
    }

    fn close_dropdown(&mut self) {
        self.outside_click = None;
    }

    /// Record where the dropdown was drawn.
    ///
    /// # Details
    /// No-op while the dropdown is closed.
    pub fn track_dropdown_region(&mut self, region: Rect) {
        if let Some(listener) = self.outside_click.as_mut() {
            listener.region = region;
        }
    }

    /// Handle a mouse-down anywhere on screen.
    ///
    /// # Returns
    /// * `bool` - True if the event closed the dropdown
    pub fn on_pointer_down(&mut self, column: u16, row: u16) -> bool {
        match &self.outside_click {
            Some(listener) if !listener.contains(column, row) => {
                self.close_dropdown();
                true
            }
            _ => false,
        }
    }

    /// Reset date, authors and sources.
    ///
    /// # Details
    /// Leaves the query text and dropdown state untouched.
    pub fn clear(&mut self) {
        self.filters.clear();
        self.authors_input.clear();
    }

    /// Flip selection of a whitelisted source; unknown names are ignored.
    pub fn toggle_source(&mut self, source: &str) {
        if self.sources.iter().any(|s| s == source) {
            self.filters.toggle_source(source);
        }
    }

    /// Flip selection of the source under the cursor.
    pub fn toggle_source_at_cursor(&mut self) {
        if let Some(source) = self.sources.get(self.source_cursor).cloned() {
            self.toggle_source(&source);
        }
    }

    /// Move the source cursor by one row, wrapping at both ends.
    pub fn move_source_cursor(&mut self, down: bool) {
        let len = self.sources.len();
        if len == 0 {
            return;
        }
        self.source_cursor = if down {
            (self.source_cursor + 1) % len
        } else if self.source_cursor == 0 {
            len - 1
        } else {
            self.source_cursor - 1
        };
    }

    /// Focus the next dropdown field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus the previous dropdown field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the date filter forward or backward.
    pub fn cycle_date(&mut self, forward: bool) {
        self.filters.date = if forward {
            DateRange::cycle(self.filters.date)
        } else {
            DateRange::cycle_back(self.filters.date)
        };
    }

    /// Append a character to the author filter.
    pub fn push_author_char(&mut self, ch: char) {
        self.authors_input.push(ch);
        self.filters.set_authors(&self.authors_input);
    }

    /// Remove the last character of the author filter.
    pub fn pop_author_char(&mut self) {
        self.authors_input.pop();
        self.filters.set_authors(&self.authors_input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> QueryPanel {
        QueryPanel::new(vec![
            "bbc.com".to_string(),
            "cnn.com".to_string(),
            "reuters.com".to_string(),
        ])
    }

    fn type_query(panel: &mut QueryPanel, text: &str) {
        for ch in text.chars() {
            panel.push_char(ch);
        }
    }

    #[test]
    fn test_submit_trims_query() {
        let mut panel = panel();
        type_query(&mut panel, "  rust  ");
        let (query, filters) = panel.submit().unwrap();
        assert_eq!(query, "rust");
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn test_submit_blank_query_emits_nothing() {
        let mut panel = panel();
        assert!(panel.submit().is_none());
        type_query(&mut panel, "   ");
        panel.toggle_source("cnn.com");
        assert!(panel.submit().is_none());
    }

    #[test]
    fn test_submit_carries_filters() {
        let mut panel = panel();
        type_query(&mut panel, "markets");
        panel.cycle_date(true);
        for ch in " Ann ".chars() {
            panel.push_author_char(ch);
        }
        panel.toggle_source("reuters.com");

        let (_, filters) = panel.submit().unwrap();
        assert_eq!(filters.date, Some(DateRange::Today));
        assert_eq!(filters.authors.as_deref(), Some("Ann"));
        assert!(filters.sources.contains("reuters.com"));
    }

    #[test]
    fn test_dropdown_toggle_and_apply() {
        let mut panel = panel();
        assert!(!panel.is_dropdown_open());
        panel.toggle_dropdown();
        assert!(panel.is_dropdown_open());
        panel.toggle_dropdown();
        assert!(!panel.is_dropdown_open());

        panel.toggle_dropdown();
        panel.apply();
        assert!(!panel.is_dropdown_open());
    }

    #[test]
    fn test_pointer_down_outside_closes_dropdown() {
        let mut panel = panel();
        panel.toggle_dropdown();
        panel.track_dropdown_region(Rect::new(10, 5, 20, 8));

        assert!(!panel.on_pointer_down(15, 6));
        assert!(panel.is_dropdown_open());
        assert!(!panel.on_pointer_down(29, 12));
        assert!(panel.is_dropdown_open());

        assert!(panel.on_pointer_down(30, 6));
        assert!(!panel.is_dropdown_open());
    }

    #[test]
    fn test_pointer_down_ignored_while_closed() {
        let mut panel = panel();
        panel.track_dropdown_region(Rect::new(0, 0, 5, 5));
        assert!(!panel.on_pointer_down(50, 50));
        assert!(!panel.is_dropdown_open());

        panel.toggle_dropdown();
        panel.toggle_dropdown();
        assert!(!panel.on_pointer_down(50, 50));
    }

    #[test]
    fn test_clear_keeps_query_and_dropdown() {
        let mut panel = panel();
        type_query(&mut panel, "space");
        panel.toggle_dropdown();
        panel.cycle_date(false);
        panel.push_author_char('x');
        panel.toggle_source("bbc.com");

        panel.clear();
        assert_eq!(panel.filters, SearchFilters::default());
        assert!(panel.authors_input.is_empty());
        assert_eq!(panel.query, "space");
        assert!(panel.is_dropdown_open());

        panel.toggle_dropdown();
        panel.clear();
        assert!(!panel.is_dropdown_open());
    }

    #[test]
    fn test_toggle_source_is_membership_flip() {
        let mut panel = panel();
        panel.toggle_source("cnn.com");
        panel.toggle_source("cnn.com");
        assert!(panel.filters.sources.is_empty());

        panel.toggle_source("unknown.org");
        assert!(panel.filters.sources.is_empty());
    }

    #[test]
    fn test_source_cursor_wraps() {
        let mut panel = panel();
        panel.move_source_cursor(false);
        assert_eq!(panel.source_cursor, 2);
        panel.toggle_source_at_cursor();
        assert!(panel.filters.sources.contains("reuters.com"));
        panel.move_source_cursor(true);
        assert_eq!(panel.source_cursor, 0);
    }

    #[test]
    fn test_focus_cycles() {
        let mut panel = panel();
        panel.focus_next();
        assert_eq!(panel.focus, FilterField::Authors);
        panel.focus_prev();
        panel.focus_prev();
        assert_eq!(panel.focus, FilterField::Sources);
    }
}
