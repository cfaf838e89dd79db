//! Application state management.
//!
//! Owns the result set, loading flag, last query and theme, issues search
//! and latest requests, and applies their completions.

use crate::news::{Article, Endpoint, NewsError, SearchFilters};
use crate::panel::QueryPanel;
use crate::ui::theme::Theme;
use tracing::{debug, error, info};

/// Where keyboard input goes when the filter dropdown is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Navigate the result cards
    Results,
    /// Type into the query field
    Query,
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// A request the controller has issued and wants sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Ticket the completion must carry
    pub ticket: RequestTicket,
    /// Endpoint and parameters
    pub endpoint: Endpoint,
}

/// Outcome of a sent request.
#[derive(Debug)]
pub struct Completion {
    /// Ticket of the request this answers
    pub ticket: RequestTicket,
    /// Articles or the failure
    pub result: Result<Vec<Article>, NewsError>,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Current result set, in service order
    pub articles: Vec<Article>,
    /// A request is outstanding
    pub loading: bool,
    /// Query of the last completed search
    pub last_query: String,
    /// Current result set came from `/latest`
    pub showing_latest: bool,
    /// Dark theme enabled
    pub dark_mode: bool,
    /// Search bar and filter dropdown
    pub panel: QueryPanel,
    /// Current input focus
    pub mode: UiMode,
    /// Selected card index
    pub selected_index: usize,
    /// Status message to display
    pub status_message: Option<String>,
    /// Loop iterations since start, drives the loading spinner
    pub tick: usize,
    /// Last issued ticket number
    next_ticket: u64,
    /// Most recently issued request; older completions are discarded
    in_flight: Option<PendingRequest>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `sources` - Source whitelist for the filter dropdown
    /// * `dark_mode` - Start with the dark theme
    pub fn new(sources: Vec<String>, dark_mode: bool) -> Self {
        Self {
            articles: Vec::new(),
            loading: false,
            last_query: String::new(),
            showing_latest: false,
            dark_mode,
            panel: QueryPanel::new(sources),
            mode: UiMode::Query,
            selected_index: 0,
            status_message: None,
            tick: 0,
            next_ticket: 0,
            in_flight: None,
        }
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Flip between light and dark theme.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "theme toggled");
    }

    /// Issue a search.
    ///
    /// # Arguments
    /// * `query` - Query text, already trimmed by the caller
    /// * `filters` - Filters at submission time
    ///
    /// # Returns
    /// * `PendingRequest` - Request to hand to the dispatcher
    ///
    /// # Details
    /// Sets `loading`. `last_query` changes only when this search completes
    /// successfully, together with the articles.
    pub fn search(&mut self, query: String, filters: SearchFilters) -> PendingRequest {
        self.issue(Endpoint::Search { query, filters })
    }

    /// Issue a fetch of the latest articles.
    ///
    /// # Details
    /// Sets `loading`. Never changes `last_query`.
    pub fn fetch_latest(&mut self) -> PendingRequest {
        self.issue(Endpoint::Latest)
    }

    fn issue(&mut self, endpoint: Endpoint) -> PendingRequest {
        self.next_ticket += 1;
        let request = PendingRequest {
            ticket: RequestTicket(self.next_ticket),
            endpoint,
        };
        if let Some(previous) = &self.in_flight {
            debug!(superseded = previous.ticket.0, "request superseded");
        }
        debug!(ticket = self.next_ticket, path = request.endpoint.path(), "request issued");
        self.loading = true;
        self.in_flight = Some(request.clone());
        request
    }

    /// Apply a completed request.
    ///
    /// # Returns
    /// * `bool` - False if the completion was stale and discarded
    ///
    /// # Details
    /// Only the most recently issued request is applied. Success replaces
    /// the result set (and `last_query` for searches); failure is logged and
    /// leaves the result set unchanged. Either way `loading` is cleared.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let request = match self.in_flight.take() {
            Some(request) if request.ticket == completion.ticket => request,
            other => {
                debug!(ticket = completion.ticket.0, "discarding stale response");
                self.in_flight = other;
                return false;
            }
        };

        match completion.result {
            Ok(articles) => {
                info!(
                    ticket = completion.ticket.0,
                    count = articles.len(),
                    path = request.endpoint.path(),
                    "request completed"
                );
                match request.endpoint {
                    Endpoint::Search { query, .. } => {
                        self.last_query = query;
                        self.showing_latest = false;
                    }
                    Endpoint::Latest => self.showing_latest = true,
                }
                self.status_message = Some(format!("Loaded {} articles", articles.len()));
                self.articles = articles;
                self.selected_index = 0;
            }
            Err(e) => {
                error!(
                    ticket = completion.ticket.0,
                    path = request.endpoint.path(),
                    error = %e,
                    "Error fetching data"
                );
            }
        }
        self.loading = false;
        true
    }

    /// Get the currently selected article.
    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected_index)
    }

    /// Move selection up, wrapping to the bottom.
    pub fn move_up(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.articles.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down, wrapping to the top.
    pub fn move_down(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.articles.len();
    }

    /// Set status message.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
