//! Search filters and request encoding.
//!
//! Maps a query plus filter selections onto the endpoint path and query
//! parameters understood by the search service.

use std::collections::BTreeSet;

/// Publication date window accepted by the `date` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// Published today
    Today,
    /// Published in the last 24 hours
    Last24Hours,
    /// Published in the last week
    Week,
    /// Published in the last month
    Month,
    /// Published in the last three months
    ThreeMonths,
}

impl DateRange {
    /// All ranges in the order the filter dropdown cycles through them.
    pub const ALL: [DateRange; 5] = [
        DateRange::Today,
        DateRange::Last24Hours,
        DateRange::Week,
        DateRange::Month,
        DateRange::ThreeMonths,
    ];

    /// Value sent on the wire.
    pub fn as_param(self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Last24Hours => "24h",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::ThreeMonths => "3months",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Last24Hours => "Last 24 hours",
            DateRange::Week => "Past week",
            DateRange::Month => "Past month",
            DateRange::ThreeMonths => "Past 3 months",
        }
    }

    /// Step to the next selection: none -> today -> ... -> 3months -> none.
    pub fn cycle(current: Option<DateRange>) -> Option<DateRange> {
        match current {
            None => Some(DateRange::ALL[0]),
            Some(range) => {
                let idx = DateRange::ALL.iter().position(|r| *r == range).unwrap_or(0);
                DateRange::ALL.get(idx + 1).copied()
            }
        }
    }

    /// Step to the previous selection, the reverse of [`DateRange::cycle`].
    pub fn cycle_back(current: Option<DateRange>) -> Option<DateRange> {
        match current {
            None => DateRange::ALL.last().copied(),
            Some(range) => {
                let idx = DateRange::ALL.iter().position(|r| *r == range).unwrap_or(0);
                idx.checked_sub(1).map(|prev| DateRange::ALL[prev])
            }
        }
    }
}

/// Filters refining a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Publication date window
    pub date: Option<DateRange>,
    /// Author name (trimmed, never empty when set)
    pub authors: Option<String>,
    /// Selected sources, a subset of the configured whitelist
    pub sources: BTreeSet<String>,
}

impl SearchFilters {
    /// Set the author filter from free text.
    ///
    /// # Details
    /// Text is trimmed; blank text clears the filter.
    pub fn set_authors(&mut self, text: &str) {
        let trimmed = text.trim();
        self.authors = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Flip membership of `source` in the selected set.
    pub fn toggle_source(&mut self, source: &str) {
        if !self.sources.remove(source) {
            self.sources.insert(source.to_string());
        }
    }

    /// Reset every filter to empty.
    pub fn clear(&mut self) {
        self.date = None;
        self.authors = None;
        self.sources.clear();
    }

    /// Whether any filter is set.
    pub fn is_active(&self) -> bool {
        self.date.is_some() || self.authors.is_some() || !self.sources.is_empty()
    }

    /// Encode the non-empty filters as request parameters.
    ///
    /// # Returns
    /// * `Vec<(&'static str, String)>` - `date`, `authors` and `sources`
    ///   pairs, each present only when the filter is set
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(date) = self.date {
            params.push(("date", date.as_param().to_string()));
        }
        if let Some(authors) = self.authors.as_deref().map(str::trim)
            && !authors.is_empty()
        {
            params.push(("authors", authors.to_string()));
        }
        if !self.sources.is_empty() {
            let joined = self
                .sources
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("sources", joined));
        }
        params
    }
}

/// A remote call the controller wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /search` with a query and filters
    Search {
        /// Submitted query text
        query: String,
        /// Filters at submission time
        filters: SearchFilters,
    },
    /// `GET /latest`
    Latest,
}

impl Endpoint {
    /// Path relative to the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search { .. } => "search",
            Endpoint::Latest => "latest",
        }
    }

    /// Query parameters for the request.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Search { query, filters } => {
                let mut params = vec![("query", query.clone())];
                params.extend(filters.to_params());
                params
            }
            Endpoint::Latest => Vec::new(),
        }
    }
}
