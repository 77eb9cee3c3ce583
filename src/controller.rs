//! Show list controller
//!
//! This module owns the list of shows for the current catalog page together
//! with its loading state, the search query and the view/edit selections.
//!
//! Fetching is split into two steps so responses can arrive at any time:
//! every transition into `Loading` hands out a [`FetchTicket`], and the result
//! of that fetch is handed back through [`ShowListController::resolve`]. Only
//! the most recently issued ticket is ever applied.

use crate::catalog::{CatalogClient, FetchError, Show, ShowId};

/// User-facing message shown when a page could not be fetched
pub const FETCH_ERROR_MESSAGE: &str = "Unable to fetch shows. Please try again later.";

/// Loading state of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing has been requested yet
    Idle,
    /// A fetch for the current page is in flight
    Loading,
    /// The current page was fetched successfully
    Loaded,
    /// Fetching the current page failed; it can be retried
    Error,
}

/// Handle for one issued page request
///
/// Returned whenever the controller enters `Loading`. The owner performs the
/// fetch for [`FetchTicket::page`] and passes the outcome back with the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    page: u32,
    request_id: u64,
}

impl FetchTicket {
    /// The page that has to be fetched
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What the list area should display
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    /// A fetch is in flight; previous rows must not be shown
    Loading,
    /// The last fetch failed
    Failed { message: &'a str },
    /// Loaded, but nothing matches the search query (or the page is empty)
    Empty,
    /// Loaded shows matching the search query, in catalog order
    Rows(Vec<&'a Show>),
}

/// Stateful coordinator for fetching, searching, paging and editing shows
#[derive(Debug)]
pub struct ShowListController {
    status: LoadStatus,
    shows: Vec<Show>,
    page: u32,
    search_query: String,
    error_message: Option<String>,
    pending: Option<FetchTicket>,
    next_request_id: u64,
    viewing: Option<ShowId>,
    editing: Option<ShowId>,
}

impl ShowListController {
    /// Creates an idle controller positioned at `start_page`
    pub fn new(start_page: u32) -> Self {
        Self {
            status: LoadStatus::Idle,
            shows: Vec::new(),
            page: start_page,
            search_query: String::new(),
            error_message: None,
            pending: None,
            next_request_id: 0,
            viewing: None,
            editing: None,
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Shows of the current page, unfiltered
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The ticket of the fetch currently awaited, if any
    pub fn pending(&self) -> Option<FetchTicket> {
        self.pending
    }

    /// Starts loading the current page
    pub fn mount(&mut self) -> FetchTicket {
        self.begin_fetch(self.page)
    }

    /// Navigates to `new_page` and starts loading it
    ///
    /// The loaded shows stay untouched until the new result is resolved.
    pub fn change_page(&mut self, new_page: u32) -> FetchTicket {
        self.page = new_page;
        self.begin_fetch(new_page)
    }

    /// Whether the catalog may have a page after the current one
    ///
    /// Derived from the last fetch: an empty page marks the end of the catalog.
    pub fn has_more_pages(&self) -> bool {
        self.status == LoadStatus::Loaded && !self.shows.is_empty()
    }

    /// Navigates to the following page, if one may exist
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if !self.has_more_pages() {
            return None;
        }
        let next = self.page.checked_add(1)?;
        Some(self.change_page(next))
    }

    /// Navigates to the preceding page, unless already on the first one
    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        let previous = self.page.checked_sub(1)?;
        Some(self.change_page(previous))
    }

    /// Re-issues the request for the current page after a failure
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if self.status != LoadStatus::Error {
            return None;
        }
        Some(self.begin_fetch(self.page))
    }

    fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        let ticket = FetchTicket {
            page,
            request_id: self.next_request_id,
        };
        self.next_request_id += 1;
        self.pending = Some(ticket);
        self.status = LoadStatus::Loading;
        tracing::debug!(page, request_id = ticket.request_id, "loading page");
        ticket
    }

    /// Applies the outcome of a fetch
    ///
    /// Results for any ticket other than the newest one are discarded.
    ///
    /// # Returns
    ///
    /// `true` if the result was applied, `false` if it was stale
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<Show>, FetchError>) -> bool {
        if self.pending != Some(ticket) {
            tracing::debug!(
                page = ticket.page,
                request_id = ticket.request_id,
                current_page = self.page,
                "discarding stale response"
            );
            return false;
        }
        self.pending = None;

        match result {
            Ok(shows) => {
                tracing::debug!(page = ticket.page, count = shows.len(), "page loaded");
                self.shows = shows;
                self.status = LoadStatus::Loaded;
                self.error_message = None;
            }
            Err(error) => {
                tracing::warn!(page = ticket.page, %error, "failed to load page");
                self.shows.clear();
                self.status = LoadStatus::Error;
                self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Fetches the pending page from `client` and resolves it right away
    ///
    /// Returns `false` if nothing was pending.
    pub fn load_with<C: CatalogClient>(&mut self, client: &C) -> bool {
        let Some(ticket) = self.pending else {
            return false;
        };
        let result = client.fetch_shows(ticket.page);
        self.resolve(ticket, result)
    }

    /// Sets the search query; filtering happens locally on the loaded page
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Loaded shows whose name contains the search query, ignoring case
    pub fn visible_shows(&self) -> Vec<&Show> {
        let query = self.search_query.to_lowercase();
        self.shows
            .iter()
            .filter(|show| show.name.to_lowercase().contains(&query))
            .collect()
    }

    /// What the list area should currently display
    pub fn view(&self) -> ListView<'_> {
        match self.status {
            LoadStatus::Idle | LoadStatus::Loading => ListView::Loading,
            LoadStatus::Error => ListView::Failed {
                message: self.error_message.as_deref().unwrap_or(FETCH_ERROR_MESSAGE),
            },
            LoadStatus::Loaded => {
                let rows = self.visible_shows();
                if rows.is_empty() {
                    ListView::Empty
                } else {
                    ListView::Rows(rows)
                }
            }
        }
    }

    fn find(&self, id: ShowId) -> Option<&Show> {
        self.shows.iter().find(|show| show.id == id)
    }

    /// Designates a loaded show for the detail view
    ///
    /// Returns `false` and leaves the selection unchanged if `id` is not loaded.
    pub fn select_for_view(&mut self, id: ShowId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.viewing = Some(id);
        true
    }

    /// Designates a loaded show for editing
    ///
    /// Returns `false` and leaves the selection unchanged if `id` is not loaded.
    pub fn select_for_edit(&mut self, id: ShowId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    pub fn selected_for_view(&self) -> Option<&Show> {
        self.viewing.and_then(|id| self.find(id))
    }

    pub fn selected_for_edit(&self) -> Option<&Show> {
        self.editing.and_then(|id| self.find(id))
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    /// Replaces the loaded show with the same id as `updated`
    ///
    /// The change lives in memory only and is lost on the next fetch.
    ///
    /// # Returns
    ///
    /// `true` if an entry was replaced, `false` if no loaded show has that id
    pub fn apply_update(&mut self, updated: Show) -> bool {
        let Some(slot) = self.shows.iter_mut().find(|show| show.id == updated.id) else {
            tracing::debug!(id = updated.id, "update for show that is not loaded");
            return false;
        };
        tracing::info!(id = updated.id, name = %updated.name, "show updated");
        *slot = updated;
        self.editing = None;
        true
    }
}
