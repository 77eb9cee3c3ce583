//! Showboard - browse, search and edit TV shows from a public catalog
//!
//! This library provides the building blocks of the dashboard: a catalog
//! client fetching pages of shows, a controller owning the loaded page with its
//! search, paging and selection state, a read-only detail view and an edit
//! draft whose saved result is merged back into the loaded list.
//!
//! Edits are kept in memory only; nothing is written back to the catalog.

mod catalog;
mod config;
mod controller;
mod detail;
mod edit_panel;
mod list_view;
mod shell;

pub use catalog::{
    CatalogClient, Country, FetchError, Network, RUNNING_STATUS, Rating, Schedule, Show, ShowId,
    ShowImage, TvMazeCatalog,
};
pub use config::{BASE_URL_ENV, Config, ConfigError, DEFAULT_BASE_URL};
pub use controller::{FETCH_ERROR_MESSAGE, FetchTicket, ListView, LoadStatus, ShowListController};
pub use detail::{ShowDetails, render_details};
pub use edit_panel::{DraftField, EditDraft, SubmitError};
pub use list_view::{ListRender, render_list, show_row};
pub use shell::{ShellError, run_shell};

use thiserror::Error;

/// Top-level error type for Showboard operations
#[derive(Debug, Error)]
pub enum ShowboardError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The interactive session failed
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),
}

/// Runs the interactive dashboard against the configured catalog
///
/// # Examples
///
/// ```no_run
/// use showboard::{Config, run_dashboard};
///
/// let config = Config::new("https://api.tvmaze.com", 0).unwrap();
/// run_dashboard(&config).unwrap();
/// ```
pub fn run_dashboard(config: &Config) -> Result<(), ShowboardError> {
    tracing::info!(base_url = %config.base_url, page = config.start_page, "starting dashboard");
    let catalog = TvMazeCatalog::from_config(config);
    run_shell(&catalog, config.start_page)?;
    Ok(())
}
