/// Show catalog access.
///
/// This module provides the show data model and the trait implemented by
/// catalog clients that retrieve one page of shows at a time.
mod show;
mod tvmaze;

pub use show::{Country, Network, RUNNING_STATUS, Rating, Schedule, Show, ShowId, ShowImage};
pub use tvmaze::TvMazeCatalog;

#[cfg(test)]
pub(crate) use show::fixtures;

use thiserror::Error;

/// Errors that can occur while fetching a page of shows.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-success status
    #[error("Failed to fetch shows (HTTP {status})")]
    Status { status: u16 },

    /// The response body was not a list of shows
    #[error("Failed to parse catalog response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The HTTP status of the failed response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status } => Some(*status),
            FetchError::Transport { source } | FetchError::Decode { source } => {
                source.status().map(|s| s.as_u16())
            }
        }
    }
}

/// Trait for clients that can fetch pages of shows from a catalog.
///
/// Implementors return the decoded page exactly as delivered, without
/// caching or retrying.
pub trait CatalogClient {
    /// Fetches one page of shows.
    ///
    /// # Arguments
    ///
    /// * `page` - Zero-based page index. The catalog decides which pages are empty.
    ///
    /// # Returns
    ///
    /// The shows of that page in catalog order, or a `FetchError`
    fn fetch_shows(&self, page: u32) -> Result<Vec<Show>, FetchError>;
}
