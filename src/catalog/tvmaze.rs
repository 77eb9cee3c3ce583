/// TVMaze catalog client implementation.
use super::{CatalogClient, FetchError, Show};
use crate::config::Config;

/// Catalog client for the TVMaze API.
///
/// This client pages through the full show index at `{base_url}/shows`.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a client for the catalog at `base_url`.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    /// Creates a client using the configured base URL.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CatalogClient for TvMazeCatalog {
    fn fetch_shows(&self, page: u32) -> Result<Vec<Show>, FetchError> {
        let url = format!("{}/shows", self.base_url);
        tracing::debug!(%url, page, "fetching shows");

        let result = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .send()
            .map_err(|source| FetchError::Transport { source })
            .and_then(|response| {
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        status: status.as_u16(),
                    });
                }
                response
                    .json::<Vec<Show>>()
                    .map_err(|source| FetchError::Decode { source })
            });

        match &result {
            Ok(shows) => tracing::debug!(page, count = shows.len(), "fetched shows"),
            Err(error) => tracing::error!(page, %error, "API error"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PAGE_BODY: &str = r#"[
        {"id": 1, "name": "Lost", "type": "Scripted", "language": "English",
         "genres": ["Drama"], "status": "Ended", "officialSite": null,
         "schedule": {"time": "21:00", "days": ["Wednesday"]},
         "rating": {"average": 8.3}, "network": null, "image": null,
         "summary": "<p>Survivors.</p>"},
        {"id": 2, "name": "Fringe", "type": "Scripted", "language": "English",
         "genres": ["Science-Fiction"], "status": "Ended", "officialSite": null,
         "schedule": {"time": "21:00", "days": ["Friday"]},
         "rating": {"average": 8.7}, "network": null, "image": null,
         "summary": null}
    ]"#;

    #[test]
    fn test_fetch_shows_requests_page() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/shows")
            .match_query(Matcher::UrlEncoded("page".into(), "3".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PAGE_BODY)
            .create();

        let catalog = TvMazeCatalog::new(server.url());
        let shows = catalog.fetch_shows(3).unwrap();

        mock.assert();
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].name, "Lost");
        assert_eq!(shows[1].id, 2);
    }

    #[test]
    fn test_fetch_shows_empty_page() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/shows")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create();

        let catalog = TvMazeCatalog::new(format!("{}/", server.url()));
        assert!(catalog.fetch_shows(9999).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_shows_http_error_carries_status() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/shows")
            .match_query(Matcher::Any)
            .with_status(500)
            .create();

        let catalog = TvMazeCatalog::new(server.url());
        let error = catalog.fetch_shows(0).unwrap_err();

        assert!(matches!(error, FetchError::Status { status: 500 }));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_fetch_shows_invalid_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/shows")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "not a list"}"#)
            .create();

        let catalog = TvMazeCatalog::new(server.url());
        let error = catalog.fetch_shows(0).unwrap_err();

        assert!(matches!(error, FetchError::Decode { .. }));
    }

    #[test]
    fn test_fetch_shows_unreachable_host() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let catalog = TvMazeCatalog::new("http://127.0.0.1:9");
        let error = catalog.fetch_shows(0).unwrap_err();

        assert!(matches!(error, FetchError::Transport { .. }));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let catalog = TvMazeCatalog::new("https://api.tvmaze.com/");
        assert_eq!(catalog.base_url(), "https://api.tvmaze.com");
    }
}
