//! Typed models and HTTP client for the player explorer API.
//!
//! Two endpoints exist: `GET /players` (search + pagination) and
//! `GET /stats` (collection summary). The server may re-scrape between
//! calls, so responses are requested uncached.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;

/// Hard ceiling on how long a single request may hang before the client
/// gives up and reports a transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One scraped player record. `wikipedia_url` is the stable identity key;
/// every other biographical field may be absent in the source data.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Player {
    pub name: String,
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub height: Option<String>,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub wikipedia_url: String,
}

/// Server-computed paging metadata for a result set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationInfo {
    /// Metadata for an empty, unfetched result set.
    pub fn empty(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            total_pages: 1,
            has_next: false,
            has_prev: false,
        }
    }

    /// Recompute the derived fields from `page`, `limit` and `total`.
    ///
    /// The server sends all six fields, but rendering trusts only the raw
    /// counts and re-derives the rest so an inconsistent payload cannot
    /// produce a pagination bar that contradicts itself.
    pub fn normalized(&self) -> Self {
        let limit = self.limit.max(1);
        let total_pages = (self.total.div_ceil(u64::from(limit)) as u32).max(1);
        let page = self.page.clamp(1, total_pages);
        Self {
            page,
            limit,
            total: self.total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Payload of `GET /players`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
    pub pagination: PaginationInfo,
}

/// Payload of `GET /stats`. Maps are ordered so the UI can show a stable
/// top-N without sorting on every frame.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Stats {
    pub total_players: u64,
    pub with_date_of_birth: u64,
    pub with_height: u64,
    pub positions: BTreeMap<String, u64>,
    pub nationalities: BTreeMap<String, u64>,
}

/// HTTP client bound to one API base URL.
///
/// Cheap to clone; each in-flight fetch task owns a clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Transport(format!("invalid base URL {base_url:?}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("pl-explorer/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { base_url, http })
    }

    /// Build the `/players` request URL with its query string.
    pub fn players_url(&self, search: &str, page: u32, limit: u32) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join("players")
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("search", search)
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// Fetch one page of players matching `search`.
    pub async fn fetch_players(
        &self,
        search: &str,
        page: u32,
        limit: u32,
    ) -> Result<PlayersResponse, ApiError> {
        let url = self.players_url(search, page, limit)?;
        debug!(%url, "fetching players");
        self.get_json(url).await
    }

    /// Fetch collection statistics.
    pub async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        let url = self
            .base_url
            .join("stats")
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(%url, "fetching stats");
        self.get_json(url).await
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .http
            .get(url)
            // The upstream store may change between calls.
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_url_carries_all_query_parameters() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        let url = client.players_url("salah", 3, 20).unwrap();
        assert_eq!(url.path(), "/players");
        assert_eq!(url.query(), Some("search=salah&page=3&limit=20"));
    }

    #[test]
    fn players_url_encodes_spaces_in_search() {
        let client = ApiClient::new("http://localhost:8000").unwrap();
        let url = client.players_url("van dijk", 1, 20).unwrap();
        assert_eq!(url.query(), Some("search=van+dijk&page=1&limit=20"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(ApiClient::new("not a url").is_err());
    }

    #[test]
    fn normalized_recomputes_derived_fields() {
        let raw = PaginationInfo {
            page: 5,
            limit: 20,
            total: 137,
            // Deliberately inconsistent derived fields.
            total_pages: 0,
            has_next: false,
            has_prev: false,
        };
        let norm = raw.normalized();
        assert_eq!(norm.total_pages, 7);
        assert!(norm.has_next);
        assert!(norm.has_prev);
    }

    #[test]
    fn normalized_clamps_out_of_range_page() {
        let raw = PaginationInfo {
            page: 99,
            limit: 20,
            total: 40,
            total_pages: 2,
            has_next: true,
            has_prev: true,
        };
        let norm = raw.normalized();
        assert_eq!(norm.page, 2);
        assert!(!norm.has_next);
        assert!(norm.has_prev);
    }

    #[test]
    fn normalized_empty_collection_has_one_page() {
        let norm = PaginationInfo::empty(20).normalized();
        assert_eq!(norm.total_pages, 1);
        assert!(!norm.has_next);
        assert!(!norm.has_prev);
    }
}
