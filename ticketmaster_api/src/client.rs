//! HTTP client for the Ticketmaster Discovery API.

use std::{fmt, sync::Arc, time::Duration};

use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::{
    endpoint::{Attractions, Classifications, Endpoint, Events, Venues},
    query::{EncodedQuery, Param, MAX_PAGE_SIZE},
    resource::Resource,
    types::{parse_page, Genre, Page, Record, Segment, SubGenre},
    Error,
};

/// Production base URL of the Discovery API, version 2.
pub const DEFAULT_BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";

/// Connection settings shared by every request a [`Client`] makes.
#[derive(Clone)]
pub struct ClientConfig {
    /// Consumer key sent as the `apikey` parameter.
    pub api_key: String,
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub base_url: String,
    /// Page size sent with searches that do not set `size` themselves. When
    /// unset the API's own default (20) applies.
    pub page_size: Option<u32>,
    /// Per-request timeout. When unset the transport never times out.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: None,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// HTTP client for the Discovery API.
///
/// Cloning is cheap: clones share one connection pool and one configuration.
/// Searches go through the per-resource endpoints returned by [`Client::events`],
/// [`Client::venues`], [`Client::attractions`] and [`Client::classifications`].
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    config: Arc<ClientConfig>,
}

impl Client {
    /// Builds a client from `config`.
    ///
    /// Fails if the base URL does not parse or cannot carry path segments, or
    /// if the default page size is outside `1..=200`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL '{}': {}", config.base_url, e);
            Error::InvalidUrl(e)
        })?;
        if base_url.cannot_be_a_base() {
            tracing::error!("Base URL '{}' cannot carry a path", config.base_url);
            return Err(Error::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        if let Some(size) = config.page_size {
            if size == 0 || size > MAX_PAGE_SIZE {
                return Err(Error::validation(
                    Param::Size.api_name(),
                    format!("must be between 1 and {}", MAX_PAGE_SIZE),
                ));
            }
        }

        let mut builder = reqwest::Client::builder().gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Transport(e)
        })?;

        Ok(Self {
            http,
            base_url,
            config: Arc::new(config),
        })
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::new(ClientConfig::new(api_key).with_base_url(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn events(&self) -> Events {
        Endpoint::new(self.clone())
    }

    pub fn venues(&self) -> Venues {
        Endpoint::new(self.clone())
    }

    pub fn attractions(&self) -> Attractions {
        Endpoint::new(self.clone())
    }

    pub fn classifications(&self) -> Classifications {
        Endpoint::new(self.clone())
    }

    /// Shortcut for `classifications().segment_by_id(id)`.
    pub async fn segment_by_id(&self, id: &str) -> Result<Option<Segment>, Error> {
        self.classifications().segment_by_id(id).await
    }

    /// Shortcut for `classifications().genre_by_id(id)`.
    pub async fn genre_by_id(&self, id: &str) -> Result<Option<Genre>, Error> {
        self.classifications().genre_by_id(id).await
    }

    /// Shortcut for `classifications().subgenre_by_id(id)`.
    pub async fn subgenre_by_id(&self, id: &str) -> Result<Option<SubGenre>, Error> {
        self.classifications().subgenre_by_id(id).await
    }

    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("apikey", &self.config.api_key);
        Ok(url)
    }

    /// Fetches one page of search results.
    pub(crate) async fn get_page<T: Record>(&self, query: &EncodedQuery) -> Result<Page<T>, Error> {
        let resource = T::RESOURCE;
        let path = format!("{}.json", resource.name());
        let url = query.add_to_url(&self.url(&[&path])?);
        let body = self.send(&url, &format!("/{}?{}", path, query)).await?;

        parse_page::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {} page: {} | body: {}",
                resource,
                e,
                truncate_body(&body)
            );
            e
        })
    }

    /// Fetches a single entity by ID. A 404 becomes [`Error::NotFound`].
    pub(crate) async fn get_entity<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: &str,
    ) -> Result<T, Error> {
        let file = format!("{}.json", id);
        let url = self.url(&[resource.name(), &file])?;
        let body = match self
            .send(&url, &format!("/{}/{}", resource.name(), file))
            .await
        {
            Ok(body) => body,
            Err(Error::Api { status: 404, .. }) => {
                return Err(Error::NotFound {
                    resource: resource.name(),
                    id: id.to_string(),
                })
            }
            Err(e) => return Err(e),
        };

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse {} '{}': {} | body: {}",
                resource,
                id,
                e,
                truncate_body(&body)
            );
            Error::Deserialization(e)
        })
    }

    /// Sends a GET and returns the body of a successful response.
    ///
    /// `shown` is what gets logged in place of the URL, so the API key
    /// never reaches the logs.
    async fn send(&self, url: &Url, shown: &str) -> Result<String, Error> {
        tracing::debug!("GET {}", shown);
        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Failed to get {}: {}", shown, e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| truncate_body(&body));
            if status == reqwest::StatusCode::NOT_FOUND {
                tracing::warn!("{} returned 404: {}", shown, message);
            } else {
                tracing::error!("Request failed with status {}: {}", status, message);
            }
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}

/// Error bodies come in two shapes: `{"errors": [{"detail": ...}]}` from the
/// API itself and `{"fault": {"faultstring": ...}}` from the gateway.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    fault: Option<Fault>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: Option<String>,
    detail: Option<String>,
}

#[derive(Deserialize)]
struct Fault {
    faultstring: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let from_errors = parsed
        .errors
        .into_iter()
        .find_map(|e| match (e.code, e.detail) {
            (Some(code), Some(detail)) => Some(format!("{}: {}", code, detail)),
            (None, Some(detail)) => Some(detail),
            (Some(code), None) => Some(code),
            (None, None) => None,
        });
    from_errors.or_else(|| parsed.fault.and_then(|f| f.faultstring))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
