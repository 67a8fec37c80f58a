//! Wikipedia source resolution.
//!
//! [`WikiClient`] turns an article URL into a [`RetrievedContent`]
//! record by deriving the language edition and page title from the URL,
//! then querying the MediaWiki Action API of that edition with
//! exact-title matching: ambiguity surfaces as an error instead of a
//! silently substituted page. Every backend-specific failure is
//! translated into exactly one [`ResolveError`] variant, so no raw
//! transport or wire error crosses the crate boundary.

mod response;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::config::PipelineConfig;
use crate::types::RetrievedContent;
use response::{PageRecord, QueryEnvelope};

/// Host suffix identifying a Wikipedia language edition.
const WIKIPEDIA_HOST_SUFFIX: &str = ".wikipedia.org";

/// Maximum number of candidate titles carried by an ambiguity error.
const MAX_DISAMBIGUATION_OPTIONS: usize = 5;

/// Failures surfaced by [`WikiClient::resolve`].
///
/// None of these are retried internally; retry policy, if any, belongs
/// to the caller. `PageNotFound` and `AmbiguousTitle` are caller-caused,
/// `Retrieval` is upstream-caused and may be worth retrying with
/// backoff.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No page exists for the derived title at the resolved edition.
    #[error("no Wikipedia page found for title '{title}'")]
    PageNotFound {
        /// The title that was looked up.
        title: String,
    },

    /// The title matches several pages; candidates let the caller
    /// re-prompt with a disambiguated title.
    #[error("title '{title}' is ambiguous; candidates: {}", .options.join(", "))]
    AmbiguousTitle {
        /// The ambiguous title.
        title: String,
        /// Up to five candidate titles.
        options: Vec<String>,
    },

    /// The source URL could not be interpreted as an article URL.
    #[error("could not interpret source URL: {0}")]
    InvalidUrl(String),

    /// Any other backend failure: network, HTTP status, malformed
    /// response.
    #[error("Wikipedia retrieval failed: {0}")]
    Retrieval(String),
}

/// Client for the MediaWiki Action API.
///
/// Carries a descriptive `User-Agent` (product plus contact address,
/// since Wikipedia's robot policy blocks anonymous agents) and a
/// per-request timeout. One resolution issues two requests (full
/// extract, intro extract) plus a third only when a disambiguation page
/// is hit.
#[derive(Debug, Clone)]
pub struct WikiClient {
    http: reqwest::Client,
    fallback_language: String,
    endpoint_override: Option<Url>,
}

impl WikiClient {
    /// Builds a client from the pipeline configuration.
    pub fn new(config: &PipelineConfig) -> Result<Self, ResolveError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ResolveError::Retrieval(err.to_string()))?;
        Ok(Self {
            http,
            fallback_language: config.fallback_language.clone(),
            endpoint_override: None,
        })
    }

    /// Routes every request to a fixed endpoint instead of the
    /// per-language Wikipedia host. Used by tests to point the client
    /// at a local mock server.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint_override = Some(endpoint);
        self
    }

    /// Resolves a Wikipedia article URL into its content.
    ///
    /// The language edition comes from `language` when supplied,
    /// otherwise from the URL host's leftmost label when the host is a
    /// Wikipedia host, otherwise from the configured fallback. The page
    /// title is the URL path's final segment, percent-decoded, with
    /// underscores restored to spaces.
    #[instrument(skip(self), fields(url = url))]
    pub async fn resolve(
        &self,
        url: &str,
        language: Option<&str>,
    ) -> Result<RetrievedContent, ResolveError> {
        let parsed =
            Url::parse(url).map_err(|err| ResolveError::InvalidUrl(format!("{url}: {err}")))?;
        let language = match language {
            Some(explicit) => explicit.to_string(),
            None => derive_language(&parsed, &self.fallback_language),
        };
        let title = derive_title(&parsed)?;
        debug!(%language, %title, "resolving Wikipedia page");

        let page = self.fetch_page(&language, &title).await?;
        if page.missing {
            return Err(ResolveError::PageNotFound { title });
        }
        if page.is_disambiguation() {
            let options = self.fetch_disambiguation_options(&language, &title).await?;
            return Err(ResolveError::AmbiguousTitle { title, options });
        }

        let resolved_title = page.title.clone().unwrap_or_else(|| title.clone());
        let summary = self.fetch_intro(&language, &resolved_title).await?;

        Ok(RetrievedContent {
            title: resolved_title,
            content: page.extract.unwrap_or_default(),
            summary,
            canonical_url: page.fullurl.unwrap_or_else(|| url.to_string()),
            language,
        })
    }

    async fn fetch_page(&self, language: &str, title: &str) -> Result<PageRecord, ResolveError> {
        self.query(
            language,
            &[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
                ("titles", title),
                ("prop", "extracts|info|pageprops"),
                ("explaintext", "1"),
                ("inprop", "url"),
            ],
        )
        .await
    }

    async fn fetch_intro(&self, language: &str, title: &str) -> Result<String, ResolveError> {
        let page = self
            .query(
                language,
                &[
                    ("action", "query"),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("redirects", "1"),
                    ("titles", title),
                    ("prop", "extracts"),
                    ("exintro", "1"),
                    ("explaintext", "1"),
                ],
            )
            .await?;
        Ok(page.extract.unwrap_or_default())
    }

    async fn fetch_disambiguation_options(
        &self,
        language: &str,
        title: &str,
    ) -> Result<Vec<String>, ResolveError> {
        let page = self
            .query(
                language,
                &[
                    ("action", "query"),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("titles", title),
                    ("prop", "links"),
                    ("plnamespace", "0"),
                    ("pllimit", "10"),
                ],
            )
            .await?;
        Ok(page
            .links
            .into_iter()
            .take(MAX_DISAMBIGUATION_OPTIONS)
            .map(|link| link.title)
            .collect())
    }

    async fn query(
        &self,
        language: &str,
        params: &[(&str, &str)],
    ) -> Result<PageRecord, ResolveError> {
        let endpoint = self.endpoint_for(language);
        let response = self
            .http
            .get(endpoint)
            .query(params)
            .send()
            .await
            .map_err(|err| ResolveError::Retrieval(err.to_string()))?
            .error_for_status()
            .map_err(|err| ResolveError::Retrieval(err.to_string()))?;

        let envelope: QueryEnvelope = response
            .json()
            .await
            .map_err(|err| ResolveError::Retrieval(format!("malformed response: {err}")))?;

        envelope
            .query
            .and_then(|body| body.pages.into_iter().next())
            .ok_or_else(|| ResolveError::Retrieval("response contained no pages".to_string()))
    }

    fn endpoint_for(&self, language: &str) -> String {
        match &self.endpoint_override {
            Some(endpoint) => endpoint.to_string(),
            None => format!("https://{language}.wikipedia.org/w/api.php"),
        }
    }
}

/// Derives the language edition from the URL host.
///
/// `en.wikipedia.org` → `en`, `fr.m.wikipedia.org` → `fr`; anything
/// that is not a Wikipedia subdomain host falls back to the configured
/// default.
pub(crate) fn derive_language(url: &Url, fallback: &str) -> String {
    let Some(host) = url.host_str() else {
        return fallback.to_string();
    };
    if let Some(subdomains) = host.strip_suffix(WIKIPEDIA_HOST_SUFFIX) {
        let label = subdomains.split('.').next().unwrap_or_default();
        if !label.is_empty() && label != "www" {
            return label.to_string();
        }
    }
    fallback.to_string()
}

/// Derives the page title from the URL path's final segment:
/// percent-decoded, underscores restored to spaces.
pub(crate) fn derive_title(url: &Url) -> Result<String, ResolveError> {
    let raw = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or_default();
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|err| ResolveError::InvalidUrl(format!("title is not valid UTF-8: {err}")))?;
    let title = decoded.replace('_', " ");
    if title.trim().is_empty() {
        return Err(ResolveError::InvalidUrl(format!(
            "no page title in URL path '{}'",
            url.path()
        )));
    }
    Ok(title)
}
