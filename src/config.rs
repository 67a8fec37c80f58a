//! Configuration shared by the pipeline components.
//!
//! All tunables are carried in explicit config objects handed to each
//! component's constructor; nothing is read from ambient global state,
//! so components stay independently testable with arbitrary settings.
//! [`PipelineConfig::from_env`] is the single place environment input
//! enters the crate.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum chunk length in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default number of characters adjacent chunks share.
pub const DEFAULT_OVERLAP: usize = 200;

/// Language edition used when none can be derived from a source URL.
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

/// Outbound client identifier. Wikipedia blocks anonymous or generic
/// user agents, so the default names the product and a contact address.
pub const DEFAULT_USER_AGENT: &str =
    "wikismith/0.1 (educational content pipeline; contact@wikismith.dev)";

/// Default timeout applied to each outbound retrieval request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while building or loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `chunk_size` must be at least one character.
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    /// `overlap` must leave room for the chunk to advance.
    #[error("overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapTooLarge {
        /// Requested chunk size.
        chunk_size: usize,
        /// Requested overlap.
        overlap: usize,
    },

    /// An environment variable was present but unparseable.
    #[error("failed to parse environment variable {key}: {message}")]
    EnvParse {
        /// Variable name.
        key: String,
        /// Parse failure description.
        message: String,
    },
}

/// Validated chunking parameters.
///
/// Construction rejects the caller contract violations named in the
/// chunker's precondition (`chunk_size == 0`, `overlap >= chunk_size`),
/// so [`crate::preprocess::split_into_chunks`] stays total over every
/// policy it can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkPolicy {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkPolicy {
    /// Builds a policy, rejecting invalid size/overlap combinations.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ConfigError> {
        if chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if overlap >= chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                chunk_size,
                overlap,
            });
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Maximum chunk length in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of characters adjacent chunks share.
    pub fn overlap(&self) -> usize {
        self.overlap
    }
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Top-level configuration consumed by [`crate::pipeline::DocumentPipeline`]
/// and [`crate::wiki::WikiClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Chunking parameters for model-sized splitting.
    pub chunking: ChunkPolicy,
    /// Language edition used when the source URL does not reveal one.
    pub fallback_language: String,
    /// Outbound `User-Agent`, including product name and contact.
    pub user_agent: String,
    /// Per-request timeout for outbound retrieval calls.
    pub request_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunking: ChunkPolicy::default(),
            fallback_language: DEFAULT_FALLBACK_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl PipelineConfig {
    /// Replaces the chunking policy.
    #[must_use]
    pub fn with_chunking(mut self, chunking: ChunkPolicy) -> Self {
        self.chunking = chunking;
        self
    }

    /// Replaces the fallback language code.
    #[must_use]
    pub fn with_fallback_language(mut self, language: impl Into<String>) -> Self {
        self.fallback_language = language.into();
        self
    }

    /// Replaces the outbound client identifier.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replaces the outbound request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Loads configuration from the environment, falling back to the
    /// compiled defaults for anything unset.
    ///
    /// Reads `.env` files via `dotenvy` first, then the `WIKISMITH_*`
    /// variables: `WIKISMITH_CHUNK_SIZE`, `WIKISMITH_CHUNK_OVERLAP`,
    /// `WIKISMITH_FALLBACK_LANGUAGE`, `WIKISMITH_USER_AGENT`, and
    /// `WIKISMITH_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let chunk_size = read_env_parsed("WIKISMITH_CHUNK_SIZE")?
            .unwrap_or(DEFAULT_CHUNK_SIZE);
        let overlap = read_env_parsed("WIKISMITH_CHUNK_OVERLAP")?
            .unwrap_or(DEFAULT_OVERLAP);
        let chunking = ChunkPolicy::new(chunk_size, overlap)?;

        let timeout_secs: Option<u64> = read_env_parsed("WIKISMITH_REQUEST_TIMEOUT_SECS")?;

        Ok(Self {
            chunking,
            fallback_language: std::env::var("WIKISMITH_FALLBACK_LANGUAGE")
                .unwrap_or(defaults.fallback_language),
            user_agent: std::env::var("WIKISMITH_USER_AGENT").unwrap_or(defaults.user_agent),
            request_timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }
}

fn read_env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|err| ConfigError::EnvParse {
            key: key.to_string(),
            message: err.to_string(),
        }),
        Err(_) => Ok(None),
    }
}
