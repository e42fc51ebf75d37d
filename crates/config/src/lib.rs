//! Configuration loading and validation for blend.
//!
//! Three layers, later ones winning: compiled-in defaults (the published
//! spreadsheet's CSV export URLs and the stock cache/timeout durations), an
//! optional TOML file, and `BLEND_*` environment variables. The result is
//! validated before anyone gets to use it.

pub mod error;

use std::path::Path;
use std::time::Duration;

use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Default CSV export URL of the phonics sets sheet.
const DEFAULT_SETS_URL: &str =
    "https://docs.google.com/spreadsheets/d/1J4QZ_rBqC-Y5odVnVrolFY4jwrJCKFfULmUTBkPdZiI/export?format=csv&gid=0";
/// Default CSV export URL of the practice words sheet (second tab).
const DEFAULT_WORDS_URL: &str =
    "https://docs.google.com/spreadsheets/d/1J4QZ_rBqC-Y5odVnVrolFY4jwrJCKFfULmUTBkPdZiI/export?format=csv&gid=1";
/// Cached data stays fresh for five minutes.
const DEFAULT_CACHE_TTL_SECS: u64 = 300;
/// Outbound requests are abandoned after ten seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Validated runtime configuration.
///
/// Durations are carried as whole seconds in files and environment
/// variables; use [`cache_ttl`](Self::cache_ttl) and
/// [`request_timeout`](Self::request_timeout) for typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// CSV export URL of the phonics sets sheet.
    pub sets_url: String,
    /// CSV export URL of the practice words sheet.
    pub words_url: String,
    /// Cache freshness window, in seconds.
    pub cache_ttl_secs: u64,
    /// Per-request timeout on sheet fetches, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sets_url: DEFAULT_SETS_URL.to_string(),
            words_url: DEFAULT_WORDS_URL.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads configuration: defaults, then `file` (if given; missing files
    /// are fine), then `BLEND_*` environment variables.
    #[instrument]
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            figment = figment.merge(Toml::file(file));
        }
        let config: Config = figment.merge(Env::prefixed("BLEND_")).extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    /// Cache freshness window.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Per-request timeout on sheet fetches.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        validate_url("sets_url", &self.sets_url)?;
        validate_url("words_url", &self.words_url)?;
        if self.request_timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid {
                field: "request_timeout_secs",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_url(field: &'static str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        exn::bail!(ErrorKind::Invalid {
            field,
            value: url.to_string(),
        })
    }
}
