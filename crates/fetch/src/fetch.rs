//! The fetch orchestrator: cache-first retrieval of both content sheets.

use blend_cache::DataCache;
use blend_sheet::{PhonicsData, parse_sets, parse_words};
use futures::future::try_join;
use tracing::instrument;

use crate::error::Result;
use crate::source::SourceHandle;

/// A successfully retrieved dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// The composed dataset.
    pub data: PhonicsData,
    /// Whether the dataset came out of the cache instead of a fresh fetch.
    /// Informational only; callers must not branch on it beyond diagnostics.
    pub from_cache: bool,
}

/// Coordinates the two sheet sources, the parser and the cache.
///
/// `get` is the one outbound operation of this crate: serve from cache when
/// fresh, otherwise fetch both sheets in parallel, parse, repopulate the
/// cache and return. Concurrent callers that miss the cache at the same
/// time are coalesced behind a refresh lock, so an expired entry triggers
/// exactly one outbound fetch no matter how many requests are in flight.
pub struct Fetcher {
    sets_source: SourceHandle,
    words_source: SourceHandle,
    cache: DataCache<PhonicsData>,
    refresh: tokio::sync::Mutex<()>,
}

impl Fetcher {
    /// Creates a fetcher over the two sheet sources and an (empty or
    /// pre-warmed) cache.
    pub fn new(sets_source: SourceHandle, words_source: SourceHandle, cache: DataCache<PhonicsData>) -> Self {
        Self {
            sets_source,
            words_source,
            cache,
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    /// Returns the current phonics dataset, fetching and parsing both
    /// sheets unless a fresh cached copy exists.
    ///
    /// # Errors
    ///
    /// Fails as a whole if either source fails; there is no partial result
    /// and no stale-cache fallback. A failed refresh leaves the cache
    /// untouched, so the next call performs a real fetch. No retry is
    /// attempted here; retry policy belongs to the caller.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<FetchOutcome> {
        if let Some(data) = self.cache.get() {
            tracing::debug!("serving phonics data from cache");
            return Ok(FetchOutcome { data, from_cache: true });
        }
        let _refresh = self.refresh.lock().await;
        // A refresh may have completed while this caller waited on the lock.
        if let Some(data) = self.cache.get() {
            tracing::debug!("coalesced into a refresh finished by another caller");
            return Ok(FetchOutcome { data, from_cache: true });
        }
        let data = self.refresh().await?;
        Ok(FetchOutcome { data, from_cache: false })
    }

    /// Fetches both sheets in parallel, parses them and repopulates the
    /// cache. Fail-fast: the first source error fails the whole refresh.
    async fn refresh(&self) -> Result<PhonicsData> {
        let (sets_csv, words_csv) = try_join(self.sets_source.fetch(), self.words_source.fetch()).await.inspect_err(
            |error| tracing::warn!(%error, "sheet fetch failed; cache left untouched"),
        )?;
        let (phonics_sets, set_stats) = parse_sets(&sets_csv);
        let (practice_words, word_stats) = parse_words(&words_csv);
        tracing::info!(
            sets = phonics_sets.len(),
            set_rows_skipped = set_stats.skipped,
            word_sets = practice_words.len(),
            word_rows_skipped = word_stats.skipped,
            "parsed fresh phonics data",
        );
        let data = PhonicsData { phonics_sets, practice_words };
        self.cache.set(data.clone());
        Ok(data)
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::source::MockSource;
    use blend_cache::ManualClock;
    use std::sync::Arc;
    use std::time::Duration;

    const TTL: Duration = Duration::from_secs(300);
    const SETS_CSV: &str = "header\nSet 1,s;t;a,and;for\nSet 3,k;e,I;my\n";
    const WORDS_CSV: &str = "header\nSet 1,sat,pat\nSet 3,keep\n";

    struct Fixture {
        fetcher: Fetcher,
        sets: Arc<MockSource>,
        words: Arc<MockSource>,
        clock: Arc<ManualClock>,
    }

    fn fixture(sets: MockSource, words: MockSource) -> Fixture {
        let sets = Arc::new(sets);
        let words = Arc::new(words);
        let clock = Arc::new(ManualClock::new());
        let cache = DataCache::with_clock(TTL, clock.clone());
        let fetcher = Fetcher::new(sets.clone(), words.clone(), cache);
        Fixture { fetcher, sets, words, clock }
    }

    fn happy_fixture() -> Fixture {
        fixture(MockSource::ok("sets", SETS_CSV), MockSource::ok("words", WORDS_CSV))
    }

    #[tokio::test]
    async fn first_call_fetches_and_parses_both_sheets() {
        let fx = happy_fixture();
        let outcome = fx.fetcher.get().await.unwrap();
        assert!(!outcome.from_cache);
        assert_eq!(outcome.data.phonics_sets.len(), 2);
        assert_eq!(outcome.data.phonics_sets[1].gpc_list, vec!["k", "e"]);
        assert_eq!(outcome.data.practice_words[0].words, vec!["sat", "pat"]);
        assert_eq!(fx.sets.calls(), 1);
        assert_eq!(fx.words.calls(), 1);
    }

    #[tokio::test]
    async fn second_call_within_ttl_is_served_from_cache() {
        let fx = happy_fixture();
        let first = fx.fetcher.get().await.unwrap();
        let second = fx.fetcher.get().await.unwrap();
        assert!(second.from_cache);
        assert_eq!(second.data, first.data);
        assert_eq!(fx.sets.calls(), 1);
        assert_eq!(fx.words.calls(), 1);
    }

    #[tokio::test]
    async fn call_after_ttl_fetches_exactly_once_more() {
        let fx = happy_fixture();
        fx.fetcher.get().await.unwrap();
        fx.clock.advance(TTL);
        let outcome = fx.fetcher.get().await.unwrap();
        assert!(!outcome.from_cache);
        assert_eq!(fx.sets.calls(), 2);
        assert_eq!(fx.words.calls(), 2);
    }

    #[tokio::test]
    async fn concurrent_cold_misses_coalesce_into_one_fetch() {
        let fx = happy_fixture();
        let (first, second) = tokio::join!(fx.fetcher.get(), fx.fetcher.get());
        assert_eq!(first.unwrap().data, second.unwrap().data);
        assert_eq!(fx.sets.calls() + fx.words.calls(), 2);
    }

    #[tokio::test]
    async fn failing_source_fails_the_whole_operation() {
        let fx = fixture(
            MockSource::ok("sets", SETS_CSV),
            MockSource::failing("words", ErrorKind::Status {
                source: "words".to_string(),
                status: "500 Internal Server Error".to_string(),
            }),
        );
        let error = fx.fetcher.get().await.unwrap_err();
        assert!(error.to_string().contains("words"));
    }

    #[tokio::test]
    async fn failed_fetch_does_not_populate_the_cache() {
        let fx = fixture(
            MockSource::failing("sets", ErrorKind::Network { source: "sets".to_string() }),
            MockSource::ok("words", WORDS_CSV),
        );
        assert!(fx.fetcher.get().await.is_err());
        assert!(fx.fetcher.get().await.is_err());
        // Both calls attempted a real fetch: nothing was cached, and no
        // poisoned entry short-circuited the second attempt.
        assert_eq!(fx.sets.calls(), 2);
    }

    #[tokio::test]
    async fn error_names_the_failing_source_and_status() {
        let source = MockSource::failing("sets", ErrorKind::Status {
            source: "sets".to_string(),
            status: "403 Forbidden".to_string(),
        });
        let fx = fixture(source, MockSource::ok("words", WORDS_CSV));
        let error = fx.fetcher.get().await.unwrap_err();
        let message = error.to_string();
        assert!(message.contains("sets"));
        assert!(message.contains("403"));
    }
}
