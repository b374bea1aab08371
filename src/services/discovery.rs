// src/services/discovery.rs

//! Article discovery service.
//!
//! The ID space of each category is sparse and its membership unknown, so
//! discovery probes every candidate sequence up to a configured bound and
//! keeps whatever exists.

use std::cmp::Reverse;
use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::error::{AppError, Result};
use crate::models::{ArticleKey, ArticleSummary, CategoryCode, DiscoveryConfig, MAX_SEQUENCE};
use crate::source::ArticleSource;
use crate::utils::parse_localized_date;

/// One finished probe.
#[derive(Debug)]
pub struct Probe {
    /// Position in the probe plan; breaks ties between equal dates
    pub order: usize,
    pub key: ArticleKey,
    pub result: Result<Option<ArticleSummary>>,
}

/// Summary of a discovery run.
#[derive(Debug, Default)]
pub struct DiscoveryOutcome {
    /// Found articles, newest first
    pub articles: Vec<ArticleSummary>,
    pub probe_total: usize,
    pub misses: usize,
    pub failures: usize,
    /// Highest sequence probed in each category
    pub sequence_bound: u16,
    /// Categories whose last probed sequence exists; more may lie past the bound
    pub saturated_categories: Vec<CategoryCode>,
}

/// Service enumerating articles across categories.
pub struct ArticleDiscovery {
    source: Arc<dyn ArticleSource>,
    config: DiscoveryConfig,
}

impl ArticleDiscovery {
    /// Create a new discovery service reading from `source`.
    pub fn new(source: Arc<dyn ArticleSource>, config: DiscoveryConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Discover articles in `category`, or in every configured category.
    ///
    /// Individual misses and probe errors are absorbed. The run fails as a
    /// whole only when there is nothing to scan or every probe errored.
    pub async fn discover(&self, category: Option<&CategoryCode>) -> Result<DiscoveryOutcome> {
        let targets = match category {
            Some(code) => vec![code.clone()],
            None => self.config.categories.clone(),
        };
        if targets.is_empty() {
            return Err(AppError::discovery("no categories to scan"));
        }

        let bound = self.config.max_sequence;
        if !(1..=MAX_SEQUENCE).contains(&bound) {
            return Err(AppError::discovery(format!(
                "sequence bound {bound} is outside 1..={MAX_SEQUENCE}"
            )));
        }
        let keys = plan_probes(&targets, bound);

        log::info!(
            "Probing {} candidate articles in {} categor{} from {}",
            keys.len(),
            targets.len(),
            if targets.len() == 1 { "y" } else { "ies" },
            self.source.describe()
        );

        let concurrency = self.config.max_concurrent.max(1);
        let probes: Vec<Probe> = stream::iter(keys.into_iter().enumerate())
            .map(|(order, key)| async move {
                let result = self.probe(&key).await;
                Probe { order, key, result }
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        let outcome = collect_probes(probes, bound);

        if outcome.failures == outcome.probe_total {
            return Err(AppError::discovery(format!(
                "all {} probes failed",
                outcome.probe_total
            )));
        }
        if outcome.failures > 0 {
            log::warn!(
                "{} of {} probes failed and were skipped",
                outcome.failures,
                outcome.probe_total
            );
        }
        for code in &outcome.saturated_categories {
            log::warn!(
                "Category {} has an article at sequence {}; articles past the bound are not listed",
                code,
                bound
            );
        }
        log::info!(
            "Discovered {} articles ({} missing ids)",
            outcome.articles.len(),
            outcome.misses
        );

        Ok(outcome)
    }

    /// Fetch one candidate. `Ok(None)` means the id is unused.
    pub async fn probe(&self, key: &ArticleKey) -> Result<Option<ArticleSummary>> {
        let document = self.source.fetch(key).await?;
        Ok(document.map(|document| ArticleSummary::from_document(key, document)))
    }
}

/// Every `(category, sequence)` pair to probe, in category order then
/// ascending sequence.
pub fn plan_probes(categories: &[CategoryCode], bound: u16) -> Vec<ArticleKey> {
    categories
        .iter()
        .flat_map(|code| (1..=bound).map(move |seq| ArticleKey::new(code.clone(), seq)))
        .collect()
}

/// Fold finished probes into an outcome: keep hits, count misses and
/// failures, then order hits newest first.
pub fn collect_probes(probes: Vec<Probe>, bound: u16) -> DiscoveryOutcome {
    let mut outcome = DiscoveryOutcome {
        probe_total: probes.len(),
        sequence_bound: bound,
        ..DiscoveryOutcome::default()
    };

    let mut hits = Vec::new();
    for probe in probes {
        match probe.result {
            Ok(Some(summary)) => {
                if probe.key.sequence == bound
                    && !outcome.saturated_categories.contains(&probe.key.category)
                {
                    outcome.saturated_categories.push(probe.key.category.clone());
                }
                hits.push((probe.order, summary));
            }
            Ok(None) => outcome.misses += 1,
            Err(error) => {
                outcome.failures += 1;
                log::debug!("Probe {} failed: {}", probe.key, error);
            }
        }
    }

    hits.sort_by_key(|(order, _)| *order);
    outcome.articles = hits.into_iter().map(|(_, summary)| summary).collect();
    sort_newest_first(&mut outcome.articles);
    outcome.saturated_categories.sort();
    outcome
}

/// Stable sort by parsed date, newest first; unparseable dates go last.
pub fn sort_newest_first(articles: &mut [ArticleSummary]) {
    articles.sort_by_cached_key(|article| Reverse(parse_localized_date(&article.date)));
}
