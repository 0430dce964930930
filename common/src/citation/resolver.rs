//! Per-instance citation lookup state.
//!
//! Each mounted citation owns one `CitationResolver`. It moves
//! `Idle -> Loading -> Loaded | Failed` exactly once: triggers while loading or
//! after completion do nothing, and a failure is never retried by the same
//! instance.

use crate::api::source_anchor_href;
use crate::model::source::CitationData;
use std::fmt;

/// How long a lookup may take before the instance gives up with
/// [`LookupError::Timeout`].
pub const LOOKUP_TIMEOUT_MS: u32 = 8_000;

/// Why a lookup produced no citation. Every variant renders the same fallback
/// link; the distinction only feeds diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NotFound,
    Transport(String),
    Timeout,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound => f.write_str("source not found"),
            LookupError::Transport(reason) => write!(f, "transport failure: {}", reason),
            LookupError::Timeout => f.write_str("lookup timed out"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolverState {
    Idle,
    Loading,
    Loaded(CitationData),
    Failed(LookupError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CitationResolver {
    slug: String,
    state: ResolverState,
}

impl CitationResolver {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            state: ResolverState::Idle,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn state(&self) -> &ResolverState {
        &self.state
    }

    /// Handles a hover or focus on the citation.
    ///
    /// `cached` is what a page-level cache holds for this slug, if anything.
    /// Returns `true` only on the first trigger of an idle instance that found
    /// nothing in the cache; the caller must then issue exactly one lookup and
    /// report it through [`CitationResolver::complete`].
    pub fn trigger(&mut self, cached: Option<CitationData>) -> bool {
        if self.state != ResolverState::Idle {
            return false;
        }
        match cached {
            Some(citation) => {
                self.state = ResolverState::Loaded(citation);
                false
            }
            None => {
                self.state = ResolverState::Loading;
                true
            }
        }
    }

    /// Records the outcome of the lookup issued after [`CitationResolver::trigger`].
    /// Outcomes arriving in any state other than `Loading` are dropped, as is a
    /// citation for another slug (a lookup still in flight when the instance
    /// was re-pointed at a new source).
    pub fn complete(&mut self, outcome: Result<CitationData, LookupError>) {
        if self.state != ResolverState::Loading {
            return;
        }
        if matches!(&outcome, Ok(citation) if citation.slug != self.slug) {
            return;
        }
        self.state = match outcome {
            Ok(citation) => ResolverState::Loaded(citation),
            Err(error) => ResolverState::Failed(error),
        };
    }

    pub fn citation(&self) -> Option<&CitationData> {
        match &self.state {
            ResolverState::Loaded(citation) => Some(citation),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == ResolverState::Loading
    }

    /// The external URL once resolved, otherwise the source's anchor on the
    /// sources page.
    pub fn href(&self) -> String {
        self.external_url()
            .map(str::to_string)
            .unwrap_or_else(|| source_anchor_href(&self.slug))
    }

    /// The resolved URL, when it points off-site.
    pub fn external_url(&self) -> Option<&str> {
        self.citation()
            .and_then(|c| c.url.as_deref())
            .filter(|url| is_external(url))
    }
}

pub(crate) fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::SourceType;

    fn citation(slug: &str, url: Option<&str>) -> CitationData {
        CitationData {
            slug: slug.to_string(),
            title: "Rodman Reservoir".to_string(),
            short_title: None,
            author: None,
            year: None,
            source_type: SourceType::Agency,
            url: url.map(str::to_string),
            description: None,
        }
    }

    /// Drives a resolver the way the component does and counts issued lookups.
    fn hover(resolver: &mut CitationResolver, lookups: &mut u32) {
        if resolver.trigger(None) {
            *lookups += 1;
        }
    }

    #[test]
    fn first_trigger_issues_one_lookup() {
        let mut resolver = CitationResolver::new("fwc-rodman");
        let mut lookups = 0;
        hover(&mut resolver, &mut lookups);
        assert_eq!(lookups, 1);
        assert!(resolver.is_loading());
    }

    #[test]
    fn triggers_while_loading_are_ignored() {
        let mut resolver = CitationResolver::new("fwc-rodman");
        let mut lookups = 0;
        for _ in 0..5 {
            hover(&mut resolver, &mut lookups);
        }
        assert_eq!(lookups, 1);
    }

    #[test]
    fn loaded_instance_never_refetches() {
        let mut resolver = CitationResolver::new("fwc-rodman");
        let mut lookups = 0;
        hover(&mut resolver, &mut lookups);
        resolver.complete(Ok(citation("fwc-rodman", None)));
        for _ in 0..3 {
            hover(&mut resolver, &mut lookups);
        }
        assert_eq!(lookups, 1);
        assert_eq!(resolver.citation().unwrap().slug, "fwc-rodman");
    }

    #[test]
    fn failure_is_terminal() {
        let mut resolver = CitationResolver::new("does-not-exist");
        let mut lookups = 0;
        hover(&mut resolver, &mut lookups);
        resolver.complete(Err(LookupError::NotFound));
        hover(&mut resolver, &mut lookups);
        hover(&mut resolver, &mut lookups);
        assert_eq!(lookups, 1);
        assert_eq!(
            resolver.state(),
            &ResolverState::Failed(LookupError::NotFound)
        );
    }

    #[test]
    fn late_outcome_after_completion_is_dropped() {
        let mut resolver = CitationResolver::new("a");
        resolver.trigger(None);
        resolver.complete(Err(LookupError::Timeout));
        resolver.complete(Ok(citation("a", None)));
        assert_eq!(resolver.state(), &ResolverState::Failed(LookupError::Timeout));
    }

    #[test]
    fn citation_for_another_slug_is_dropped() {
        let mut resolver = CitationResolver::new("b");
        resolver.trigger(None);
        resolver.complete(Ok(citation("a", None)));
        assert!(resolver.is_loading());
        assert!(resolver.citation().is_none());

        resolver.complete(Ok(citation("b", None)));
        assert_eq!(resolver.citation().unwrap().slug, "b");
    }

    #[test]
    fn cache_hit_loads_without_lookup() {
        let mut resolver = CitationResolver::new("a");
        assert!(!resolver.trigger(Some(citation("a", None))));
        assert!(resolver.citation().is_some());
    }

    #[test]
    fn href_falls_back_to_sources_anchor() {
        let mut resolver = CitationResolver::new("smith-1997");
        assert_eq!(resolver.href(), "/sources#smith-1997");

        resolver.trigger(None);
        resolver.complete(Err(LookupError::Transport("offline".to_string())));
        assert_eq!(resolver.href(), "/sources#smith-1997");
    }

    #[test]
    fn href_uses_external_url_once_resolved() {
        let mut resolver = CitationResolver::new("fwc-rodman");
        resolver.trigger(None);
        resolver.complete(Ok(citation("fwc-rodman", Some("https://myfwc.com/rodman"))));
        assert_eq!(resolver.href(), "https://myfwc.com/rodman");
        assert!(resolver.external_url().is_some());
    }

    #[test]
    fn relative_url_is_not_external() {
        let mut resolver = CitationResolver::new("local");
        resolver.trigger(None);
        resolver.complete(Ok(citation("local", Some("/docs/local.pdf"))));
        assert!(resolver.external_url().is_none());
        assert_eq!(resolver.href(), "/sources#local");
    }
}
