//! Runtime state of one `Citation` instance.

use super::cache::CitationCache;
use common::citation::{CitationResolver, PopoverModel};
use yew::prelude::*;

pub struct Citation {
    /// Lookup state for this instance's slug. Never reset while mounted.
    pub resolver: CitationResolver,

    pub popover: PopoverModel,

    /// Page-level cache, absent when rendered outside the `App` shell.
    pub cache: Option<CitationCache>,

    /// DOM id of the floating card, referenced by `aria-describedby`.
    pub card_id: String,

    pub trigger_ref: NodeRef,
    pub card_ref: NodeRef,
}

impl Citation {
    pub fn new(slug: &str, cache: Option<CitationCache>) -> Self {
        Self {
            resolver: CitationResolver::new(slug),
            popover: PopoverModel::new(),
            cache,
            card_id: format!("citation-card-{}", uuid::Uuid::new_v4()),
            trigger_ref: NodeRef::default(),
            card_ref: NodeRef::default(),
        }
    }
}
