//! Citation projections shared by every citation on the page.
//!
//! The `App` shell provides one `CitationCache` through a Yew context. A
//! citation checks it before issuing a lookup and stores what it resolved, so
//! two citations of the same source cost one request. Failures are not cached.

use common::model::source::CitationData;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct CitationCache(Rc<RefCell<HashMap<String, CitationData>>>);

impl CitationCache {
    pub fn get(&self, slug: &str) -> Option<CitationData> {
        self.0.borrow().get(slug).cloned()
    }

    pub fn insert(&self, citation: CitationData) {
        self.0.borrow_mut().insert(citation.slug.clone(), citation);
    }
}

/// Contexts re-render consumers when the value changes; the cache is one
/// shared map for the lifetime of the page.
impl PartialEq for CitationCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
