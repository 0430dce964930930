//! Building blocks of the sources page.
//!
//! - `source_card`, `category_section`, `legend`: render the view models from
//!   `common::listing` as HTML.
//! - `anchor`: drives `common::anchor::AnchorNavigator` against the live DOM.

pub mod anchor;
pub mod category_section;
pub mod legend;
pub mod source_card;
