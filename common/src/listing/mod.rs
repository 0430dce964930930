//! View models for the sources page: type badges, source cards and the
//! ordered category sections.

pub mod badge;
pub mod card;
pub mod page;

pub use badge::{Trustworthiness, TypeBadge};
pub use card::{LinkKind, OutboundLink, SourceCardView};
pub use page::{CATEGORY_DISPLAY_ORDER, CategorySectionView, build_sections, category_anchor_id};
