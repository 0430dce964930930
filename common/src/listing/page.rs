use super::card::SourceCardView;
use crate::model::source::{CategoryGroup, SourceCategory};

/// Editorial order of the category sections on the sources page.
pub const CATEGORY_DISPLAY_ORDER: [&str; 5] = [
    "manatees-habitat",
    "drawdowns-hydrology",
    "water-quality",
    "dam-history",
    "additional-resources",
];

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySectionView {
    /// `category-<slug>`
    pub anchor_id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub cards: Vec<SourceCardView>,
}

impl CategorySectionView {
    fn new(category: &SourceCategory, cards: Vec<SourceCardView>) -> Self {
        CategorySectionView {
            anchor_id: category_anchor_id(&category.slug),
            slug: category.slug.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            cards,
        }
    }
}

pub fn category_anchor_id(slug: &str) -> String {
    format!("category-{}", slug)
}

/// Arranges grouped sources into page sections.
///
/// Groups follow `display_order`; groups whose slug is not listed there come
/// after, in the order received. Empty groups are dropped, and cards keep the
/// store's `sort_order`.
pub fn build_sections(groups: &[CategoryGroup], display_order: &[&str]) -> Vec<CategorySectionView> {
    let mut ordered: Vec<&CategoryGroup> = display_order
        .iter()
        .filter_map(|slug| groups.iter().find(|g| g.category.slug == *slug))
        .collect();
    ordered.extend(
        groups
            .iter()
            .filter(|g| !display_order.iter().any(|slug| *slug == g.category.slug)),
    );

    ordered
        .into_iter()
        .filter(|g| !g.sources.is_empty())
        .map(|group| {
            let mut sources: Vec<_> = group.sources.iter().collect();
            sources.sort_by_key(|s| s.source.sort_order);
            let cards = sources
                .into_iter()
                .map(|s| SourceCardView::new(&s.source, &s.passages))
                .collect();
            CategorySectionView::new(&group.category, cards)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::SourceWithPassages;
    use crate::model::source::fixtures::{category, source};

    fn group(slug: &str, sort_order: i64, source_slugs: &[(&str, i64)]) -> CategoryGroup {
        CategoryGroup {
            category: category(slug, sort_order),
            sources: source_slugs
                .iter()
                .map(|(s, order)| SourceWithPassages {
                    source: source(s, *order),
                    passages: vec![],
                })
                .collect(),
        }
    }

    fn slugs(sections: &[CategorySectionView]) -> Vec<&str> {
        sections.iter().map(|s| s.slug.as_str()).collect()
    }

    #[test]
    fn follows_declared_order_not_store_order() {
        let groups = vec![
            group("dam-history", 1, &[("wuft-dam", 1)]),
            group("manatees-habitat", 2, &[("smith-1997", 1)]),
        ];
        let sections = build_sections(&groups, &CATEGORY_DISPLAY_ORDER);
        assert_eq!(slugs(&sections), vec!["manatees-habitat", "dam-history"]);
        assert_eq!(sections[0].anchor_id, "category-manatees-habitat");
    }

    #[test]
    fn undeclared_categories_come_last() {
        let groups = vec![
            group("field-notes", 0, &[("notes-1", 1)]),
            group("water-quality", 3, &[("sjrwmd-algae", 1)]),
        ];
        let sections = build_sections(&groups, &CATEGORY_DISPLAY_ORDER);
        assert_eq!(slugs(&sections), vec!["water-quality", "field-notes"]);
    }

    #[test]
    fn empty_category_renders_no_section() {
        let groups = vec![
            group("manatees-habitat", 1, &[("smith-1997", 1)]),
            group("dam-history", 2, &[]),
        ];
        let sections = build_sections(&groups, &CATEGORY_DISPLAY_ORDER);
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn cards_follow_sort_order() {
        let groups = vec![group(
            "water-quality",
            1,
            &[("apms-journal", 5), ("riverkeeper-algae", 1), ("sjrwmd-sav", 3)],
        )];
        let sections = build_sections(&groups, &CATEGORY_DISPLAY_ORDER);
        let ids: Vec<_> = sections[0].cards.iter().map(|c| c.anchor_id.as_str()).collect();
        assert_eq!(ids, vec!["riverkeeper-algae", "sjrwmd-sav", "apms-journal"]);
    }
}
