use super::badge::TypeBadge;
use crate::model::source::{Source, SourcePassage};

/// Passages shown on a card before the rest collapse into "+K more".
pub const VISIBLE_PASSAGES: usize = 3;

const DOI_RESOLVER: &str = "https://doi.org/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Source,
    Pdf,
    Doi,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundLink {
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetaRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassageView {
    pub quote: String,
    /// "Section 3, p. 12" style locator built from section and page number.
    pub locator: Option<String>,
    pub context: Option<String>,
    pub fragment_url: Option<String>,
}

/// Everything a source card renders, derived from one source and its passages.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCardView {
    /// Element id of the card; equals the slug so `/sources#<slug>` lands here.
    pub anchor_id: String,
    pub badge: TypeBadge,
    pub featured: bool,
    pub year: Option<i32>,
    pub title: String,
    pub metadata: Vec<MetaRow>,
    pub description: Option<String>,
    pub passages: Vec<PassageView>,
    pub hidden_passages: usize,
    pub links: Vec<OutboundLink>,
}

impl SourceCardView {
    pub fn new(source: &Source, passages: &[SourcePassage]) -> Self {
        let metadata = [
            ("Author", source.author.as_ref()),
            ("Publication", source.publication.as_ref()),
            ("DOI", source.doi.as_ref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| MetaRow {
                    label,
                    value: v.clone(),
                })
        })
        .collect();

        let mut ordered: Vec<&SourcePassage> = passages.iter().collect();
        ordered.sort_by_key(|p| p.sort_order);

        SourceCardView {
            anchor_id: source.slug.clone(),
            badge: TypeBadge::of(source.source_type),
            featured: source.is_featured,
            year: source.year,
            title: source.title.clone(),
            metadata,
            description: source.description.clone().filter(|d| !d.trim().is_empty()),
            passages: ordered
                .iter()
                .take(VISIBLE_PASSAGES)
                .map(|p| passage_view(p))
                .collect(),
            hidden_passages: ordered.len().saturating_sub(VISIBLE_PASSAGES),
            links: outbound_links(source),
        }
    }

    /// "+K more" when some passages are collapsed.
    pub fn more_passages_label(&self) -> Option<String> {
        (self.hidden_passages > 0).then(|| format!("+{} more", self.hidden_passages))
    }
}

fn passage_view(passage: &SourcePassage) -> PassageView {
    let locator = [
        passage.section.as_ref().map(|s| format!("Section {}", s)),
        passage.page_number.as_ref().map(|p| format!("p. {}", p)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    PassageView {
        quote: passage.quote_text.clone(),
        locator: (!locator.is_empty()).then(|| locator.join(", ")),
        context: passage.context.clone(),
        fragment_url: passage.fragment_url.clone(),
    }
}

/// "View Source" for `url`, "View PDF" for `pdf_url`, and a DOI resolver link.
pub fn outbound_links(source: &Source) -> Vec<OutboundLink> {
    let mut links = Vec::new();
    if let Some(url) = &source.url {
        links.push(OutboundLink {
            kind: LinkKind::Source,
            label: "View Source".to_string(),
            href: url.clone(),
        });
    }
    if let Some(pdf) = &source.pdf_url {
        links.push(OutboundLink {
            kind: LinkKind::Pdf,
            label: "View PDF".to_string(),
            href: pdf.clone(),
        });
    }
    if let Some(doi) = &source.doi {
        links.push(OutboundLink {
            kind: LinkKind::Doi,
            label: format!("DOI: {}", doi),
            href: format!("{}{}", DOI_RESOLVER, doi),
        });
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::fixtures::{passage, source};

    fn labels(view: &SourceCardView) -> Vec<&str> {
        view.links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn url_and_pdf_render_two_links() {
        let mut s = source("usfws-recovery", 1);
        s.url = Some("https://www.fws.gov/plan".to_string());
        s.pdf_url = Some("https://ecos.fws.gov/plan.pdf".to_string());
        let view = SourceCardView::new(&s, &[]);
        assert_eq!(labels(&view), vec!["View Source", "View PDF"]);
        assert_ne!(view.links[0].href, view.links[1].href);
    }

    #[test]
    fn pdf_only_renders_single_pdf_link() {
        let mut s = source("smith-1997", 1);
        s.pdf_url = Some("https://myfwc.com/media/7274/manatee_rodman.pdf".to_string());
        let view = SourceCardView::new(&s, &[]);
        assert_eq!(labels(&view), vec!["View PDF"]);
    }

    #[test]
    fn doi_adds_resolver_link_and_metadata_row() {
        let mut s = source("apms-journal", 1);
        s.doi = Some("10.1000/japm.58".to_string());
        let view = SourceCardView::new(&s, &[]);
        assert_eq!(view.links[0].href, "https://doi.org/10.1000/japm.58");
        assert_eq!(view.metadata[0].label, "DOI");
    }

    #[test]
    fn absent_metadata_is_omitted() {
        let mut s = source("wuft-dam", 1);
        s.author = Some("WUFT".to_string());
        s.publication = Some("  ".to_string());
        let view = SourceCardView::new(&s, &[]);
        assert_eq!(view.metadata.len(), 1);
        assert_eq!(view.metadata[0].value, "WUFT");
    }

    #[test]
    fn anchor_id_is_the_slug() {
        let view = SourceCardView::new(&source("fwc-rodman", 1), &[]);
        assert_eq!(view.anchor_id, "fwc-rodman");
    }

    #[test]
    fn passages_beyond_the_first_three_collapse() {
        let s = source("sjrwmd-drawdown", 1);
        let passages: Vec<_> = (1..=5)
            .rev()
            .map(|i| passage(&s, &format!("quote {}", i), i))
            .collect();
        let view = SourceCardView::new(&s, &passages);
        let quotes: Vec<_> = view.passages.iter().map(|p| p.quote.as_str()).collect();
        assert_eq!(quotes, vec!["quote 1", "quote 2", "quote 3"]);
        assert_eq!(view.more_passages_label().as_deref(), Some("+2 more"));
    }

    #[test]
    fn passage_locator_joins_section_and_page() {
        let s = source("a", 1);
        let mut p = passage(&s, "q", 1);
        p.section = Some("4.2".to_string());
        p.page_number = Some("17".to_string());
        let view = SourceCardView::new(&s, &[p]);
        assert_eq!(view.passages[0].locator.as_deref(), Some("Section 4.2, p. 17"));
        assert_eq!(view.more_passages_label(), None);
    }
}
