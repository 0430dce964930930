//! What the floating citation card shows for each resolver state.

use super::resolver::{CitationResolver, ResolverState};
use crate::listing::badge::TypeBadge;

/// Longest description shown in a card, in characters.
pub const CARD_DESCRIPTION_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq)]
pub enum CardContent {
    /// Nothing requested yet; the card shows the loading placeholder too.
    Loading,
    /// Lookup failed or the source does not exist.
    Unavailable,
    Ready(CardDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    pub badge: TypeBadge,
    pub title: String,
    /// `author • year`, whichever are present.
    pub byline: Option<String>,
    pub description: Option<String>,
    pub link: CardLink,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardLink {
    pub href: String,
    /// External links open in a new browsing context.
    pub external: bool,
}

pub fn card_content(resolver: &CitationResolver) -> CardContent {
    match resolver.state() {
        ResolverState::Idle | ResolverState::Loading => CardContent::Loading,
        ResolverState::Failed(_) => CardContent::Unavailable,
        ResolverState::Loaded(citation) => {
            let byline = [
                citation.author.clone(),
                citation.year.map(|y| y.to_string()),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

            CardContent::Ready(CardDetails {
                badge: TypeBadge::of(citation.source_type),
                title: citation
                    .short_title
                    .clone()
                    .unwrap_or_else(|| citation.title.clone()),
                byline: (!byline.is_empty()).then(|| byline.join(" • ")),
                description: citation
                    .description
                    .as_deref()
                    .map(|d| truncate_on_word(d, CARD_DESCRIPTION_CHARS)),
                link: CardLink {
                    href: resolver.href(),
                    external: resolver.external_url().is_some(),
                },
            })
        }
    }
}

/// Cuts `text` to at most `max_chars` characters, backing off to the last
/// word boundary and appending an ellipsis when anything was removed.
pub fn truncate_on_word(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let head = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", head.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '.'))
}
