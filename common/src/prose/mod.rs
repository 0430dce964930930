//! Markdown prose with inline citations.
//!
//! Content pages are written in markdown and cite sources with ordinary links
//! to `/sources#<slug>`. [`parse`] turns the text into a small block tree where
//! those links become [`Inline::Citation`] so the browser can render them as
//! interactive citations. Raw HTML is dropped.

use crate::api::slug_from_anchor_href;
use pulldown_cmark::{Event, Parser, Tag, TextMergeStream};

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    List { ordered: bool, items: Vec<Vec<Block>> },
    Quote(Vec<Block>),
    Code(String),
    Rule,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Code(String),
    Link { href: String, children: Vec<Inline> },
    Citation { slug: String, children: Vec<Inline> },
    Break,
}

pub fn parse(markdown: &str) -> Vec<Block> {
    let mut events = TextMergeStream::new(Parser::new(markdown));
    parse_blocks(&mut events)
}

/// Slugs cited anywhere in `blocks`, first occurrence order, no duplicates.
pub fn cited_slugs(blocks: &[Block]) -> Vec<String> {
    let mut slugs = Vec::new();
    for block in blocks {
        collect_block(block, &mut slugs);
    }
    slugs
}

fn collect_block(block: &Block, slugs: &mut Vec<String>) {
    match block {
        Block::Paragraph(inlines) | Block::Heading { content: inlines, .. } => {
            collect_inlines(inlines, slugs)
        }
        Block::List { items, .. } => items
            .iter()
            .flatten()
            .for_each(|b| collect_block(b, slugs)),
        Block::Quote(blocks) => blocks.iter().for_each(|b| collect_block(b, slugs)),
        Block::Code(_) | Block::Rule => {}
    }
}

fn collect_inlines(inlines: &[Inline], slugs: &mut Vec<String>) {
    for inline in inlines {
        match inline {
            Inline::Citation { slug, children } => {
                if !slugs.contains(slug) {
                    slugs.push(slug.clone());
                }
                collect_inlines(children, slugs);
            }
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Link { children, .. } => collect_inlines(children, slugs),
            Inline::Text(_) | Inline::Code(_) | Inline::Break => {}
        }
    }
}

/// Reads blocks until the end tag of the enclosing container (or the end of
/// input). Inline content directly inside a container, as in tight list
/// items, is gathered into a paragraph.
fn parse_blocks<'a>(events: &mut impl Iterator<Item = Event<'a>>) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut loose: Vec<Inline> = Vec::new();

    while let Some(event) = events.next() {
        match event {
            Event::Start(tag) if is_inline(&tag) => loose.extend(inline_tag(tag, events)),
            Event::Start(tag) => {
                if !loose.is_empty() {
                    blocks.push(Block::Paragraph(std::mem::take(&mut loose)));
                }
                if let Some(block) = block_tag(tag, events) {
                    blocks.push(block);
                }
            }
            Event::End(_) => break,
            Event::Rule => blocks.push(Block::Rule),
            other => {
                if let Some(inline) = inline_leaf(other) {
                    loose.push(inline);
                }
            }
        }
    }

    if !loose.is_empty() {
        blocks.push(Block::Paragraph(loose));
    }
    blocks
}

fn block_tag<'a>(tag: Tag<'a>, events: &mut impl Iterator<Item = Event<'a>>) -> Option<Block> {
    match tag {
        Tag::Paragraph => Some(Block::Paragraph(parse_inlines(events))),
        Tag::Heading { level, .. } => Some(Block::Heading {
            level: level as u8,
            content: parse_inlines(events),
        }),
        Tag::BlockQuote(_) => Some(Block::Quote(parse_blocks(events))),
        Tag::List(start) => Some(Block::List {
            ordered: start.is_some(),
            items: parse_items(events),
        }),
        Tag::CodeBlock(_) => {
            let mut code = String::new();
            for event in events.by_ref() {
                match event {
                    Event::Text(text) => code.push_str(&text),
                    Event::End(_) => break,
                    _ => {}
                }
            }
            Some(Block::Code(code))
        }
        _ => {
            skip_container(events);
            None
        }
    }
}

fn parse_items<'a>(events: &mut impl Iterator<Item = Event<'a>>) -> Vec<Vec<Block>> {
    let mut items = Vec::new();
    while let Some(event) = events.next() {
        match event {
            Event::Start(Tag::Item) => items.push(parse_blocks(events)),
            Event::End(_) => break,
            _ => {}
        }
    }
    items
}

fn parse_inlines<'a>(events: &mut impl Iterator<Item = Event<'a>>) -> Vec<Inline> {
    let mut inlines = Vec::new();
    while let Some(event) = events.next() {
        match event {
            Event::Start(tag) => inlines.extend(inline_tag(tag, events)),
            Event::End(_) => break,
            other => inlines.extend(inline_leaf(other)),
        }
    }
    inlines
}

fn inline_tag<'a>(tag: Tag<'a>, events: &mut impl Iterator<Item = Event<'a>>) -> Vec<Inline> {
    match tag {
        Tag::Emphasis => vec![Inline::Emphasis(parse_inlines(events))],
        Tag::Strong => vec![Inline::Strong(parse_inlines(events))],
        Tag::Link { dest_url, .. } => {
            let children = parse_inlines(events);
            vec![match slug_from_anchor_href(&dest_url) {
                Some(slug) => Inline::Citation {
                    slug: slug.to_string(),
                    children,
                },
                None => Inline::Link {
                    href: dest_url.to_string(),
                    children,
                },
            }]
        }
        // strikethrough, images and the like keep their text only
        _ => parse_inlines(events),
    }
}

fn inline_leaf(event: Event<'_>) -> Option<Inline> {
    match event {
        Event::Text(text) => Some(Inline::Text(text.to_string())),
        Event::Code(code) => Some(Inline::Code(code.to_string())),
        Event::SoftBreak => Some(Inline::Text(" ".to_string())),
        Event::HardBreak => Some(Inline::Break),
        _ => None,
    }
}

fn is_inline(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

/// Consumes events up to and including the end of a container we do not
/// render (tables, footnotes, raw HTML blocks).
fn skip_container<'a>(events: &mut impl Iterator<Item = Event<'a>>) {
    let mut depth = 1usize;
    for event in events.by_ref() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn sources_links_become_citations() {
        let blocks = parse("Manatees need warm water [(Taylor)](/sources#marine-mammal).");
        assert_eq!(
            blocks,
            vec![Block::Paragraph(vec![
                text("Manatees need warm water "),
                Inline::Citation {
                    slug: "marine-mammal".to_string(),
                    children: vec![text("(Taylor)")],
                },
                text("."),
            ])]
        );
    }

    #[test]
    fn other_links_stay_links() {
        let blocks = parse("See [the FAQ](https://www.floridastateparks.org/faq).");
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert!(matches!(&inlines[1], Inline::Link { href, .. } if href == "https://www.floridastateparks.org/faq"));
    }

    #[test]
    fn headings_lists_and_emphasis() {
        let md = "## Water quality\n\n- **Algae** blooms [cited](/sources#sjrwmd-algae)\n- *Tannins*\n";
        let blocks = parse(md);
        assert_eq!(
            blocks[0],
            Block::Heading {
                level: 2,
                content: vec![text("Water quality")]
            }
        );
        let Block::List { ordered, items } = &blocks[1] else {
            panic!("expected a list");
        };
        assert!(!ordered);
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[1],
            vec![Block::Paragraph(vec![Inline::Emphasis(vec![text("Tannins")])])]
        );
    }

    #[test]
    fn cited_slugs_are_unique_and_ordered() {
        let md = "A [1](/sources#b). B [2](/sources#a).\n\n> Quote [3](/sources#b)";
        assert_eq!(cited_slugs(&parse(md)), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn raw_html_is_dropped() {
        let blocks = parse("Hello <script>alert(1)</script> world");
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert!(inlines.iter().all(|i| !matches!(i, Inline::Text(t) if t.contains("script"))));
    }

    #[test]
    fn empty_anchor_is_a_plain_link() {
        let blocks = parse("[all sources](/sources#)");
        let Block::Paragraph(inlines) = &blocks[0] else {
            panic!("expected a paragraph");
        };
        assert!(matches!(&inlines[0], Inline::Link { .. }));
    }
}
