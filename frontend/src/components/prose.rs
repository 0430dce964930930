//! Renders parsed markdown prose, turning citation links into `Citation`s.

use common::prose::{Block, Inline};
use yew::prelude::*;

use super::citation::Citation;

pub fn render_blocks(blocks: &[Block]) -> Html {
    html! { for blocks.iter().map(render_block) }
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Paragraph(inlines) => html! { <p>{ render_inlines(inlines) }</p> },
        Block::Heading { level, content } => {
            let tag = format!("h{}", (*level).clamp(2, 6));
            html! { <@{tag}>{ render_inlines(content) }</@> }
        }
        Block::List { ordered, items } => {
            let items = items
                .iter()
                .map(|item| html! { <li>{ render_blocks(item) }</li> });
            if *ordered {
                html! { <ol>{ for items }</ol> }
            } else {
                html! { <ul>{ for items }</ul> }
            }
        }
        Block::Quote(blocks) => html! { <blockquote>{ render_blocks(blocks) }</blockquote> },
        Block::Code(code) => html! { <pre><code>{ code.clone() }</code></pre> },
        Block::Rule => html! { <hr /> },
    }
}

fn render_inlines(inlines: &[Inline]) -> Html {
    html! { for inlines.iter().map(render_inline) }
}

fn render_inline(inline: &Inline) -> Html {
    match inline {
        Inline::Text(text) => html! { { text.clone() } },
        Inline::Emphasis(children) => html! { <em>{ render_inlines(children) }</em> },
        Inline::Strong(children) => html! { <strong>{ render_inlines(children) }</strong> },
        Inline::Code(code) => html! { <code>{ code.clone() }</code> },
        Inline::Break => html! { <br /> },
        Inline::Link { href, children } => {
            let external = href.starts_with("http://") || href.starts_with("https://");
            html! {
                <a
                    href={href.clone()}
                    target={external.then_some("_blank")}
                    rel={external.then_some("noopener noreferrer")}
                >
                    { render_inlines(children) }
                </a>
            }
        }
        Inline::Citation { slug, children } => html! {
            <Citation slug={slug.clone()}>{ render_inlines(children) }</Citation>
        },
    }
}
