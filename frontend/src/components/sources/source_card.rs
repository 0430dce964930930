//! One source, as a card addressable by `/sources#<slug>`.

use common::listing::card::{LinkKind, MetaRow, PassageView};
use common::listing::SourceCardView;
use yew::prelude::*;

pub fn source_card(card: &SourceCardView) -> Html {
    html! {
        <article id={card.anchor_id.clone()} class="source-card">
            <div class="source-card-header">
                <span class={classes!("source-badge", card.badge.css_class)}>
                    <i class="material-icons">{ card.badge.icon }</i>
                    { card.badge.label }
                </span>
                if card.featured {
                    <span class="source-featured">{"Featured"}</span>
                }
                if let Some(year) = card.year {
                    <span class="source-year">{ year }</span>
                }
            </div>

            <h3 class="source-title">{ card.title.clone() }</h3>

            if !card.metadata.is_empty() {
                <dl class="source-meta">
                    { for card.metadata.iter().map(meta_row) }
                </dl>
            }

            if let Some(description) = &card.description {
                <p class="source-description"><em>{ description.clone() }</em></p>
            }

            if !card.passages.is_empty() {
                <div class="source-passages">
                    <h4>{"Key passages"}</h4>
                    { for card.passages.iter().map(passage) }
                    if let Some(more) = card.more_passages_label() {
                        <p class="source-passages-more">{ more }</p>
                    }
                </div>
            }

            <div class="source-links">
                { for card.links.iter().map(|link| {
                    let icon = match link.kind {
                        LinkKind::Source => "open_in_new",
                        LinkKind::Pdf => "picture_as_pdf",
                        LinkKind::Doi => "link",
                    };
                    html! {
                        <a href={link.href.clone()} target="_blank" rel="noopener noreferrer">
                            <i class="material-icons">{ icon }</i>
                            { link.label.clone() }
                        </a>
                    }
                }) }
            </div>
        </article>
    }
}

fn meta_row(row: &MetaRow) -> Html {
    html! {
        <>
            <dt>{ row.label }</dt>
            <dd>{ row.value.clone() }</dd>
        </>
    }
}

fn passage(passage: &PassageView) -> Html {
    html! {
        <blockquote class="source-passage">
            <p>{ format!("\u{201c}{}\u{201d}", passage.quote) }</p>
            if let Some(locator) = &passage.locator {
                <cite>{ locator.clone() }</cite>
            }
            if let Some(context) = &passage.context {
                <p class="source-passage-context">{ context.clone() }</p>
            }
            if let Some(url) = &passage.fragment_url {
                <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"Open at passage"}</a>
            }
        </blockquote>
    }
}
