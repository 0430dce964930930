use common::listing::CategorySectionView;
use yew::prelude::*;

use super::source_card::source_card;

pub fn category_section(section: &CategorySectionView) -> Html {
    html! {
        <section id={section.anchor_id.clone()} class="source-category">
            <h2>{ section.name.clone() }</h2>
            if let Some(description) = &section.description {
                <p class="source-category-description">{ description.clone() }</p>
            }
            <div class="source-grid">
                { for section.cards.iter().map(source_card) }
            </div>
        </section>
    }
}

/// Links to each rendered section, in page order.
pub fn contents(sections: &[CategorySectionView]) -> Html {
    html! {
        <nav class="source-contents" aria-label="Categories">
            <h2>{"Categories"}</h2>
            <ul>
                { for sections.iter().map(|section| html! {
                    <li>
                        <a href={format!("#{}", section.anchor_id)}>{ section.name.clone() }</a>
                        <span class="source-count">{ section.cards.len() }</span>
                    </li>
                }) }
            </ul>
        </nav>
    }
}
