use common::listing::TypeBadge;
use yew::prelude::*;

/// The six source types with their trustworthiness and what they cover.
pub fn legend() -> Html {
    html! {
        <aside class="source-legend">
            <h2>{"Source types"}</h2>
            <ul>
                { for TypeBadge::legend().into_iter().map(|badge| html! {
                    <li>
                        <span class={classes!("source-badge", badge.css_class)}>
                            <i class="material-icons">{ badge.icon }</i>
                            { badge.label }
                        </span>
                        <span class={classes!("source-trust", badge.trust.css_class())}>
                            { badge.trust.label() }
                        </span>
                        <p>{ badge.description }</p>
                        <p class="source-legend-examples">{ badge.examples }</p>
                    </li>
                }) }
            </ul>
        </aside>
    }
}
