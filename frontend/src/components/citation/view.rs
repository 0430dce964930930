//! View rendering for the `Citation` component.
//!
//! The trigger is always a real link (to the external URL once resolved,
//! otherwise to the source's card on the sources page), so the citation keeps
//! working without the popover. The card is rendered inline and positioned
//! with fixed coordinates after each render.

use common::api::source_anchor_href;
use common::citation::{card_content, CardContent, CardDetails, Point};
use yew::prelude::*;

use super::helpers::trigger_corner;
use super::messages::Msg;
use super::state::Citation;

pub fn view(component: &Citation, ctx: &Context<Citation>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let href = component.resolver.href();
    let external = component.resolver.external_url().is_some();
    let classes = classes!("citation-link", props.class.clone());

    if !props.show_popover {
        return html! {
            <a
                class={classes}
                href={href}
                target={external.then_some("_blank")}
                rel={external.then_some("noopener noreferrer")}
            >
                { props.children.clone() }
            </a>
        };
    }

    let onmouseenter = link.callback(|e: MouseEvent| {
        Msg::Enter(Some(Point {
            x: f64::from(e.client_x()),
            y: f64::from(e.client_y()),
        }))
    });
    let onfocus = link.callback(|e: FocusEvent| {
        Msg::Enter(e.target_dyn_into::<web_sys::Element>().map(|el| trigger_corner(&el)))
    });
    let onkeydown = link.batch_callback(|e: KeyboardEvent| (e.key() == "Escape").then_some(Msg::Dismiss));
    let open = component.popover.is_open();

    html! {
        <span class="citation">
            <a
                ref={component.trigger_ref.clone()}
                class={classes}
                href={href}
                target={external.then_some("_blank")}
                rel={external.then_some("noopener noreferrer")}
                aria-describedby={open.then(|| component.card_id.clone())}
                onmouseenter={onmouseenter}
                onmouseleave={link.callback(|_: MouseEvent| Msg::Leave)}
                onfocus={onfocus}
                onblur={link.callback(|_: FocusEvent| Msg::Leave)}
                onkeydown={onkeydown}
            >
                { props.children.clone() }
            </a>
            if open {
                <span
                    ref={component.card_ref.clone()}
                    id={component.card_id.clone()}
                    class="citation-card"
                    role="tooltip"
                    onmouseenter={link.callback(|_: MouseEvent| Msg::Enter(None))}
                    onmouseleave={link.callback(|_: MouseEvent| Msg::Leave)}
                    onfocusin={link.callback(|_: FocusEvent| Msg::Enter(None))}
                    onfocusout={link.callback(|_: FocusEvent| Msg::Leave)}
                    onkeydown={link.batch_callback(|e: KeyboardEvent| (e.key() == "Escape").then_some(Msg::Dismiss))}
                >
                    { card_body(component) }
                </span>
            }
        </span>
    }
}

fn card_body(component: &Citation) -> Html {
    match card_content(&component.resolver) {
        CardContent::Loading => html! {
            <span class="citation-card-status">{"Loading..."}</span>
        },
        CardContent::Unavailable => html! {
            <>
                <span class="citation-card-status">{"Unable to load source details"}</span>
                <a class="citation-card-link" href={source_anchor_href(component.resolver.slug())}>
                    {"View all sources"}
                </a>
            </>
        },
        CardContent::Ready(details) => ready_card(details),
    }
}

fn ready_card(details: CardDetails) -> Html {
    let external = details.link.external;
    html! {
        <>
            <span class="citation-card-type">
                <i class="material-icons">{ details.badge.icon }</i>
                <span>{ details.badge.citation_label }</span>
            </span>
            <span class="citation-card-title">{ details.title }</span>
            { for details.byline.map(|byline| html! {
                <span class="citation-card-byline">{ byline }</span>
            }) }
            { for details.description.map(|description| html! {
                <span class="citation-card-description">{ description }</span>
            }) }
            <a
                class="citation-card-link"
                href={details.link.href}
                target={external.then_some("_blank")}
                rel={external.then_some("noopener noreferrer")}
            >
                {"View Source"}
                <i class="material-icons">{"open_in_new"}</i>
            </a>
        </>
    }
}
