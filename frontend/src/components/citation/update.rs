//! Update function for the `Citation` component.
//!
//! Returns `true` when the trigger or the card must re-render. Arming the
//! close timer renders nothing, so `Leave` returns `false`.

use common::citation::CLOSE_DELAY_MS;
use gloo_console::warn;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::fetch_citation;
use super::messages::Msg;
use super::state::Citation;

pub fn update(component: &mut Citation, ctx: &Context<Citation>, msg: Msg) -> bool {
    match msg {
        Msg::Enter(at) => {
            component.popover.enter(at);
            let cached = component
                .cache
                .as_ref()
                .and_then(|cache| cache.get(component.resolver.slug()));
            if component.resolver.trigger(cached) {
                let slug = component.resolver.slug().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = fetch_citation(&slug).await;
                    link.send_message(Msg::Resolved { slug, outcome });
                });
            }
            true
        }
        Msg::Leave => {
            if let Some(ticket) = component.popover.leave() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(CLOSE_DELAY_MS).await;
                    link.send_message(Msg::CloseElapsed(ticket));
                });
            }
            false
        }
        Msg::CloseElapsed(ticket) => component.popover.close_elapsed(ticket),
        Msg::Dismiss => {
            let was_open = component.popover.is_open();
            component.popover.close_now();
            was_open
        }
        Msg::Resolved { slug, outcome } => {
            match &outcome {
                Ok(citation) => {
                    if let Some(cache) = &component.cache {
                        cache.insert(citation.clone());
                    }
                }
                Err(e) => warn!(format!("Citation '{}' unavailable: {}", slug, e)),
            }
            // The slug prop may have changed while the lookup was in flight.
            if slug != component.resolver.slug() {
                return false;
            }
            component.resolver.complete(outcome);
            true
        }
    }
}
