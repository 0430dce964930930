//! DOM and network helpers for the `Citation` component.

use common::api::citation_path;
use common::citation::{card_position, LookupError, Point, LOOKUP_TIMEOUT_MS};
use common::model::source::CitationData;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlElement;

use super::state::Citation;

/// Fetches the citation projection for `slug`, giving up after
/// `LOOKUP_TIMEOUT_MS`.
pub async fn fetch_citation(slug: &str) -> Result<CitationData, LookupError> {
    let encoded = String::from(js_sys::encode_uri_component(slug));
    let url = citation_path(&encoded);

    let lookup = Box::pin(request_citation(&url));
    let timeout = Box::pin(TimeoutFuture::new(LOOKUP_TIMEOUT_MS));
    let result = match select(lookup, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(LookupError::Timeout),
    };
    result
}

async fn request_citation(url: &str) -> Result<CitationData, LookupError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LookupError::Transport(e.to_string()))?;
    match response.status() {
        200 => response
            .json::<CitationData>()
            .await
            .map_err(|e| LookupError::Transport(e.to_string())),
        404 => Err(LookupError::NotFound),
        status => Err(LookupError::Transport(format!("HTTP {}", status))),
    }
}

/// Bottom-left corner of the trigger, where keyboard focus anchors the card.
pub fn trigger_corner(element: &web_sys::Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point {
        x: rect.left(),
        y: rect.bottom(),
    }
}

/// Moves the open card next to its anchor point, inside the viewport.
pub fn place_card(component: &Citation) {
    let Some(card) = component.card_ref.cast::<HtmlElement>() else {
        return;
    };
    let anchor = component.popover.anchor().or_else(|| {
        component
            .trigger_ref
            .cast::<web_sys::Element>()
            .map(|trigger| trigger_corner(&trigger))
    });
    let (Some(anchor), Some(viewport)) = (anchor, viewport_size()) else {
        return;
    };

    let rect = card.get_bounding_client_rect();
    let position = card_position(anchor, (rect.width(), rect.height()), viewport);
    let style = card.style();
    style.set_property("left", &format!("{}px", position.x)).ok();
    style.set_property("top", &format!("{}px", position.y)).ok();
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}
