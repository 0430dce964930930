//! The sources page: every categorized source, grouped into sections in
//! editorial order, with a contents list and the source-type legend.
//!
//! On first render the grouped listing is fetched from
//! `/api/sources/grouped`. Once the sections are in the DOM the page scrolls to
//! the fragment of the current URL (a source slug or `category-<slug>`), and
//! it does the same on every later `hashchange`.

use common::api::SOURCES_API;
use common::listing::{build_sections, CategorySectionView, CATEGORY_DISPLAY_ORDER};
use common::model::source::CategoryGroup;
use gloo_console::error;
use gloo_net::http::Request;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::sources::anchor::AnchorDriver;
use crate::components::sources::category_section::{category_section, contents};
use crate::components::sources::legend::legend;

pub enum Msg {
    Loaded(Vec<CategoryGroup>),
    Failed(String),
}

enum Listing {
    Loading,
    Ready(Vec<CategorySectionView>),
    Failed,
}

pub struct SourcesPage {
    listing: Listing,
    anchors: AnchorDriver,
    /// Set when new sections arrived and the fragment still has to be applied.
    scroll_pending: bool,
    hash_listener: Option<Closure<dyn Fn()>>,
}

impl Component for SourcesPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let url = format!("{}/grouped", SOURCES_API);
            let response = Request::get(&url).send().await;
            match response {
                Ok(resp) if resp.ok() => match resp.json::<Vec<CategoryGroup>>().await {
                    Ok(groups) => link.send_message(Msg::Loaded(groups)),
                    Err(e) => link.send_message(Msg::Failed(e.to_string())),
                },
                Ok(resp) => link.send_message(Msg::Failed(format!("HTTP {}", resp.status()))),
                Err(e) => link.send_message(Msg::Failed(e.to_string())),
            }
        });

        Self {
            listing: Listing::Loading,
            anchors: AnchorDriver::default(),
            scroll_pending: false,
            hash_listener: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(groups) => {
                self.listing = Listing::Ready(build_sections(&groups, &CATEGORY_DISPLAY_ORDER));
                self.scroll_pending = true;
            }
            Msg::Failed(reason) => {
                error!(format!("Loading sources failed: {}", reason));
                self.listing = Listing::Failed;
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.listen_for_hash_changes();
        }
        if self.scroll_pending {
            self.scroll_pending = false;
            self.anchors.navigate_to_location();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(window)) = (self.hash_listener.take(), web_sys::window()) {
            window
                .remove_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
                .ok();
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.listing {
            Listing::Loading => html! { <p class="sources-status">{"Loading sources..."}</p> },
            Listing::Failed => html! {
                <p class="sources-status">{"Sources are unavailable right now. Please try again later."}</p>
            },
            Listing::Ready(sections) if sections.is_empty() => html! {
                <p class="sources-status">{"No sources have been published yet."}</p>
            },
            Listing::Ready(sections) => html! {
                <div class="sources-layout">
                    <div class="sources-sidebar">
                        { contents(sections) }
                        { legend() }
                    </div>
                    <div class="sources-sections">
                        { for sections.iter().map(category_section) }
                    </div>
                </div>
            },
        };

        html! {
            <div class="sources-page">
                <h1>{"Sources & References"}</h1>
                <p class="sources-intro">
                    {"Every claim on this site is backed by the documents below. \
                      Agency reports and peer-reviewed research come first; advocacy \
                      and news coverage provide context."}
                </p>
                { body }
            </div>
        }
    }
}

impl SourcesPage {
    fn listen_for_hash_changes(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let anchors = self.anchors.clone();
        let listener = Closure::<dyn Fn()>::new(move || anchors.navigate_to_location());
        if window
            .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            self.hash_listener = Some(listener);
        }
    }
}
