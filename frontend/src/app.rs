//! Application shell: site header plus the page selected by the current path.
//!
//! Routing is by `window.location.pathname` only; every page is a full load
//! served by the backend's `index.html` fallback. The shell also owns the
//! page-scoped citation cache and provides it to every `Citation` below it.

use crate::components::citation::CitationCache;
use crate::pages::evidence::EvidencePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::sources::SourcesPage;
use common::api::SOURCES_PAGE;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Route {
    Evidence,
    Sources,
    NotFound,
}

impl Route {
    fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/evidence" => Route::Evidence,
            p if p == SOURCES_PAGE => Route::Sources,
            _ => Route::NotFound,
        }
    }

    fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }
}

pub struct App {
    route: Route,
    cache: CitationCache,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::current(),
            cache: CitationCache::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.route {
            Route::Evidence => html! { <EvidencePage /> },
            Route::Sources => html! { <SourcesPage /> },
            Route::NotFound => html! { <NotFoundPage /> },
        };

        html! {
            <ContextProvider<CitationCache> context={self.cache.clone()}>
                <header class="site-header">
                    <a class="site-title" href="/">{"Free the Ocklawaha"}</a>
                    <nav>
                        <a href="/evidence">{"Evidence"}</a>
                        <a href={SOURCES_PAGE}>{"Sources"}</a>
                    </nav>
                </header>
                <main class="site-main">{ page }</main>
            </ContextProvider<CitationCache>>
        }
    }
}
