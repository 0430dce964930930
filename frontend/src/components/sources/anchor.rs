//! Scroll-to-source with a transient highlight, on page load and on every
//! `hashchange`.
//!
//! `AnchorDriver` runs an `AnchorNavigator` against the document: animation
//! frames come from `requestAnimationFrame`, timers from `gloo-timers`, and
//! the clock from `Date.now()`. Each scheduled callback carries the navigator
//! generation it was scheduled for and is dropped if a newer navigation has
//! started since.

use common::anchor::{AnchorNavigator, HighlightSurface, Next};
use gloo_timers::future::TimeoutFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::platform::spawn_local;

/// The live document as a `HighlightSurface`.
struct DomSurface;

impl DomSurface {
    fn element(id: &str) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }
}

impl HighlightSurface for DomSurface {
    fn contains(&self, id: &str) -> bool {
        Self::element(id).is_some()
    }

    fn scroll_into_view(&mut self, id: &str) {
        if let Some(element) = Self::element(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            options.set_inline(ScrollLogicalPosition::Nearest);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        Self::element(id).map(|element| element.get_bounding_client_rect().top())
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(element) = Self::element(id) {
            element.class_list().add_1(class).ok();
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(element) = Self::element(id) {
            element.class_list().remove_1(class).ok();
        }
    }
}

#[derive(Clone, Default)]
pub struct AnchorDriver {
    navigator: Rc<RefCell<AnchorNavigator>>,
}

impl AnchorDriver {
    /// Navigates to the fragment of the current location, if any.
    pub fn navigate_to_location(&self) {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        if !hash.is_empty() {
            self.navigate(&hash);
        }
    }

    pub fn navigate(&self, fragment: &str) {
        let (next, generation) = {
            let mut navigator = self.navigator.borrow_mut();
            let next = navigator.navigate(fragment, &mut DomSurface);
            (next, navigator.generation())
        };
        self.schedule(next, generation);
    }

    fn schedule(&self, next: Next, generation: u64) {
        match next {
            Next::Done => {}
            Next::Frame => {
                let driver = self.clone();
                let callback = Closure::once_into_js(move || {
                    driver.step(generation, |navigator, now| {
                        navigator.on_frame(now, &mut DomSurface)
                    });
                });
                if let Some(window) = web_sys::window() {
                    window
                        .request_animation_frame(callback.unchecked_ref())
                        .ok();
                }
            }
            Next::After(ms) => {
                let driver = self.clone();
                spawn_local(async move {
                    TimeoutFuture::new(ms).await;
                    driver.step(generation, |navigator, now| {
                        navigator.on_timer(now, &mut DomSurface)
                    });
                });
            }
        }
    }

    fn step(&self, generation: u64, advance: impl FnOnce(&mut AnchorNavigator, f64) -> Next) {
        let next = {
            let mut navigator = self.navigator.borrow_mut();
            if navigator.generation() != generation {
                return;
            }
            advance(&mut *navigator, js_sys::Date::now())
        };
        self.schedule(next, generation);
    }
}
