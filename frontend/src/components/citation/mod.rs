//! Inline citation: cited text that reveals a source card on hover or focus.
//!
//! The component wires the shared interaction models from `common::citation`
//! into Yew:
//! - `CitationResolver` performs at most one lookup per mounted instance, on
//!   the first hover or focus, consulting the page cache first.
//! - `PopoverModel` opens the card immediately and closes it
//!   `CLOSE_DELAY_MS` after the pointer or focus has left both the trigger and
//!   the card.
//!
//! With `show_popover = false` the citation is a plain link and never issues a
//! lookup.

use yew::prelude::*;

mod cache;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use cache::CitationCache;
pub use messages::Msg;
pub use props::CitationProps;
pub use state::Citation;

impl Component for Citation {
    type Message = Msg;
    type Properties = CitationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let cache = ctx
            .link()
            .context::<CitationCache>(Callback::noop())
            .map(|(cache, _)| cache);
        Citation::new(&ctx.props().slug, cache)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().slug != old_props.slug {
            self.resolver = common::citation::CitationResolver::new(ctx.props().slug.as_str());
            self.popover.close_now();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.popover.is_open() {
            helpers::place_card(self);
        }
    }
}
