use common::api::SOURCES_PAGE;
use yew::{html, Component, Context, Html};

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotFoundPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <a href="/">{"Back to the evidence"}</a>
                {" · "}
                <a href={SOURCES_PAGE}>{"Browse all sources"}</a>
            </div>
        }
    }
}
