//! The evidence page: long-form prose whose citations open source cards.
//!
//! The text lives in `content/evidence.md` and is compiled in. Links to
//! `/sources#<slug>` in the markdown become interactive citations, and the
//! footer lists every cited source once as a plain link.

use common::prose::{cited_slugs, parse, Block};
use yew::{html, Component, Context, Html};

use crate::components::citation::Citation;
use crate::components::prose::render_blocks;

const EVIDENCE_MD: &str = include_str!("../../content/evidence.md");

pub struct EvidencePage {
    blocks: Vec<Block>,
    cited: Vec<String>,
}

impl Component for EvidencePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let blocks = parse(EVIDENCE_MD);
        let cited = cited_slugs(&blocks);
        Self { blocks, cited }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <article class="prose">
                { render_blocks(&self.blocks) }
                if !self.cited.is_empty() {
                    <footer class="prose-sources">
                        <h2>{"Sources cited on this page"}</h2>
                        <ul>
                            { for self.cited.iter().map(|slug| html! {
                                <li>
                                    <Citation slug={slug.clone()} show_popover={false}>
                                        { slug.clone() }
                                    </Citation>
                                </li>
                            }) }
                        </ul>
                    </footer>
                }
            </article>
        }
    }
}
