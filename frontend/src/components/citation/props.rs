//! Properties for the `Citation` component.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CitationProps {
    /// Slug of the cited source.
    pub slug: AttrValue,

    /// The cited text.
    pub children: Children,

    /// `false` renders a plain link to the source with no popover and no
    /// lookup.
    #[prop_or(true)]
    pub show_popover: bool,

    #[prop_or_default]
    pub class: Classes,
}
