//! Inline citations: lookup state, popover open/close model and the card
//! content derived from them.

pub mod card;
pub mod popover;
pub mod resolver;

pub use card::{CardContent, CardDetails, CardLink, card_content};
pub use popover::{CLOSE_DELAY_MS, CloseTicket, Point, PopoverModel, card_position};
pub use resolver::{CitationResolver, LOOKUP_TIMEOUT_MS, LookupError, ResolverState};
