use common::citation::{CloseTicket, LookupError, Point};
use common::model::source::CitationData;

pub enum Msg {
    /// Pointer or focus entered the trigger (with a position) or the card.
    Enter(Option<Point>),
    /// Pointer or focus left the trigger or the card.
    Leave,
    CloseElapsed(CloseTicket),
    /// Escape pressed while the card is open.
    Dismiss,
    /// Outcome of the lookup issued for `slug`.
    Resolved {
        slug: String,
        outcome: Result<CitationData, LookupError>,
    },
}
