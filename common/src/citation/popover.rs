//! Open/close bookkeeping for the citation popover.
//!
//! Leaving the trigger or the card arms a close timer identified by a
//! [`CloseTicket`]; entering either one again before it fires invalidates the
//! ticket. The card position is captured on the first enter of an open cycle
//! and kept until the card has closed.

/// Delay between leaving the trigger/card and closing the card.
pub const CLOSE_DELAY_MS: u32 = 300;

/// Gap between the pointer and the card's top-left corner.
const CARD_OFFSET: f64 = 12.0;

/// Minimum distance kept between the card and the viewport edges.
const VIEWPORT_MARGIN: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Debug, Default)]
pub struct PopoverModel {
    open: bool,
    anchor: Option<Point>,
    pending_close: Option<u64>,
    next_ticket: u64,
}

impl PopoverModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Pointer or focus entered the trigger or the card.
    ///
    /// Cancels any pending close. `at` is the pointer position (or the
    /// trigger's corner for keyboard focus); it is only recorded when the
    /// current open cycle has no position yet. Returns `true` when the card
    /// was closed before this call.
    pub fn enter(&mut self, at: Option<Point>) -> bool {
        self.pending_close = None;
        if self.anchor.is_none() {
            self.anchor = at;
        }
        let opened = !self.open;
        self.open = true;
        opened
    }

    /// Pointer or focus left the trigger or the card. Returns the ticket the
    /// caller must hand back to [`PopoverModel::close_elapsed`] after
    /// [`CLOSE_DELAY_MS`].
    pub fn leave(&mut self) -> Option<CloseTicket> {
        if !self.open {
            return None;
        }
        self.next_ticket += 1;
        self.pending_close = Some(self.next_ticket);
        Some(CloseTicket(self.next_ticket))
    }

    /// The close timer for `ticket` fired. Closes the card only if that ticket
    /// is still the pending one; returns whether it closed.
    pub fn close_elapsed(&mut self, ticket: CloseTicket) -> bool {
        if self.pending_close != Some(ticket.0) {
            return false;
        }
        self.close_now();
        true
    }

    /// Closes immediately, e.g. on Escape.
    pub fn close_now(&mut self) {
        self.open = false;
        self.anchor = None;
        self.pending_close = None;
    }
}

/// Top-left corner for a card of `card` size (width, height) near `anchor`,
/// kept inside a viewport of `viewport` size. The card goes below-right of the
/// anchor and flips to the other side of an axis when it would overflow.
pub fn card_position(anchor: Point, card: (f64, f64), viewport: (f64, f64)) -> Point {
    let (card_w, card_h) = card;
    let (view_w, view_h) = viewport;

    let mut x = anchor.x + CARD_OFFSET;
    if x + card_w + VIEWPORT_MARGIN > view_w {
        x = anchor.x - CARD_OFFSET - card_w;
    }
    let mut y = anchor.y + CARD_OFFSET;
    if y + card_h + VIEWPORT_MARGIN > view_h {
        y = anchor.y - CARD_OFFSET - card_h;
    }

    let max_x = (view_w - card_w - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let max_y = (view_h - card_h - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    Point {
        x: x.clamp(VIEWPORT_MARGIN, max_x),
        y: y.clamp(VIEWPORT_MARGIN, max_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Point = Point { x: 100.0, y: 50.0 };
    const B: Point = Point { x: 300.0, y: 80.0 };

    #[test]
    fn enter_opens_and_captures_position() {
        let mut popover = PopoverModel::new();
        assert!(popover.enter(Some(A)));
        assert!(popover.is_open());
        assert_eq!(popover.anchor(), Some(A));
    }

    #[test]
    fn position_is_kept_for_the_whole_open_cycle() {
        let mut popover = PopoverModel::new();
        popover.enter(Some(A));
        popover.leave();
        assert!(!popover.enter(Some(B)));
        assert_eq!(popover.anchor(), Some(A));
    }

    #[test]
    fn timer_closes_when_not_reentered() {
        let mut popover = PopoverModel::new();
        popover.enter(Some(A));
        let ticket = popover.leave().unwrap();
        assert!(popover.close_elapsed(ticket));
        assert!(!popover.is_open());
        assert_eq!(popover.anchor(), None);
    }

    #[test]
    fn reentering_cancels_the_pending_close() {
        let mut popover = PopoverModel::new();
        popover.enter(Some(A));
        let ticket = popover.leave().unwrap();
        // pointer crosses the gap into the card
        popover.enter(None);
        assert!(!popover.close_elapsed(ticket));
        assert!(popover.is_open());
    }

    #[test]
    fn tabbing_from_trigger_into_card_keeps_it_open() {
        let mut popover = PopoverModel::new();
        popover.enter(Some(A));
        // trigger blur, then focusin on the card's link
        let blurred = popover.leave().unwrap();
        popover.enter(None);
        assert!(!popover.close_elapsed(blurred));
        assert!(popover.is_open());
        assert_eq!(popover.anchor(), Some(A));

        // tabbing out of the card closes it after the delay
        let left = popover.leave().unwrap();
        assert!(popover.close_elapsed(left));
        assert!(!popover.is_open());
    }

    #[test]
    fn only_the_latest_ticket_closes() {
        let mut popover = PopoverModel::new();
        popover.enter(Some(A));
        let first = popover.leave().unwrap();
        popover.enter(None);
        let second = popover.leave().unwrap();
        assert!(!popover.close_elapsed(first));
        assert!(popover.is_open());
        assert!(popover.close_elapsed(second));
    }

    #[test]
    fn new_cycle_captures_a_fresh_position() {
        let mut popover = PopoverModel::new();
        popover.enter(Some(A));
        popover.close_now();
        popover.enter(Some(B));
        assert_eq!(popover.anchor(), Some(B));
    }

    #[test]
    fn leave_while_closed_arms_nothing() {
        let mut popover = PopoverModel::new();
        assert!(popover.leave().is_none());
    }

    #[test]
    fn card_sits_below_right_of_the_pointer() {
        let at = card_position(A, (320.0, 200.0), (1280.0, 800.0));
        assert_eq!(at, Point { x: 112.0, y: 62.0 });
    }

    #[test]
    fn card_flips_near_the_bottom_right_corner() {
        let at = card_position(Point { x: 1200.0, y: 760.0 }, (320.0, 200.0), (1280.0, 800.0));
        assert_eq!(at, Point { x: 868.0, y: 548.0 });
    }

    #[test]
    fn card_is_clamped_inside_a_narrow_viewport() {
        let at = card_position(Point { x: 10.0, y: 10.0 }, (320.0, 200.0), (300.0, 600.0));
        assert_eq!(at.x, VIEWPORT_MARGIN);
    }
}
