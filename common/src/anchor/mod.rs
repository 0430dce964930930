//! Scroll-to-fragment with a transient highlight.
//!
//! The navigator owns the sequence and the host owns the clock: after
//! [`AnchorNavigator::navigate`] the host waits for the returned [`Next`] step
//! and calls back with the current time. Scroll completion is detected by
//! sampling the target's viewport offset until it stops moving, with an upper
//! bound for pages that never settle.

/// Class applied to the target while it is highlighted.
pub const HIGHLIGHT_CLASS: &str = "source-highlighted";

/// Offsets closer than this (in CSS pixels) count as unchanged.
const OFFSET_EPSILON: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTiming {
    /// Interval between two offset samples while scrolling.
    pub sample_interval_ms: u32,
    /// Consecutive unchanged samples that mark the scroll as finished.
    pub stable_samples: u32,
    /// Upper bound on the wait for the scroll to finish.
    pub max_scroll_wait_ms: u32,
    /// How long the highlight stays on.
    pub highlight_ms: u32,
}

impl Default for AnchorTiming {
    fn default() -> Self {
        AnchorTiming {
            sample_interval_ms: 50,
            stable_samples: 2,
            max_scroll_wait_ms: 1200,
            highlight_ms: 2000,
        }
    }
}

/// The DOM operations the navigator needs. Ids are element ids without `#`.
pub trait HighlightSurface {
    fn contains(&self, id: &str) -> bool;
    fn scroll_into_view(&mut self, id: &str);
    /// Distance of the element's top edge from the viewport top, if it exists.
    fn offset_top(&self, id: &str) -> Option<f64>;
    fn add_class(&mut self, id: &str, class: &str);
    fn remove_class(&mut self, id: &str, class: &str);
}

/// What the host must wait for before calling the navigator again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Next {
    /// Next animation frame, then [`AnchorNavigator::on_frame`].
    Frame,
    /// A timer of this many milliseconds, then [`AnchorNavigator::on_timer`].
    After(u32),
    /// Sequence finished; nothing to schedule.
    Done,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    AwaitingFrame {
        target: String,
    },
    Scrolling {
        target: String,
        started_at: f64,
        last_top: Option<f64>,
        stable: u32,
    },
    Highlighted {
        target: String,
        since: f64,
    },
}

#[derive(Debug)]
pub struct AnchorNavigator {
    phase: Phase,
    timing: AnchorTiming,
    generation: u64,
}

impl Default for AnchorNavigator {
    fn default() -> Self {
        Self::new(AnchorTiming::default())
    }
}

impl AnchorNavigator {
    pub fn new(timing: AnchorTiming) -> Self {
        AnchorNavigator {
            phase: Phase::Idle,
            timing,
            generation: 0,
        }
    }

    /// Bumped by every [`AnchorNavigator::navigate`]; hosts compare it to drop
    /// callbacks scheduled for a superseded navigation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Starts a sequence for `fragment` (with or without the leading `#`),
    /// abandoning the one in flight and clearing its highlight.
    pub fn navigate(&mut self, fragment: &str, surface: &mut impl HighlightSurface) -> Next {
        self.generation += 1;
        if let Phase::Highlighted { target, .. } = &self.phase {
            surface.remove_class(target, HIGHLIGHT_CLASS);
        }
        let target = fragment.strip_prefix('#').unwrap_or(fragment);
        if target.is_empty() {
            self.phase = Phase::Idle;
            return Next::Done;
        }
        self.phase = Phase::AwaitingFrame {
            target: target.to_string(),
        };
        Next::Frame
    }

    /// Layout is complete: scroll the target into view, or give up quietly if
    /// no element carries that id.
    pub fn on_frame(&mut self, now_ms: f64, surface: &mut impl HighlightSurface) -> Next {
        let Phase::AwaitingFrame { target } = &self.phase else {
            return self.pending();
        };
        if !surface.contains(target) {
            self.phase = Phase::Idle;
            return Next::Done;
        }
        surface.scroll_into_view(target);
        self.phase = Phase::Scrolling {
            target: target.clone(),
            started_at: now_ms,
            last_top: None,
            stable: 0,
        };
        Next::After(self.timing.sample_interval_ms)
    }

    pub fn on_timer(&mut self, now_ms: f64, surface: &mut impl HighlightSurface) -> Next {
        match &mut self.phase {
            Phase::Scrolling {
                target,
                started_at,
                last_top,
                stable,
            } => {
                let Some(top) = surface.offset_top(target) else {
                    self.phase = Phase::Idle;
                    return Next::Done;
                };
                match last_top {
                    Some(prev) if (*prev - top).abs() < OFFSET_EPSILON => *stable += 1,
                    _ => *stable = 0,
                }
                *last_top = Some(top);

                let settled = *stable >= self.timing.stable_samples;
                let timed_out = now_ms - *started_at >= f64::from(self.timing.max_scroll_wait_ms);
                if !settled && !timed_out {
                    return Next::After(self.timing.sample_interval_ms);
                }
                let target = std::mem::take(target);
                surface.add_class(&target, HIGHLIGHT_CLASS);
                self.phase = Phase::Highlighted {
                    target,
                    since: now_ms,
                };
                Next::After(self.timing.highlight_ms)
            }
            Phase::Highlighted { target, since } => {
                let elapsed = now_ms - *since;
                let total = f64::from(self.timing.highlight_ms);
                if elapsed < total {
                    return Next::After((total - elapsed).ceil() as u32);
                }
                surface.remove_class(target, HIGHLIGHT_CLASS);
                self.phase = Phase::Idle;
                Next::Done
            }
            _ => self.pending(),
        }
    }

    fn pending(&self) -> Next {
        match self.phase {
            Phase::Idle => Next::Done,
            Phase::AwaitingFrame { .. } => Next::Frame,
            Phase::Scrolling { .. } => Next::After(self.timing.sample_interval_ms),
            Phase::Highlighted { .. } => Next::After(self.timing.highlight_ms),
        }
    }
}
