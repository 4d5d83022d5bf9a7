//! Drag gesture tracker - an explicit state machine over mouse events
//!
//! At most one drag session exists at a time, owned by [`DragTracker`].
//! A press grabs a card, movement past the deadzone promotes the grab to
//! a drag, and release either yields a drop proposal or (for taps) nothing.
//! The tracker knows nothing about matching rules beyond "matched cards
//! cannot be grabbed"; resolving a drop belongs to the round.

use crate::types::{CardId, Point, DRAG_DEADZONE, EDGE_SCROLL_MARGIN};

/// Scrollable viewport the drag happens inside, captured per event.
#[derive(Debug, Clone, Copy)]
pub struct ViewRegion {
    /// First row of the scroll area.
    pub top: u16,
    /// One past the last row of the scroll area.
    pub bottom: u16,
    pub scroll: u16,
    pub max_scroll: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Pressed on a card but still within the deadzone.
    Grabbed,
    /// Past the deadzone; the card visibly follows the pointer.
    Dragging,
}

/// Edge-scroll anchor, captured once when the pointer enters a margin.
/// Scrolling is computed relative to this anchor rather than re-deriving
/// from the live scroll offset, so the offset cannot feed back into
/// itself and oscillate.
#[derive(Debug, Clone, Copy)]
struct EdgeAnchor {
    dy_at_engage: i32,
    scroll_at_engage: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    item: CardId,
    origin: Point,
    at: Point,
    phase: DragPhase,
    edge_anchor: Option<EdgeAnchor>,
}

impl DragSession {
    pub fn item(&self) -> CardId {
        self.item
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Last known pointer position.
    pub fn position(&self) -> Point {
        self.at
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Pointer displacement from the grab point, in cells.
    pub fn offset(&self) -> (i32, i32) {
        (
            self.at.x as i32 - self.origin.x as i32,
            self.at.y as i32 - self.origin.y as i32,
        )
    }
}

/// What a pointer-move did to the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragUpdate {
    /// Displacement from the grab point.
    pub offset: (i32, i32),
    /// New scroll offset requested by edge scrolling, if any.
    pub scroll_to: Option<u16>,
}

/// Release past the deadzone: the card, and where it was let go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropProposal {
    pub item: CardId,
    pub at: Point,
}

#[derive(Debug, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// While a session exists, ordinary wheel scrolling is suppressed so
    /// edge scrolling is the only thing moving the viewport.
    pub fn scroll_locked(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session on a press. Refused (returning false) when the card
    /// is already matched or another session is active.
    pub fn grab(&mut self, item: CardId, at: Point, already_matched: bool) -> bool {
        if already_matched || self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            item,
            origin: at,
            at,
            phase: DragPhase::Grabbed,
            edge_anchor: None,
        });
        true
    }

    /// Feed a pointer move. Returns `None` when no session is active.
    pub fn update(&mut self, at: Point, region: ViewRegion) -> Option<DragUpdate> {
        let session = self.session.as_mut()?;
        session.at = at;

        if session.phase == DragPhase::Grabbed {
            let dx = (at.x as i32 - session.origin.x as i32).unsigned_abs() as u16;
            let dy = (at.y as i32 - session.origin.y as i32).unsigned_abs() as u16;
            if dx.max(dy) > DRAG_DEADZONE {
                session.phase = DragPhase::Dragging;
            }
        }

        let mut scroll_to = None;
        if session.phase == DragPhase::Dragging {
            let dy = at.y as i32 - session.origin.y as i32;
            let near_top = at.y < region.top.saturating_add(EDGE_SCROLL_MARGIN);
            let near_bottom = at.y.saturating_add(EDGE_SCROLL_MARGIN) >= region.bottom;

            if near_top || near_bottom {
                let anchor = *session.edge_anchor.get_or_insert(EdgeAnchor {
                    dy_at_engage: dy,
                    scroll_at_engage: region.scroll,
                });
                let delta = dy - anchor.dy_at_engage;
                let target = (anchor.scroll_at_engage as i32 + delta)
                    .clamp(0, region.max_scroll as i32) as u16;
                if target != region.scroll {
                    scroll_to = Some(target);
                }
            } else {
                session.edge_anchor = None;
            }
        }

        Some(DragUpdate {
            offset: session.offset(),
            scroll_to,
        })
    }

    /// End the session on release. A session still in the grab phase was a
    /// tap and produces no proposal.
    pub fn release(&mut self, at: Point) -> Option<DropProposal> {
        let session = self.session.take()?;
        match session.phase {
            DragPhase::Grabbed => None,
            DragPhase::Dragging => Some(DropProposal {
                item: session.item,
                at,
            }),
        }
    }

    /// Abandon any active session without producing a proposal. Safe to
    /// call with no session; used for forced termination (focus loss,
    /// screen change, round restart).
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(scroll: u16) -> ViewRegion {
        ViewRegion {
            top: 5,
            bottom: 25,
            scroll,
            max_scroll: 40,
        }
    }

    fn card() -> CardId {
        CardId::verse(0)
    }

    #[test]
    fn test_grab_refuses_matched_cards() {
        let mut tracker = DragTracker::new();
        assert!(!tracker.grab(card(), Point::new(3, 10), true));
        assert!(tracker.session().is_none());
        assert!(!tracker.scroll_locked());
    }

    #[test]
    fn test_grab_refuses_second_session() {
        let mut tracker = DragTracker::new();
        assert!(tracker.grab(card(), Point::new(3, 10), false));
        assert!(!tracker.grab(CardId::reference(1), Point::new(8, 12), false));
        assert_eq!(tracker.session().unwrap().item(), card());
    }

    #[test]
    fn test_deadzone_keeps_grab_phase() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);

        // One cell of movement stays within the deadzone.
        tracker.update(Point::new(11, 10), region(0));
        assert_eq!(tracker.session().unwrap().phase(), DragPhase::Grabbed);

        tracker.update(Point::new(12, 10), region(0));
        assert_eq!(tracker.session().unwrap().phase(), DragPhase::Dragging);
    }

    #[test]
    fn test_tap_release_produces_no_proposal() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);
        tracker.update(Point::new(11, 10), region(0));

        assert_eq!(tracker.release(Point::new(11, 10)), None);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_drag_release_proposes_drop_at_release_point() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);
        tracker.update(Point::new(20, 14), region(0));

        let proposal = tracker.release(Point::new(20, 14)).unwrap();
        assert_eq!(proposal.item, card());
        assert_eq!(proposal.at, Point::new(20, 14));
        assert!(!tracker.scroll_locked());
    }

    #[test]
    fn test_release_without_session_is_none() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.release(Point::new(0, 0)), None);
    }

    #[test]
    fn test_cancel_is_idempotent_and_unlocks_scroll() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);
        assert!(tracker.scroll_locked());

        tracker.cancel();
        assert!(!tracker.scroll_locked());
        tracker.cancel();
        assert!(tracker.session().is_none());

        // A release after cancel yields nothing.
        assert_eq!(tracker.release(Point::new(10, 10)), None);
    }

    #[test]
    fn test_offset_tracks_pointer() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);
        let update = tracker.update(Point::new(6, 13), region(0)).unwrap();
        assert_eq!(update.offset, (-4, 3));
    }

    #[test]
    fn test_edge_scroll_anchors_at_engagement() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);

        // Mid-region movement requests no scroll.
        let update = tracker.update(Point::new(10, 15), region(4)).unwrap();
        assert_eq!(update.scroll_to, None);

        // Entering the bottom margin captures the anchor; no jump yet.
        let update = tracker.update(Point::new(10, 23), region(4)).unwrap();
        assert_eq!(update.scroll_to, None);

        // Further downward motion scrolls relative to the anchor, one cell
        // of pointer travel per cell of scroll.
        let update = tracker.update(Point::new(10, 24), region(4)).unwrap();
        assert_eq!(update.scroll_to, Some(5));
    }

    #[test]
    fn test_edge_scroll_upward_at_top_margin() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 15), false);
        tracker.update(Point::new(10, 12), region(10));

        // y=7 is inside the top margin (top 5, margin 3): anchor captured.
        tracker.update(Point::new(10, 7), region(10));
        let update = tracker.update(Point::new(10, 6), region(10)).unwrap();
        assert_eq!(update.scroll_to, Some(9));
    }

    #[test]
    fn test_edge_scroll_clamps_to_bounds() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);

        tracker.update(Point::new(10, 6), region(1));
        // Dragging far above the area cannot scroll past offset 0.
        let update = tracker.update(Point::new(10, 0), region(1)).unwrap();
        assert_eq!(update.scroll_to, Some(0));
    }

    #[test]
    fn test_leaving_margin_drops_anchor() {
        let mut tracker = DragTracker::new();
        tracker.grab(card(), Point::new(10, 10), false);

        tracker.update(Point::new(10, 23), region(0));
        let update = tracker.update(Point::new(10, 24), region(0)).unwrap();
        assert_eq!(update.scroll_to, Some(1));

        // Back to the middle: the anchor clears, so re-entering the margin
        // re-anchors at the new scroll instead of resuming the old delta.
        tracker.update(Point::new(10, 15), region(1));
        let update = tracker.update(Point::new(10, 23), region(1)).unwrap();
        assert_eq!(update.scroll_to, None);
    }
}
