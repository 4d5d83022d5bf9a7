//! Card layout registry - maps card ids to their current screen bounds
//!
//! The view refreshes this mapping whenever it lays cards out; drop
//! resolution queries it synchronously at release time, so hit testing
//! always sees the geometry the player sees, never a stale capture from
//! the start of the gesture.

use crate::types::{CardId, CardKind, Point, Rect};

#[derive(Debug, Clone, Default)]
pub struct CardLayout {
    rects: Vec<(CardId, Rect)>,
}

impl CardLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry with a freshly computed layout.
    pub fn refresh(&mut self, rects: Vec<(CardId, Rect)>) {
        self.rects = rects;
    }

    pub fn insert(&mut self, id: CardId, rect: Rect) {
        self.rects.push((id, rect));
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Current bounds of one card, if it is on screen.
    pub fn bounds_of(&self, id: CardId) -> Option<Rect> {
        self.rects
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, rect)| *rect)
    }

    /// The card under `point`, regardless of kind (used to start a grab).
    pub fn card_at(&self, point: Point) -> Option<CardId> {
        self.rects
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(id, _)| *id)
    }

    /// Cards of one kind whose bounds contain `point`.
    ///
    /// Callers filter further (e.g. skip matched cards); the layout only
    /// answers geometry.
    pub fn hits_of_kind<'a>(
        &'a self,
        point: Point,
        kind: CardKind,
    ) -> impl Iterator<Item = CardId> + 'a {
        self.rects
            .iter()
            .filter(move |(id, rect)| id.kind == kind && rect.contains(point))
            .map(|(id, _)| *id)
    }
}
