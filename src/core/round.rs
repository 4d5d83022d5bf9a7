//! Round state module - the authoritative matching-game state
//!
//! Owns the dealt verse and reference cards, the matched-pairs set, score,
//! and elapsed time, plus the rules for accepting or rejecting a drop.
//! Mutation happens only through [`RoundState::propose_match`] and
//! [`RoundState::tick_second`]; everything else is read-only access for
//! views and the lifecycle controller.

use crate::core::layout::CardLayout;
use crate::core::rng::SimpleRng;
use crate::core::scoring::match_score;
use crate::data;
use crate::types::{AgeTier, CardId, CardKind, Point};

/// A draggable verse card. Immutable once the round starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseCard {
    pub id: CardId,
    pub text: String,
    pub reference: String,
}

/// A reference card, holding a copy of exactly one verse's reference
/// string, dealt in an independently shuffled order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCard {
    pub id: CardId,
    pub reference: String,
}

/// A completed pairing. Permanent for the rest of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub verse: CardId,
    pub reference: CardId,
    /// Round clock at the moment of the match.
    pub at_seconds: u32,
    pub awarded: u32,
}

/// Result of resolving a drop proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Correct pairing; the record has been appended and scored.
    Matched(MatchRecord),
    /// Landed on a valid target with the wrong reference. No state change;
    /// the UI should show try-again feedback. Mismatches carry no penalty.
    Rejected,
    /// No unmatched opposite-kind card under the drop point. A no-op.
    NoTarget,
}

/// Complete state of one matching round.
#[derive(Debug, Clone)]
pub struct RoundState {
    tier: AgeTier,
    verses: Vec<VerseCard>,
    references: Vec<ReferenceCard>,
    matches: Vec<MatchRecord>,
    score: u32,
    elapsed_seconds: u32,
    completed: bool,
    /// One-shot completion signal, consumed by the lifecycle controller.
    just_completed: bool,
    rng: SimpleRng,
}

impl RoundState {
    /// Deal a new round for the tier. The seed fixes the deal, so tests
    /// can reproduce an exact board.
    pub fn new(tier: AgeTier, seed: u32) -> Self {
        let mut round = Self {
            tier,
            verses: Vec::new(),
            references: Vec::new(),
            matches: Vec::new(),
            score: 0,
            elapsed_seconds: 0,
            completed: false,
            just_completed: false,
            rng: SimpleRng::new(seed),
        };
        round.deal();
        round
    }

    /// Draw the round's verses and lay out both shuffles.
    ///
    /// The references hold the same multiset of strings as the verses but
    /// in an independently shuffled order. If that shuffle lands on the
    /// identity permutation (and there is more than one pair), the
    /// references are rotated by one so the display order never trivially
    /// mirrors the verse order.
    fn deal(&mut self) {
        let count = self.tier.verse_count();
        let drawn = data::random_verses(&mut self.rng, self.tier, count);

        self.verses = drawn
            .iter()
            .enumerate()
            .map(|(i, entry)| VerseCard {
                id: CardId::verse(i as u8),
                text: entry.text.to_string(),
                reference: entry.reference.to_string(),
            })
            .collect();

        let mut refs: Vec<String> = drawn.iter().map(|e| e.reference.to_string()).collect();
        self.rng.shuffle(&mut refs);
        let identical = refs
            .iter()
            .zip(self.verses.iter())
            .all(|(r, v)| *r == v.reference);
        if identical && count > 1 {
            refs.rotate_left(1);
        }

        self.references = refs
            .into_iter()
            .enumerate()
            .map(|(i, reference)| ReferenceCard {
                id: CardId::reference(i as u8),
                reference,
            })
            .collect();
    }

    /// Clear all round progress and deal fresh cards. Indistinguishable
    /// from a brand-new round; the RNG keeps advancing so the deal differs.
    pub fn restart(&mut self) {
        self.matches.clear();
        self.score = 0;
        self.elapsed_seconds = 0;
        self.completed = false;
        self.just_completed = false;
        self.deal();
    }

    pub fn tier(&self) -> AgeTier {
        self.tier
    }

    pub fn verses(&self) -> &[VerseCard] {
        &self.verses
    }

    pub fn references(&self) -> &[ReferenceCard] {
        &self.references
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Matched and total pair counts, for the progress bar.
    pub fn progress(&self) -> (usize, usize) {
        (self.matches.len(), self.verses.len())
    }

    /// Whether a card already appears in a match. Matched cards can never
    /// be dragged or targeted again.
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matches
            .iter()
            .any(|m| m.verse == id || m.reference == id)
    }

    /// Advance the round clock by one second. Stops counting once the
    /// round is complete.
    pub fn tick_second(&mut self) {
        if !self.completed {
            self.elapsed_seconds += 1;
        }
    }

    /// Take the one-shot completion signal. Returns true exactly once per
    /// completed round; completion after a restart re-arms it.
    pub fn take_just_completed(&mut self) -> bool {
        std::mem::take(&mut self.just_completed)
    }

    fn reference_string_of(&self, id: CardId) -> Option<&str> {
        match id.kind {
            CardKind::Verse => self
                .verses
                .iter()
                .find(|v| v.id == id)
                .map(|v| v.reference.as_str()),
            CardKind::Reference => self
                .references
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.reference.as_str()),
        }
    }

    /// Resolve a drop proposal from the drag tracker.
    ///
    /// The target is whichever unmatched opposite-kind card geometrically
    /// contains `drop_point` in the layout *as of release time*. Dragging
    /// an already-matched card (which the tracker refuses anyway) and
    /// drops over nothing are silent no-ops.
    pub fn propose_match(
        &mut self,
        dragged: CardId,
        drop_point: Point,
        layout: &CardLayout,
    ) -> MatchOutcome {
        if self.completed || self.is_matched(dragged) {
            return MatchOutcome::NoTarget;
        }

        let Some(target) = layout
            .hits_of_kind(drop_point, dragged.kind.opposite())
            .find(|id| !self.is_matched(*id))
        else {
            return MatchOutcome::NoTarget;
        };

        let (Some(dragged_ref), Some(target_ref)) = (
            self.reference_string_of(dragged),
            self.reference_string_of(target),
        ) else {
            // An id the round does not know (stale layout entry).
            return MatchOutcome::NoTarget;
        };

        if dragged_ref != target_ref {
            return MatchOutcome::Rejected;
        }

        let (verse, reference) = match dragged.kind {
            CardKind::Verse => (dragged, target),
            CardKind::Reference => (target, dragged),
        };

        let record = MatchRecord {
            verse,
            reference,
            at_seconds: self.elapsed_seconds,
            awarded: match_score(self.elapsed_seconds),
        };
        self.matches.push(record);
        self.score += record.awarded;

        if self.matches.len() == self.verses.len() {
            self.completed = true;
            self.just_completed = true;
        }

        MatchOutcome::Matched(record)
    }
}
