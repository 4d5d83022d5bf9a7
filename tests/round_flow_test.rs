//! End-to-end round flow: drag tracker feeding the lifecycle controller
//! through geometry produced by the real game view.

use versematch::core::round::{MatchOutcome, RoundState};
use versematch::core::SimpleRng;
use versematch::engine::RoundController;
use versematch::input::DragTracker;
use versematch::profile::PlayerProfile;
use versematch::term::{GameView, Viewport};
use versematch::types::{AgeTier, CardId, Point, Rect};

fn viewport() -> Viewport {
    Viewport::new(100, 80)
}

fn center(rect: Rect) -> Point {
    Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn partner_of(round: &RoundState, verse_id: CardId) -> CardId {
    let verse = round.verses().iter().find(|v| v.id == verse_id).unwrap();
    round
        .references()
        .iter()
        .find(|r| r.reference == verse.reference)
        .unwrap()
        .id
}

/// Drag a card from one point to another through the tracker, then resolve
/// the drop through the controller.
fn drag_and_drop(
    controller: &mut RoundController,
    view: &GameView,
    tracker: &mut DragTracker,
    from: Point,
    to: Point,
    profile: Option<&PlayerProfile>,
) -> (MatchOutcome, Option<PlayerProfile>) {
    let layout = view.layout(controller.round(), viewport(), 0);
    let id = layout.card_at(from).expect("a card under the grab point");
    assert!(tracker.grab(id, from, controller.round().is_matched(id)));

    let region = view.scroll_region(controller.round(), viewport(), 0);
    tracker.update(to, region);

    let proposal = tracker.release(to).expect("a drag past the deadzone");
    let layout = view.layout(controller.round(), viewport(), 0);
    controller.resolve_drop(proposal.item, proposal.at, &layout, profile)
}

#[test]
fn full_round_completes_and_updates_profile() {
    let view = GameView::new();
    let mut controller = RoundController::new(AgeTier::Beginner, 1234);
    let mut tracker = DragTracker::new();
    let profile = PlayerProfile::new("Lily", 4, "red");

    controller.tick(8_000);

    let total = controller.round().verses().len();
    let mut updated = None;
    for i in 0..total {
        let layout = view.layout(controller.round(), viewport(), 0);
        let verse_id = controller.round().verses()[i].id;
        let target = partner_of(controller.round(), verse_id);
        let from = center(layout.bounds_of(verse_id).unwrap());
        let to = center(layout.bounds_of(target).unwrap());

        let (outcome, folded) =
            drag_and_drop(&mut controller, &view, &mut tracker, from, to, Some(&profile));
        assert!(matches!(outcome, MatchOutcome::Matched(_)), "pair {i}");
        updated = folded.or(updated);
    }

    assert!(controller.round().completed());
    let updated = updated.expect("the final drop folds the stats");
    assert_eq!(updated.stats.games_played, 1);
    assert_eq!(updated.stats.best_time, Some(8));
    assert_eq!(updated.stats.total_score, controller.round().score());

    // The clock is stopped; further ticks change nothing.
    controller.tick(60_000);
    assert_eq!(controller.round().elapsed_seconds(), 8);
}

#[test]
fn wrong_drop_leaves_round_intact() {
    let view = GameView::new();
    let mut controller = RoundController::new(AgeTier::Beginner, 77);
    let mut tracker = DragTracker::new();

    let layout = view.layout(controller.round(), viewport(), 0);
    let verse_id = controller.round().verses()[0].id;
    let partner = partner_of(controller.round(), verse_id);
    let wrong = controller
        .round()
        .references()
        .iter()
        .find(|r| r.id != partner)
        .unwrap()
        .id;
    let from = center(layout.bounds_of(verse_id).unwrap());
    let to = center(layout.bounds_of(wrong).unwrap());

    let (outcome, folded) = drag_and_drop(&mut controller, &view, &mut tracker, from, to, None);
    assert_eq!(outcome, MatchOutcome::Rejected);
    assert_eq!(folded, None);
    assert!(controller.round().matches().is_empty());
    assert_eq!(controller.round().score(), 0);

    // The same pairing done correctly still works afterwards.
    let to = center(layout.bounds_of(partner).unwrap());
    let (outcome, _) = drag_and_drop(&mut controller, &view, &mut tracker, from, to, None);
    assert!(matches!(outcome, MatchOutcome::Matched(_)));
}

#[test]
fn forced_cancel_mid_drag_proposes_nothing() {
    let view = GameView::new();
    let mut controller = RoundController::new(AgeTier::Intermediate, 5);
    let mut tracker = DragTracker::new();

    let layout = view.layout(controller.round(), viewport(), 0);
    let verse_id = controller.round().verses()[0].id;
    let from = center(layout.bounds_of(verse_id).unwrap());
    assert!(tracker.grab(verse_id, from, false));

    let region = view.scroll_region(controller.round(), viewport(), 0);
    tracker.update(Point::new(from.x + 10, from.y + 2), region);
    tracker.cancel();

    assert_eq!(tracker.release(Point::new(from.x + 10, from.y + 2)), None);
    assert!(controller.round().matches().is_empty());

    // The board is fully playable after the cancel.
    let target = partner_of(controller.round(), verse_id);
    let to = center(layout.bounds_of(target).unwrap());
    let (outcome, _) = drag_and_drop(&mut controller, &view, &mut tracker, from, to, None);
    assert!(matches!(outcome, MatchOutcome::Matched(_)));
}

#[test]
fn tap_on_a_card_is_not_a_drop() {
    let view = GameView::new();
    let controller = RoundController::new(AgeTier::Beginner, 9);
    let mut tracker = DragTracker::new();

    let layout = view.layout(controller.round(), viewport(), 0);
    let verse_id = controller.round().verses()[0].id;
    let at = center(layout.bounds_of(verse_id).unwrap());

    assert!(tracker.grab(verse_id, at, false));
    let region = view.scroll_region(controller.round(), viewport(), 0);
    tracker.update(Point::new(at.x + 1, at.y), region);
    assert_eq!(tracker.release(Point::new(at.x + 1, at.y)), None);
}

#[test]
fn seeded_rounds_reproduce_the_same_deal() {
    let a = RoundState::new(AgeTier::Advanced, 4242);
    let b = RoundState::new(AgeTier::Advanced, 4242);
    assert_eq!(a.verses(), b.verses());
    assert_eq!(a.references(), b.references());

    let mut rng = SimpleRng::new(4242);
    // Different seed stream, almost surely a different deal.
    let c = RoundState::new(AgeTier::Advanced, rng.next_u32());
    assert_ne!(a.references(), c.references());
}
