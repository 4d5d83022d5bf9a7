//! Round lifecycle controller
//!
//! Wraps a [`RoundState`] with the things that surround it: the once-per-
//! second clock driven from the fixed-timestep loop, and the exactly-once
//! fold of a finished round into the player's lifetime statistics. The
//! round itself stays pure; everything time- and profile-shaped lives here.

use crate::core::layout::CardLayout;
use crate::core::round::{MatchOutcome, RoundState};
use crate::profile::PlayerProfile;
use crate::types::{AgeTier, CardId, Point};

/// Fold one finished round into a profile's lifetime statistics.
///
/// Best time only improves: a slower finish never overwrites a faster one.
pub fn apply_round_stats(profile: &PlayerProfile, score: u32, elapsed_seconds: u32) -> PlayerProfile {
    let mut updated = profile.clone();
    updated.stats.games_played += 1;
    updated.stats.total_score += score;
    updated.stats.best_time = Some(match updated.stats.best_time {
        Some(best) => best.min(elapsed_seconds),
        None => elapsed_seconds,
    });
    updated
}

#[derive(Debug)]
pub struct RoundController {
    round: RoundState,
    timer_running: bool,
    /// Sub-second remainder carried between ticks.
    carry_ms: u32,
    /// Guards the stats fold so a completed round counts exactly once.
    finalized: bool,
}

impl RoundController {
    pub fn new(tier: AgeTier, seed: u32) -> Self {
        Self {
            round: RoundState::new(tier, seed),
            timer_running: true,
            carry_ms: 0,
            finalized: false,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Advance the round clock by wall-time milliseconds. Whole seconds
    /// flow into the round; the remainder carries so no time is lost to
    /// tick granularity. Stopped timers (completion, teardown) drop time.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.timer_running || self.round.completed() {
            return;
        }
        self.carry_ms += elapsed_ms;
        while self.carry_ms >= 1000 {
            self.carry_ms -= 1000;
            self.round.tick_second();
        }
    }

    /// Resolve a drop through the round and, if it completed the round,
    /// finalize: stop the clock and fold the score into the profile. The
    /// returned profile is present only on the finalizing drop.
    pub fn resolve_drop(
        &mut self,
        dragged: CardId,
        at: Point,
        layout: &CardLayout,
        profile: Option<&PlayerProfile>,
    ) -> (MatchOutcome, Option<PlayerProfile>) {
        let outcome = self.round.propose_match(dragged, at, layout);

        let mut updated = None;
        if self.round.take_just_completed() && !self.finalized {
            self.finalized = true;
            self.timer_running = false;
            updated = profile
                .map(|p| apply_round_stats(p, self.round.score(), self.round.elapsed_seconds()));
        }
        (outcome, updated)
    }

    /// Start a fresh round in place: new deal, clock restarted from zero,
    /// finalization re-armed.
    pub fn restart(&mut self) {
        self.round.restart();
        self.timer_running = true;
        self.carry_ms = 0;
        self.finalized = false;
    }

    /// Stop the clock when leaving the game screen. Idempotent.
    pub fn teardown(&mut self) {
        self.timer_running = false;
    }
}
