//! Round lifecycle orchestration

pub mod lifecycle;

pub use lifecycle::{apply_round_stats, RoundController};
