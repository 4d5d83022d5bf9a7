//! Core game logic, independent of terminal I/O

pub mod layout;
pub mod rng;
pub mod round;
pub mod scoring;

pub use layout::CardLayout;
pub use rng::SimpleRng;
pub use round::{MatchOutcome, MatchRecord, ReferenceCard, RoundState, VerseCard};
