//! VerseMatch: a terminal verse-matching game for kids.
//!
//! Drag verse cards onto their references (or the other way around) to
//! clear the board. Faster matches score higher; finished rounds fold
//! into per-player profiles persisted as JSON.
//!
//! Layering: `core` holds the pure round rules, `input` the drag gesture
//! state machine, `engine` the round lifecycle (clock and stats), `term`
//! the rendering, and `app` ties them together for the main loop.

pub mod app;
pub mod core;
pub mod data;
pub mod engine;
pub mod input;
pub mod profile;
pub mod term;
pub mod types;
