//! Terminal rendering layer
//!
//! Views are pure functions from state to a [`Screen`]; the renderer owns
//! the terminal and flushes screens to it. Mouse capture lives with the
//! renderer since the drag gesture cannot work without it.

pub mod game_view;
pub mod menu_view;
pub mod renderer;
pub mod screen;

pub use game_view::{GameView, Viewport};
pub use menu_view::{MenuView, ProfileForm};
pub use renderer::TerminalRenderer;
pub use screen::{Cell, Screen, Style};
