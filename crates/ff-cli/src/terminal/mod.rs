//! Text adapters of the game's collaborator ports.
//!
//! The ground plane maps straight onto "screen" coordinates: a tap at
//! `(x, y)` lands on ground point `(x, z = y)`.

mod presenter;
mod puzzles;
mod renderer;

pub use presenter::{QuietAudio, TerminalPresenter};
pub use renderer::TextRenderer;
