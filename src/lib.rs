//! Game-state engine for a turn-based naval grid duel: board model, fleet
//! placement with a no-touching rule, shot resolution, opponent targeting,
//! and the match controller. Presentation (rendering, input, audio) lives
//! outside this crate and drives it through the board/game query surface.

mod ai;
mod board;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod ship;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use ship::*;
