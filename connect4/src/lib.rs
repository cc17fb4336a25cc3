//! Connect Four rules: a `HEIGHT` x `WIDTH` board, column drops, turn order and
//! four-in-a-row detection.
//!
//! A session is an owned [`GameEngine`]. Adapters pass column indices to
//! [`GameEngine::play_move`] and render the returned [`GameOutcome`].

pub mod action;
pub mod board;
pub mod error;
pub mod game_engine;
pub mod outcome;
pub mod player;
pub mod win;

mod constants;
mod display;

pub use action::*;
pub use board::*;
pub use constants::*;
pub use error::*;
pub use game_engine::*;
pub use outcome::*;
pub use player::*;
pub use win::*;
