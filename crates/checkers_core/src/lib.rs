//! Checkers rules engine.
//!
//! Owns the board, decides move legality, applies steps and captures, and
//! runs the turn state machine including multi-jump chains. Presentation
//! shells talk to it through [`BoardView`] and [`PointerInput`].

pub mod board;
pub mod engine;
pub mod error;
pub mod rules;
pub mod types;
pub mod view;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use rules::{JUMP_DELTAS, classify_move, has_jump_from, is_valid_move, legal_destinations};
pub use types::*;
pub use view::*;
