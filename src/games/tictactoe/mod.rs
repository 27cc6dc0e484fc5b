//! Tic-tac-toe domain: board, rules, validation and the automated opponent.

mod action;
mod engine;
mod opponent;
mod position;
pub mod rules;
mod types;
mod validation;

pub use action::{BoardInput, MoveInput, MoveRequest, ValidationError};
pub use engine::MoveEngine;
pub use opponent::{FirstEmpty, Minimax, Opponent, OpponentKind};
pub use position::Position;
pub use types::{Board, BoardError, Player, Square};
pub use validation::{Validation, validate};
