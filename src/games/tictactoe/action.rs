//! Request-scoped action types for tic-tac-toe.
//!
//! A request is decoded into these types before any rule runs. Each field
//! keeps track of whether the client omitted it, sent something unusable, or
//! sent a value worth validating, so that bad input is never mistaken for
//! missing input.

use super::Board;
use serde::{Deserialize, Serialize};

/// The board as received from a client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardInput {
    /// No `board` key, or an explicit `null`.
    #[default]
    Absent,
    /// A `board` key whose value is not a well-formed nine-cell board.
    Malformed,
    /// A well-formed board.
    Valid(Board),
}

impl BoardInput {
    /// Returns the board if one was supplied and well-formed.
    pub fn board(&self) -> Option<&Board> {
        match self {
            BoardInput::Valid(board) => Some(board),
            BoardInput::Absent | BoardInput::Malformed => None,
        }
    }
}

/// The move as received from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveInput {
    /// No `move` key, or an explicit `null`. Asks for a computer move.
    #[default]
    Absent,
    /// An integer, not yet range-checked.
    Index(i64),
    /// A `move` key holding something other than an integer.
    Malformed,
}

/// A decoded request: the raw shape of the client's intent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveRequest {
    /// The client's board.
    pub board: BoardInput,
    /// The client's move.
    pub mov: MoveInput,
}

impl MoveRequest {
    /// Creates a request from its parts.
    pub fn new(board: BoardInput, mov: MoveInput) -> Self {
        Self { board, mov }
    }
}

/// A recoverable defect in a request.
///
/// The display text is part of the wire contract and is sent verbatim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum ValidationError {
    /// The request carried no usable board.
    #[display("Board required")]
    #[serde(rename = "Board required")]
    BoardRequired,

    /// The move was not an integer in 0-8.
    #[display("Invalid Move")]
    #[serde(rename = "Invalid Move")]
    InvalidMove,

    /// The move targets a square that already holds a mark.
    #[display("Space already occupied")]
    #[serde(rename = "Space already occupied")]
    SpaceAlreadyOccupied,
}

impl std::error::Error for ValidationError {}
