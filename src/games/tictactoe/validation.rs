//! Rule checks for a decoded move request.
//!
//! Every rule runs on every request and appends its own error. Nothing
//! short-circuits, so a request can fail several rules at once and the
//! errors come back in rule order.

use super::action::{BoardInput, MoveInput, MoveRequest, ValidationError};
use super::{Board, Position};
use tracing::{debug, instrument};

/// Outcome of validating a request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validation {
    /// The usable board, if the request carried one.
    pub board: Option<Board>,
    /// The range-checked move, if the request carried one.
    pub position: Option<Position>,
    /// Errors in the order the rules ran.
    pub errors: Vec<ValidationError>,
}

impl Validation {
    /// True when no rule failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Rule: a well-formed board must be present.
pub struct BoardPresent;

impl BoardPresent {
    /// Returns the board, or the error to record when it is missing.
    pub fn check(input: &BoardInput) -> Result<&Board, ValidationError> {
        input.board().ok_or(ValidationError::BoardRequired)
    }
}

/// Rule: a supplied move must be an integer in 0-8.
pub struct MoveInRange;

impl MoveInRange {
    /// Returns `Ok(None)` when no move was given.
    pub fn check(input: MoveInput) -> Result<Option<Position>, ValidationError> {
        match input {
            MoveInput::Absent => Ok(None),
            MoveInput::Index(n) => Position::from_wire(n)
                .map(Some)
                .ok_or(ValidationError::InvalidMove),
            MoveInput::Malformed => Err(ValidationError::InvalidMove),
        }
    }
}

/// Rule: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks `pos` against `board`.
    pub fn check(board: &Board, pos: Position) -> Result<(), ValidationError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(ValidationError::SpaceAlreadyOccupied)
        }
    }
}

/// Runs every rule against `req` and collects the failures.
#[instrument(skip(req))]
pub fn validate(req: &MoveRequest) -> Validation {
    let mut errors = Vec::new();

    let board = match BoardPresent::check(&req.board) {
        Ok(board) => Some(board.clone()),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let position = match MoveInRange::check(req.mov) {
        Ok(pos) => pos,
        Err(e) => {
            errors.push(e);
            None
        }
    };

    if let (Some(board), Some(pos)) = (&board, position)
        && let Err(e) = SquareIsEmpty::check(board, pos)
    {
        errors.push(e);
    }

    if !errors.is_empty() {
        debug!(?errors, "Request failed validation");
    }

    Validation {
        board,
        position,
        errors,
    }
}
