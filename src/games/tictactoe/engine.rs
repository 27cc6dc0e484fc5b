//! Applies the outcome of a validated request to the board.

use super::opponent::{Opponent, OpponentKind};
use super::{Board, Player, Position};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Places at most one mark per request.
///
/// A request with errors never changes the board. A player move places the
/// human mark and nothing else. A request without a move asks the opponent
/// for one and places the computer mark.
#[derive(Debug, Clone)]
pub struct MoveEngine {
    opponent: Arc<dyn Opponent>,
}

impl MoveEngine {
    /// Creates an engine that plays with `opponent`.
    pub fn new(opponent: Arc<dyn Opponent>) -> Self {
        Self { opponent }
    }

    /// Computes the board to send back.
    #[instrument(skip(self, board), fields(opponent = self.opponent.name()))]
    pub fn apply(
        &self,
        board: Option<&Board>,
        position: Option<Position>,
        has_errors: bool,
    ) -> Option<Board> {
        let board = board?;

        if has_errors {
            debug!("Errors present, echoing board");
            return Some(board.clone());
        }

        match position {
            Some(pos) => {
                debug!(position = pos.to_index(), "Placing player move");
                Some(board.with_mark(pos, Player::HUMAN))
            }
            None => match self.opponent.choose(board, Player::COMPUTER) {
                Some(pos) => {
                    info!(position = pos.to_index(), "Computer move chosen");
                    let next = board.with_mark(pos, Player::COMPUTER);
                    debug!(board = %next.display(), "Board after computer move");
                    Some(next)
                }
                None => {
                    debug!("Board full, no computer move available");
                    Some(board.clone())
                }
            },
        }
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new(OpponentKind::default().build())
    }
}
