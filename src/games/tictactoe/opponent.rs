//! Strategies for the automated opponent.

use super::rules::{check_winner, is_full};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Something that picks a square for a mark.
pub trait Opponent: std::fmt::Debug + Send + Sync {
    /// Chooses an empty square for `mark`, or `None` on a full board.
    fn choose(&self, board: &Board, mark: Player) -> Option<Position>;

    /// Returns the strategy's name.
    fn name(&self) -> &str;
}

/// Selects which [`Opponent`] the service plays with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OpponentKind {
    /// Perfect play via minimax search.
    #[default]
    Minimax,
    /// Lowest-numbered empty square.
    FirstEmpty,
}

impl OpponentKind {
    /// Builds the strategy this kind names.
    #[instrument]
    pub fn build(self) -> Arc<dyn Opponent> {
        match self {
            OpponentKind::Minimax => Arc::new(Minimax),
            OpponentKind::FirstEmpty => Arc::new(FirstEmpty),
        }
    }
}

/// Picks the first empty square in index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmpty;

impl Opponent for FirstEmpty {
    fn choose(&self, board: &Board, _mark: Player) -> Option<Position> {
        Position::ALL.iter().copied().find(|&pos| board.is_empty(pos))
    }

    fn name(&self) -> &str {
        "first-empty"
    }
}

/// Full-depth minimax with alpha-beta pruning.
///
/// Faster wins score higher and slower losses score higher. Ties go to the
/// lowest index, so the choice is deterministic for a given board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

/// Base score of a won position; the search depth is subtracted from it.
const WIN: i32 = 10;

impl Minimax {
    fn search(
        board: &Board,
        to_move: Player,
        me: Player,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if let Some(winner) = check_winner(board) {
            return if winner == me { WIN - depth } else { depth - WIN };
        }
        if is_full(board) {
            return 0;
        }

        let maximizing = to_move == me;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in Position::valid_moves(board) {
            let child = board.with_mark(pos, to_move);
            let score = Self::search(&child, to_move.opponent(), me, depth + 1, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

impl Opponent for Minimax {
    #[instrument(skip(self, board))]
    fn choose(&self, board: &Board, mark: Player) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        let mut alpha = i32::MIN;

        for pos in Position::valid_moves(board) {
            let child = board.with_mark(pos, mark);
            let score = Self::search(&child, mark.opponent(), mark, 1, alpha, i32::MAX);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((pos, score));
                alpha = alpha.max(score);
            }
        }

        if let Some((pos, score)) = best {
            debug!(position = pos.to_index(), score, "Minimax chose position");
        }
        best.map(|(pos, _)| pos)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
