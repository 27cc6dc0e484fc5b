//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X, the human side of a request.
    X,
    /// Player O, the computer side of a request.
    O,
}

impl Player {
    /// Mark placed for a player-supplied move.
    pub const HUMAN: Player = Player::X;

    /// Mark placed for an automated move.
    pub const COMPUTER: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Wire token for this player's mark.
    pub fn token(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Renders the square as its wire token.
    ///
    /// Occupied squares render as the mark, empty squares as their own index.
    pub fn token(self, pos: Position) -> String {
        match self {
            Square::Empty => pos.to_index().to_string(),
            Square::Occupied(player) => player.token().to_string(),
        }
    }

    /// Parses a wire token for the square at `pos`.
    ///
    /// Only `"X"`, `"O"` and the position's own index are accepted.
    pub fn from_token(token: &str, pos: Position) -> Option<Self> {
        match token {
            "X" => Some(Square::Occupied(Player::X)),
            "O" => Some(Square::Occupied(Player::O)),
            other if other == pos.to_index().to_string() => Some(Square::Empty),
            _ => None,
        }
    }
}

/// Reasons a transported board cannot be turned into a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board did not have exactly nine cells.
    #[display("Board must have 9 cells, got {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A cell held something other than a mark or its own index.
    #[display("Invalid token {:?} at cell {}", token, index)]
    InvalidToken {
        /// Cell index of the offending token.
        index: usize,
        /// The token as received.
        token: String,
    },
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as the nine wire tokens, e.g. `["X","1","2","3","O","5","6","7","8"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = self.clone();
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Renders the board as its nine wire tokens.
    pub fn tokens(&self) -> Vec<String> {
        Position::ALL
            .iter()
            .map(|&pos| self.get(pos).token(pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => " ",
                    Square::Occupied(player) => player.token(),
                };
                result.push_str(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.tokens()
    }
}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardError;

    fn try_from(tokens: Vec<String>) -> Result<Self, Self::Error> {
        if tokens.len() != 9 {
            return Err(BoardError::WrongLength(tokens.len()));
        }

        let mut board = Board::new();
        for (pos, token) in Position::ALL.iter().copied().zip(&tokens) {
            let square =
                Square::from_token(token, pos).ok_or_else(|| BoardError::InvalidToken {
                    index: pos.to_index(),
                    token: token.clone(),
                })?;
            board.set(pos, square);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: [&str; 9]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_board_renders_indices() {
        let board = Board::new();
        assert_eq!(
            board.tokens(),
            tokens(["0", "1", "2", "3", "4", "5", "6", "7", "8"])
        );
    }

    #[test]
    fn test_parse_marks_and_indices() {
        let board =
            Board::try_from(tokens(["X", "1", "2", "3", "O", "5", "6", "7", "8"])).unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::BottomRight));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let short = tokens(["X", "1", "2", "3", "4", "5", "6", "7", "8"])[..8].to_vec();
        let result = Board::try_from(short);
        assert_eq!(result, Err(BoardError::WrongLength(8)));
    }

    #[test]
    fn test_misplaced_index_rejected() {
        let result = Board::try_from(tokens(["X", "2", "2", "3", "4", "5", "6", "7", "8"]));
        assert_eq!(
            result,
            Err(BoardError::InvalidToken {
                index: 1,
                token: "2".to_string()
            })
        );
    }

    #[test]
    fn test_lowercase_mark_rejected() {
        let result = Board::try_from(tokens(["x", "1", "2", "3", "4", "5", "6", "7", "8"]));
        assert!(matches!(result, Err(BoardError::InvalidToken { index: 0, .. })));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::O);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_serde_uses_wire_tokens() {
        let board = Board::new().with_mark(Position::TopLeft, Player::X);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X","1","2","3","4","5","6","7","8"]"#);
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
