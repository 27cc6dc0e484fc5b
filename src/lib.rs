//! Strictly Tic-Tac-Toe library - a stateless move service
//!
//! Each request carries a full board and, optionally, a player move. The
//! service validates the request, places either the player's mark or a
//! computer reply, and answers with the board plus every validation error it
//! found.
//!
//! # Architecture
//!
//! - **Codec**: untrusted JSON in, compact `{"board":[...],"errors":[...]}` out
//! - **Games**: board model, rules, validation, the move engine and opponents
//! - **Controller**: decode → validate → move → encode, mapped to 200 or 422
//! - **Server**: axum router exposing `/move` and `/health`
//! - **Config**: TOML file, environment and CLI layering
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::GameController;
//!
//! let controller = GameController::default();
//! let response = controller.generate_response(br#"{"board":["X","1","2","3","4","5","6","7","8"]}"#);
//! assert_eq!(
//!     response.body_as_string(),
//!     r#"{"board":["X","1","2","3","O","5","6","7","8"],"errors":[]}"#
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod controller;
mod games;
pub mod server;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Request pipeline
pub use codec::{CodecError, GameResult, MoveResponse};
pub use controller::{GameController, GameResponse};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, BoardInput, FirstEmpty, Minimax, MoveEngine, MoveInput, MoveRequest,
    Opponent, OpponentKind, Player, Position, Square, Validation, ValidationError, rules,
    validate,
};
