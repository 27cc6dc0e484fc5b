//! Request pipeline: decode, validate, move, encode.

use crate::codec::{self, GameResult};
use crate::games::tictactoe::{MoveEngine, OpponentKind, validate};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{error, info, instrument};

/// Body sent when encoding itself fails.
const FALLBACK_BODY: &[u8] = br#"{"board":[],"errors":[]}"#;

/// Status and body produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// JSON body.
    pub body: Vec<u8>,
}

impl GameResponse {
    /// Returns the body as text.
    pub fn body_as_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl IntoResponse for GameResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// Stateless handler for the move endpoint.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    engine: MoveEngine,
}

impl GameController {
    /// Creates a controller around `engine`.
    pub fn new(engine: MoveEngine) -> Self {
        Self { engine }
    }

    /// Creates a controller that plays with the given strategy.
    #[instrument]
    pub fn with_opponent(kind: OpponentKind) -> Self {
        info!(opponent = %kind, "Creating game controller");
        Self::new(MoveEngine::new(kind.build()))
    }

    /// Runs the full pipeline over a raw request body.
    ///
    /// Any validation error yields 422 with the client's board echoed back.
    #[instrument(skip(self, body), fields(len = body.len()))]
    pub fn generate_response(&self, body: &[u8]) -> GameResponse {
        let request = codec::decode(body);
        let validation = validate(&request);
        let has_errors = !validation.is_valid();

        let board = self.engine.apply(
            validation.board.as_ref(),
            validation.position,
            has_errors,
        );
        let result = GameResult::new(board, validation.errors);

        let status = if has_errors {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::OK
        };

        match codec::encode(&result) {
            Ok(body) => {
                info!(status = status.as_u16(), errors = result.errors.len(), "Move processed");
                GameResponse { status, body }
            }
            Err(e) => {
                error!(error = %e, "Failed to encode response");
                GameResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: FALLBACK_BODY.to_vec(),
                }
            }
        }
    }
}
