//! JSON wire format for the move endpoint.
//!
//! Decoding never fails: anything unusable degrades to an absent or
//! malformed field and is reported later by validation. Encoding produces
//! the compact `{"board":[...],"errors":[...]}` shape with keys in that
//! order.

use crate::games::tictactoe::{Board, BoardInput, MoveInput, MoveRequest, ValidationError};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Final board and errors for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameResult {
    /// Board to return; `None` renders as `[]`.
    pub board: Option<Board>,
    /// Errors in the order validation found them.
    pub errors: Vec<ValidationError>,
}

impl GameResult {
    /// Creates a result from its parts.
    pub fn new(board: Option<Board>, errors: Vec<ValidationError>) -> Self {
        Self { board, errors }
    }
}

/// Response body as it appears on the wire.
///
/// Field order here is the key order in the encoded JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Nine cell tokens, or empty when there is no board.
    pub board: Vec<String>,
    /// Error messages.
    pub errors: Vec<ValidationError>,
}

impl From<&GameResult> for MoveResponse {
    fn from(result: &GameResult) -> Self {
        Self {
            board: result.board.as_ref().map(Board::tokens).unwrap_or_default(),
            errors: result.errors.clone(),
        }
    }
}

/// Failure to serialize a response.
#[derive(Debug, Clone, Display, Error)]
#[display("Codec error: {} at {}:{}", message, file, line)]
pub struct CodecError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CodecError {
    /// Creates a new codec error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Decodes a request body.
///
/// Bodies that are empty, not JSON, or not an object yield an empty request.
#[instrument(skip(raw), fields(len = raw.len()))]
pub fn decode(raw: &[u8]) -> MoveRequest {
    let mut fields = match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            debug!(kind = json_kind(&other), "Body is not a JSON object");
            return MoveRequest::default();
        }
        Err(e) => {
            debug!(error = %e, "Body is not valid JSON");
            return MoveRequest::default();
        }
    };

    let board = decode_board(fields.remove("board"));
    let mov = decode_move(fields.remove("move"));
    debug!(?board, ?mov, "Decoded request");
    MoveRequest::new(board, mov)
}

fn decode_board(value: Option<Value>) -> BoardInput {
    match value {
        None | Some(Value::Null) => BoardInput::Absent,
        Some(value) => match serde_json::from_value::<Board>(value) {
            Ok(board) => BoardInput::Valid(board),
            Err(e) => {
                debug!(error = %e, "Board is malformed");
                BoardInput::Malformed
            }
        },
    }
}

fn decode_move(value: Option<Value>) -> MoveInput {
    match value {
        None | Some(Value::Null) => MoveInput::Absent,
        Some(Value::Number(n)) => n.as_i64().map_or(MoveInput::Malformed, MoveInput::Index),
        Some(_) => MoveInput::Malformed,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encodes a result as compact JSON.
#[instrument(skip(result))]
pub fn encode(result: &GameResult) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&MoveResponse::from(result))?)
}
