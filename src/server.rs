//! HTTP transport for the move service.

use crate::config::ServerConfig;
use crate::controller::{GameController, GameResponse};
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use tower::ServiceBuilder;
use tracing::{info, instrument};

/// Builds the router: `/move` (GET or POST) and `/health`.
///
/// Both methods on `/move` read the JSON request from the body.
#[instrument(skip(controller))]
pub fn router(controller: GameController) -> Router {
    Router::new()
        .route("/move", get(make_move).post(make_move))
        .route("/health", get(health))
        .with_state(controller)
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(
                method = %req.method(),
                uri = %req.uri(),
                "Incoming HTTP request"
            );
            req
        }))
}

async fn make_move(State(controller): State<GameController>, body: Bytes) -> GameResponse {
    controller.generate_response(&body)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Binds to the configured address and serves until the process ends.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let controller = GameController::with_opponent(*config.opponent());
    let app = router(controller);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Server ready at http://{}:{}/move",
        config.host(),
        config.port()
    );

    axum::serve(listener, app).await
}
