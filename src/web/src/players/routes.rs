use crate::GameAppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<GameAppData> {
    Router::new()
        .route("/api/players/{player_id}", get(super::player_get_action))
        .route("/api/players/revalue", post(super::player_revalue_action))
}
