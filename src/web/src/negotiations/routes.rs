use crate::GameAppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<GameAppData> {
    Router::new()
        .route(
            "/api/negotiations/{player_id}",
            post(super::negotiation_open_action).delete(super::negotiation_cancel_action),
        )
        .route(
            "/api/negotiations/{player_id}/actions",
            post(super::negotiation_act_action),
        )
        .route(
            "/api/negotiations/{player_id}/confirm",
            post(super::negotiation_confirm_action),
        )
}
