use crate::GameAppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<GameAppData> {
    Router::new()
        .route("/api/sales/{player_id}", post(super::sale_open_action))
        .route(
            "/api/sales/{player_id}/confirm",
            post(crate::negotiations::negotiation_confirm_action),
        )
        .route(
            "/api/sales/proposals/{proposal_id}",
            get(super::sale_proposal_get_action),
        )
        .route(
            "/api/sales/proposals/{proposal_id}/actions",
            post(super::sale_proposal_act_action),
        )
}
