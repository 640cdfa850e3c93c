pub mod routes;

use crate::common::CurrentUser;
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use league_core::transfers::PlayerCard;
use log::info;
use serde::Serialize;

#[derive(Serialize)]
pub struct RevalueResponse {
    pub updated: usize,
}

pub async fn player_get_action(
    State(state): State<GameAppData>,
    Path(player_id): Path<u32>,
) -> ApiResult<Json<PlayerCard>> {
    Ok(Json(state.desk.player_card(player_id)?))
}

pub async fn player_revalue_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<RevalueResponse>> {
    let updated = state.desk.revalue_players()?;

    info!("user {} recomputed market values, changed = {}", user_id, updated);

    Ok(Json(RevalueResponse { updated }))
}
