pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::{Path, State};
use league_core::transfers::TeamCard;

pub async fn team_get_action(
    State(state): State<GameAppData>,
    Path(team_id): Path<u32>,
) -> ApiResult<Json<TeamCard>> {
    Ok(Json(state.desk.team_card(team_id)?))
}
