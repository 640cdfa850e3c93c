pub mod routes;

use crate::common::CurrentUser;
use crate::negotiations::NegotiationActionRequest;
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use league_core::transfers::ProposalView;

pub async fn sale_open_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
    Path(player_id): Path<u32>,
) -> ApiResult<Json<Vec<ProposalView>>> {
    let bids = state.desk.open_sell_batch(user_id, player_id)?;

    Ok(Json(bids))
}

pub async fn sale_proposal_get_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
    Path(proposal_id): Path<u32>,
) -> ApiResult<Json<ProposalView>> {
    let view = state.desk.sell_proposal(user_id, proposal_id)?;

    Ok(Json(view))
}

pub async fn sale_proposal_act_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
    Path(proposal_id): Path<u32>,
    payload: Result<Json<NegotiationActionRequest>, JsonRejection>,
) -> ApiResult<Json<ProposalView>> {
    let Json(request) = payload?;

    let view = state.desk.act_on_sell_proposal(
        user_id,
        proposal_id,
        request.action,
        request.snapshot.as_ref(),
    )?;

    Ok(Json(view))
}
