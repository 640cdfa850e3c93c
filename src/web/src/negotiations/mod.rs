pub mod routes;

use crate::common::CurrentUser;
use crate::{ApiResult, GameAppData};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use league_core::transfers::{CompletedTransfer, NegotiationAction, ProposalSnapshot, ProposalView};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct NegotiationActionRequest {
    pub action: NegotiationAction,
    /// The proposal as the client last saw it.
    #[serde(default)]
    pub snapshot: Option<ProposalSnapshot>,
}

#[derive(Deserialize)]
pub struct TransferConfirmRequest {
    #[serde(default)]
    pub snapshot: Option<ProposalSnapshot>,
}

pub async fn negotiation_open_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
    Path(player_id): Path<u32>,
) -> ApiResult<Json<ProposalView>> {
    let view = state.desk.open_or_get_negotiation(user_id, player_id)?;

    Ok(Json(view))
}

pub async fn negotiation_act_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
    Path(player_id): Path<u32>,
    payload: Result<Json<NegotiationActionRequest>, JsonRejection>,
) -> ApiResult<Json<ProposalView>> {
    let Json(request) = payload?;

    let view = state.desk.act_on_negotiation(
        user_id,
        player_id,
        request.action,
        request.snapshot.as_ref(),
    )?;

    Ok(Json(view))
}

/// Executes the accepted deal for the player, bought or sold.
pub async fn negotiation_confirm_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
    Path(player_id): Path<u32>,
    payload: Result<Json<TransferConfirmRequest>, JsonRejection>,
) -> ApiResult<Json<CompletedTransfer>> {
    let Json(request) = payload?;

    let transfer = state
        .desk
        .confirm_transfer(user_id, player_id, request.snapshot.as_ref())?;

    Ok(Json(transfer))
}

pub async fn negotiation_cancel_action(
    State(state): State<GameAppData>,
    CurrentUser(user_id): CurrentUser,
    Path(player_id): Path<u32>,
) -> ApiResult<StatusCode> {
    state.desk.cancel_negotiation(user_id, player_id)?;

    Ok(StatusCode::NO_CONTENT)
}
