pub mod routes;

use crate::GameAppData;
use axum::Json;
use axum::extract::State;
use league_core::transfers::CompletedTransfer;

pub async fn transfer_list_action(State(state): State<GameAppData>) -> Json<Vec<CompletedTransfer>> {
    Json(state.desk.transfer_history())
}
