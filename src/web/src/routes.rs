use crate::negotiations;
use crate::players;
use crate::sales;
use crate::teams;
use crate::transfers;
use crate::{ApiError, GameAppData};
use axum::Router;
use axum::http::Uri;

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<GameAppData> {
        Router::<GameAppData>::new()
            .merge(negotiations::routes::routes())
            .merge(sales::routes::routes())
            .merge(players::routes::routes())
            .merge(teams::routes::routes())
            .merge(transfers::routes::routes())
            .fallback(not_found_handler)
    }
}
