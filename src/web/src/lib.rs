mod common;
mod error;
mod negotiations;
mod players;
mod routes;
mod sales;
mod teams;
mod transfers;

pub use common::USER_HEADER;
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use league_core::{MemoryStore, TransferDesk};
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueServer {
    data: GameAppData,
    addr: SocketAddr,
}

impl LeagueServer {
    pub fn new(data: GameAppData, addr: SocketAddr) -> Self {
        LeagueServer { data, addr }
    }

    pub fn router(data: GameAppData) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError(String::from("handler panicked")).into_response()
                    })),
            )
            .with_state(data)
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = Self::router(self.data.clone());

        let listener = TcpListener::bind(self.addr).await.map_err(|e| {
            error!("failed to bind to address {}: {}", self.addr, e);
            e
        })?;

        info!("listen at: http://{}", self.addr);

        axum::serve(listener, app).await
    }
}

pub struct GameAppData {
    pub desk: Arc<TransferDesk<MemoryStore>>,
}

impl GameAppData {
    pub fn new(desk: TransferDesk<MemoryStore>) -> Self {
        GameAppData {
            desk: Arc::new(desk),
        }
    }
}

impl Clone for GameAppData {
    fn clone(&self) -> Self {
        GameAppData {
            desk: Arc::clone(&self.desk),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode};
    use league_core::shared::CurrencyValue;
    use league_core::transfers::{FactorRange, NegotiationSettings};
    use league_core::{LeagueData, Player, Team};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const USER: &str = "1";

    fn player(id: u32, team_id: u32, value: i64) -> Player {
        Player::builder()
            .id(id)
            .name(format!("player {}", id))
            .team_id(team_id)
            .market_value(CurrencyValue::eur(value))
            .build()
            .unwrap()
    }

    fn app_with(settings: NegotiationSettings) -> Router {
        let mut teams = vec![Team::user(1, "Galindro FC", 1, 5_000_000)];
        teams.extend((2..=6).map(|id| Team::computer(id, format!("club {}", id), 10_000_000)));

        let players = vec![
            player(1, 1, 10_000_000),
            player(2, 1, 800_000),
            player(10, 2, 5_000_000),
            player(11, 2, 2_000_000),
        ];

        let store = MemoryStore::new(LeagueData::new(teams, players));
        let desk = TransferDesk::new(store, settings, StdRng::seed_from_u64(1));

        LeagueServer::router(GameAppData::new(desk))
    }

    fn app() -> Router {
        app_with(NegotiationSettings {
            swap_chance: 0.0,
            initial_patience: 1.0,
            patience_decay: FactorRange::fixed(0.0),
            ..NegotiationSettings::default()
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri).header(USER_HEADER, USER);

        let body = match body {
            Some(body) => {
                request = request.header("content-type", "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    #[tokio::test]
    async fn test_missing_user_header() {
        let app = app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/negotiations/10")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_revalue_requires_user() {
        let app = app();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/players/revalue")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let (status, body) = send(&app, Method::POST, "/api/players/revalue", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["updated"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_open_negotiation_twice() {
        let app = app();

        let (status, first) = send(&app, Method::POST, "/api/negotiations/10", None).await;
        let (_, second) = send(&app, Method::POST, "/api/negotiations/10", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(first["status"], "open");
        assert_eq!(first["direction"], "user_buys");
        assert_eq!(first["counterpart"]["team_id"], 2);
        assert!(first["cash"]["amount"].as_i64().unwrap() >= 6_250_000);
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/api/negotiations/1", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body["error"].is_string());

        let (status, _) = send(&app, Method::POST, "/api/negotiations/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let action = json!({ "action": "accept" });
        let (status, _) = send(&app, Method::POST, "/api/negotiations/11/actions", Some(action)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, Method::POST, "/api/negotiations/11/actions", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/api/unknown", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_buy_flow_with_insufficient_funds() {
        let app = app();

        send(&app, Method::POST, "/api/negotiations/10", None).await;

        let accept = json!({ "action": "accept" });
        let (status, body) = send(&app, Method::POST, "/api/negotiations/10/actions", Some(accept)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "accepted");

        let (status, _) = send(&app, Method::POST, "/api/negotiations/10/confirm", Some(json!({}))).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);

        let (_, team) = send(&app, Method::GET, "/api/teams/1", None).await;
        assert_eq!(team["finance"]["balance"], 5_000_000);
        assert_eq!(team["players"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_buy_flow_confirmed() {
        let app = app_with(NegotiationSettings {
            swap_chance: 0.0,
            asking_premium: FactorRange::fixed(1.5),
            ..NegotiationSettings::default()
        });

        let (_, opened) = send(&app, Method::POST, "/api/negotiations/11", None).await;
        let snapshot = json!({
            "proposal_id": opened["id"],
            "revision": opened["revision"],
            "cash": opened["cash"]["amount"],
        });

        let accept = json!({ "action": "accept", "snapshot": snapshot });
        send(&app, Method::POST, "/api/negotiations/11/actions", Some(accept)).await;

        let confirm = json!({ "snapshot": snapshot });
        let (status, transfer) =
            send(&app, Method::POST, "/api/negotiations/11/confirm", Some(confirm)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(transfer["fee"]["amount"], 3_000_000);
        assert_eq!(transfer["to_team_id"], 1);

        let (_, history) = send(&app, Method::GET, "/api/transfers", None).await;
        assert_eq!(history.as_array().unwrap().len(), 1);

        let (_, player) = send(&app, Method::GET, "/api/players/11", None).await;
        assert_eq!(player["team_id"], 1);
        assert!(player["yearly_wage_rise"].is_number());
    }

    #[tokio::test]
    async fn test_exhausted_negotiation_is_gone() {
        let app = app_with(NegotiationSettings {
            initial_patience: 0.0,
            ..NegotiationSettings::default()
        });

        send(&app, Method::POST, "/api/negotiations/10", None).await;

        let counter = json!({ "action": "counter" });
        let (status, _) = send(&app, Method::POST, "/api/negotiations/10/actions", Some(counter)).await;

        assert_eq!(status, StatusCode::GONE);
    }

    #[tokio::test]
    async fn test_sell_flow() {
        let app = app();

        let (status, bids) = send(&app, Method::POST, "/api/sales/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let bids = bids.as_array().unwrap().clone();
        assert!((3..=5).contains(&bids.len()));

        let chosen = bids[0]["id"].as_u64().unwrap();
        let sibling = bids[1]["id"].as_u64().unwrap();
        let cash = bids[0]["cash"]["amount"].as_i64().unwrap();

        let accept = json!({ "action": "accept" });
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/api/sales/proposals/{}/actions", chosen),
            Some(accept),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, Method::GET, &format!("/api/sales/proposals/{}", sibling), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, Method::POST, "/api/sales/1/confirm", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, team) = send(&app, Method::GET, "/api/teams/1", None).await;
        assert_eq!(team["finance"]["balance"], 5_000_000 + cash);
        assert_eq!(team["summary"]["player_count"], 1);
    }
}
