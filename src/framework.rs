pub mod context;
pub mod cors;
pub mod env;
pub mod logger;
pub mod system;

use self::context::AmbientContext;
use crate::routes::RouteTable;
use axum::{
    async_trait,
    extract::{self, ConnectInfo},
    http::{request::Parts, StatusCode},
};
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use std::{net::SocketAddr, sync::Arc};
use ulid::Ulid;

/// アプリケーション全体で共有する状態. 起動時に組み立て, 以降は読み取りのみ.
#[derive(Clone, Debug)]
pub struct AppState {
    pub ambient: Arc<AmbientContext>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(ambient: AmbientContext, routes: RouteTable) -> Self {
        Self {
            ambient: Arc::new(ambient),
            routes: Arc::new(routes),
        }
    }
}

/// リクエストごとに分離された状態.
#[derive(Clone, Debug)]
pub struct ReqScopedState {
    pub ts: DateTime<Utc>,
    pub req_id: Ulid,
    pub log_member: Map<String, Value>,
}

impl ReqScopedState {
    pub fn new(req_id: Ulid, req: &extract::Request) -> Self {
        let method = req.method();
        let uri = req.uri();

        let ts = DateTime::from_timestamp_millis(req_id.timestamp_ms() as i64)
            .unwrap_or_else(Utc::now);
        let mut pairs = vec![
            ("req_id", req_id.to_string()),
            ("timestamp", ts.to_rfc3339()),
            ("uri", uri.to_string()),
            ("method", method.to_string()),
        ];

        // テストなど接続情報がない場合は載せない
        if let Some(ConnectInfo(remote_addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
            pairs.push(("remote_addr", remote_addr.to_string()));
        }

        let header_keys = vec!["user-agent", "referer"];

        for key in header_keys {
            if let Some(v) = req.headers().get(key) {
                pairs.push((key, v.to_str().unwrap_or("parse error").to_string()));
            }
        }

        Self {
            req_id,
            ts,
            log_member: Map::from_iter(pairs.iter().map(|(k, v)| (k.to_string(), json!(v)))),
        }
    }

    pub fn logger(&self) -> logger::Logger {
        logger::Logger(self)
    }
}

#[async_trait]
impl<S> extract::FromRequestParts<S> for ReqScopedState
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ReqScopedState>()
            .cloned()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};

    use super::*;

    #[test]
    fn log_member_describes_the_request() {
        let req = Request::builder()
            .method("GET")
            .uri("/company")
            .header("user-agent", "test-agent")
            .body(Body::empty())
            .unwrap();
        let req_id = Ulid::new();

        let state = ReqScopedState::new(req_id, &req);

        assert_eq!(state.log_member["req_id"], json!(req_id.to_string()));
        assert_eq!(state.log_member["uri"], json!("/company"));
        assert_eq!(state.log_member["method"], json!("GET"));
        assert_eq!(state.log_member["user-agent"], json!("test-agent"));
        assert!(!state.log_member.contains_key("remote_addr"));
        assert_eq!(state.ts.timestamp_millis() as u64, req_id.timestamp_ms());
    }
}
