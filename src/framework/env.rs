use std::net::SocketAddr;

use super::{context::AmbientContext, system::AppError};
use crate::settings::{DEFAULT_COMPANY_ID, DEFAULT_LISTEN_ADDR, PLACEHOLDER_AUTH_TOKEN};

/// 起動時に読み込む設定. トークンを含むので Debug は付けない.
#[derive(Clone)]
pub struct Env {
    pub listen_addr: SocketAddr,
    pub company_id: i64,
    auth_token: String,
}

impl Env {
    /// プロセスの環境変数から読み込む.
    pub fn new() -> Result<Env, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照元から読み込む. 未設定の項目はデフォルト値になる.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Env, AppError> {
        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("LISTEN_ADDR is not a socket address: {e}")))?;

        let company_id = match lookup("COMPANY_ID") {
            Some(v) => v
                .trim()
                .parse::<i64>()
                .map_err(|e| AppError::Config(format!("COMPANY_ID is not an integer: {e}")))?,
            None => DEFAULT_COMPANY_ID,
        };

        let auth_token = lookup("AUTH_TOKEN").unwrap_or_else(|| PLACEHOLDER_AUTH_TOKEN.to_string());

        Ok(Env {
            listen_addr,
            company_id,
            auth_token,
        })
    }

    pub fn ambient(&self) -> AmbientContext {
        AmbientContext::new(self.company_id, self.auth_token.clone())
    }
}
