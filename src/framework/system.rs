use std::error::Error;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::views::{error, layout};

#[derive(Debug)]
pub enum AppError {
    /// どのルートにも一致しないパス
    NotFound(String),
    /// ページの描画に失敗した
    Render(String),
    Config(String),
    /// ルート表の定義が不正
    RouteTable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Render(_) | AppError::Config(_) | AppError::RouteTable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// ルーターの境界でエラーページに差し替える. レイアウトは残す.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, layout::frame("Error", error::view(status))).into_response()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(path) => write!(f, "Not found: {}", path),
            AppError::Render(msg) => write!(f, "Render failed: {}", msg),
            AppError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            AppError::RouteTable(msg) => write!(f, "Invalid route table: {}", msg),
        }
    }
}

impl Error for AppError {}
