use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::framework::{
    logger::{LoggerInterface, SystemLogger},
    system::AppError,
};

/// 汎用のエラー表示.
pub fn view(status: StatusCode) -> Markup {
    html! {
        section id="error-page" {
            h1 { "Oops!" }
            p { "Sorry, an unexpected error has occurred." }
            p { i { (status.canonical_reason().unwrap_or("Unknown Error")) } }
        }
    }
}

/// `CatchPanicLayer` 用. panic したページもエラーページに差し替える.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    SystemLogger.danger(&format!("view panicked: {detail}"));

    AppError::Render(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_the_status_reason() {
        let markup = view(StatusCode::NOT_FOUND).into_string();

        assert!(markup.contains("Oops!"));
        assert!(markup.contains("<i>Not Found</i>"));
    }

    #[test]
    fn panic_becomes_internal_server_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
