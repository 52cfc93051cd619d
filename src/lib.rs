pub mod framework;
pub mod routes;
pub mod settings;
pub mod views;

use std::time::Duration;

use axum::{
    extract,
    http::{StatusCode, Uri},
    middleware,
    response::Response,
    routing, Router,
};
use chrono::Utc;
use framework::{
    cors,
    logger::LoggerInterface,
    system::AppError,
    AppState, ReqScopedState,
};
use maud::Markup;
use routes::Resolution;
use settings::TIMEOUT_DURATION;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer};
use ulid::Ulid;

/// ルート表からルーターを組み立てる. 一致しないパスはエラーページになる.
pub fn mk_router(state: AppState) -> Router {
    let mut router = Router::new();
    for entry in state.routes.entries() {
        router = router.route(entry.path, routing::get(page_handler));
    }

    with_error_boundary(router.fallback(page_handler))
        .layer(TimeoutLayer::new(Duration::from_secs(TIMEOUT_DURATION)))
        .layer(cors::mk_cors_layer())
        .layer(middleware::from_fn(log))
        .layer(middleware::from_fn(setup))
        .with_state(state)
}

/// panic したページをエラーページに差し替える.
pub fn with_error_boundary<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(CatchPanicLayer::custom(views::error::panic_response))
}

async fn page_handler(
    extract::State(state): extract::State<AppState>,
    req_state: ReqScopedState,
    uri: Uri,
) -> Result<Markup, AppError> {
    let logger = req_state.logger();
    match state.routes.resolve(uri.path()) {
        Resolution::Matched(entry) => {
            logger.debug(&format!("rendering {:?}", entry.page));
            views::render(entry.page, &state.ambient).map_err(|e| {
                logger.danger(&e.to_string());
                e
            })
        }
        Resolution::Fallback => {
            logger.warning(&format!("no route for {}", uri.path()));
            Err(AppError::NotFound(uri.path().to_string()))
        }
    }
}

async fn setup(
    mut req: extract::Request,
    next: middleware::Next,
) -> Result<Response, StatusCode> {
    let req_scoped_state = ReqScopedState::new(Ulid::new(), &req);
    req.extensions_mut().insert(req_scoped_state);

    Ok(next.run(req).await)
}

async fn log(req: extract::Request, next: middleware::Next) -> Result<Response, StatusCode> {
    let item = req
        .extensions()
        .get::<ReqScopedState>()
        .cloned()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    item.logger().info(&format!("hi, {}", item.ts));
    let r = next.run(req).await;
    item.logger()
        .info(&format!("bye, {} status={}", Utc::now(), r.status().as_u16()));
    Ok(r)
}
