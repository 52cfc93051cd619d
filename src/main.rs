use std::{net::SocketAddr, process};

use company_supervisor::{
    framework::{
        env::Env,
        logger::{LoggerInterface, SystemLogger},
        AppState,
    },
    mk_router,
    routes::RouteTable,
};

#[tokio::main]
async fn main() {
    let logger = SystemLogger;

    let env = Env::new().unwrap_or_else(|e| {
        logger.danger(&e.to_string());
        process::exit(1)
    });
    let routes = RouteTable::standard().unwrap_or_else(|e| {
        logger.danger(&e.to_string());
        process::exit(1)
    });

    let listener = match tokio::net::TcpListener::bind(env.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            logger.danger(&format!("cannot bind {}: {}", env.listen_addr, e));
            process::exit(1)
        }
    };

    let router = mk_router(AppState::new(env.ambient(), routes));
    logger.info(&format!("listening on {}", env.listen_addr));

    if let Err(e) = axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        logger.danger(&e.to_string());
    }
}
