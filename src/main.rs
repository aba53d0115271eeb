use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use sqlx::Executor;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_registry::{
    AppState,
    cache::{RedisUserCache, UserCache},
    config::Config,
    routes,
    store::{PgUserStore, UserStore},
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    // Lazy pool: the process must come up (and answer /live) even while the
    // database is unreachable; /ready reports the gap.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                conn.execute("SET application_name = 'user_registry';")
                    .await?;
                Ok(())
            })
        })
        .connect_lazy(&config.database_url())
        .expect("Invalid database URL");

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));

    let cache: Option<Arc<dyn UserCache>> = if config.cache_enabled() {
        tracing::info!("caching enabled for env '{}'", config.app_env);
        let client = redis::Client::open(config.redis_url())
            .expect("Failed to create Redis client");
        Some(Arc::new(RedisUserCache::new(Arc::new(client))))
    } else {
        tracing::info!("caching disabled for env '{}'", config.app_env);
        None
    };

    let state = AppState::new(config.clone(), store, cache);
    let router = routes::create_router(state);

    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Instance {} listening on {}", config.instance_id, addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
