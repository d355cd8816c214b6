use microblog::config::{Command, Config, StoreKind, USAGE};
use microblog::domain::SystemClock;
use microblog::storage::{InMemoryStore, ShardedStore, Store};
use microblog::timeline::Microblog;
use microblog::timeline::handlers::router;
use microblog::timeline::protocol::*;
use std::sync::Arc;
use std::time::Duration;

const STATS_INTERVAL: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::from_env() {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage layer:
    let store: Arc<dyn Store> = match config.store {
        StoreKind::Global => {
            tracing::info!("Using in-memory store with a single global lock");
            Arc::new(InMemoryStore::new())
        }
        StoreKind::Sharded { shards } => {
            tracing::info!("Using sharded in-memory store ({} shards)", shards);
            Arc::new(ShardedStore::with_shards(shards))
        }
    };

    // 2. Service layer:
    let service = Arc::new(Microblog::new(store, Arc::new(SystemClock::new())));

    // 3. HTTP Router:
    let app = router(service.clone());

    // 4. Spawn stats reporter:
    let stats_service = service.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(STATS_INTERVAL);

        loop {
            interval.tick().await;
            let stats = stats_service.stats();
            tracing::info!(
                "Store stats: {} users, {} tweets, {} follow edges",
                stats.users,
                stats.tweets,
                stats.follow_edges
            );
        }
    });

    // 5. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Available endpoints:");
    tracing::info!("  POST {:<24} create a tweet", ENDPOINT_TWEETS);
    tracing::info!("  GET  {:<24} timeline of followed users", ENDPOINT_TIMELINE);
    tracing::info!("  GET  {:<24} tweets of ?user_id=", ENDPOINT_USER_TWEETS);
    tracing::info!("  POST {:<24} follow a user", ENDPOINT_FOLLOW);
    tracing::info!("  POST {:<24} unfollow a user", ENDPOINT_UNFOLLOW);
    tracing::info!("  GET  {:<24} users you follow", ENDPOINT_FOLLOWING);
    tracing::info!("  POST {:<24} register yourself", ENDPOINT_USERS);
    tracing::info!("  GET  {:<24} look up a user", ENDPOINT_USER);
    tracing::info!("  GET  {:<24} health check", ENDPOINT_HEALTH);
    tracing::info!("Identify yourself with the X-User-ID header. Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
