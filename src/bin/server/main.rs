use anyhow::Context;
use wishlist_hexarch_rust::config::AppConfig;
use wishlist_hexarch_rust::domain::wishlist::service::Service;
use wishlist_hexarch_rust::inbound::http::{HttpServer, HttpServerConfig};
use wishlist_hexarch_rust::outbound::connect::PostgresClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A minimal tracing middleware for request logging.
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;

    // Wait for database to be ready
    let mut retries = 5;
    let client = loop {
        match PostgresClient::new(&config.database).await {
            Ok(client) => break client,
            Err(e) if retries > 0 => {
                tracing::warn!("failed to connect to database, retrying... ({})", e);
                retries -= 1;
                tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
            }
            Err(e) => return Err(e),
        }
    };

    sqlx::migrate!("./migrations")
        .run(client.pool())
        .await
        .context("failed to run migrations")?;

    let wishlist_service = Service::new(client, config.max_products);

    let server_config = HttpServerConfig {
        port: &config.server_port,
    };
    let http_server = HttpServer::new(wishlist_service, server_config).await?;
    http_server.run().await
}
