use sqlx::postgres::PgPoolOptions;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};
use tokio::time::{sleep, Duration};

use wishlist_hexarch_rust::domain::wishlist::models::value_objects::{CustomerId, ProductId};
use wishlist_hexarch_rust::domain::wishlist::models::wishlist::{AddProductsRequest, Wishlist};
use wishlist_hexarch_rust::domain::wishlist::ports::{WishlistRepository, WishlistService};
use wishlist_hexarch_rust::domain::wishlist::service::Service;
use wishlist_hexarch_rust::outbound::connect::PostgresClient;
use wishlist_hexarch_rust::outbound::params::ConnectionParams;

// Starts a PostgreSQL container, runs the migrations and returns a connected
// client. The container handle must stay alive for the duration of the test.
async fn start_postgres() -> (ContainerAsync<GenericImage>, PostgresClient) {
    let container = GenericImage::new("postgres", "latest")
        .with_wait_for(WaitFor::message_on_stdout(
            "database system is ready to accept connections",
        ))
        .with_exposed_port(5432.tcp())
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_USER", "postgres")
        .with_env_var("POSTGRES_DB", "postgres")
        .start()
        .await
        .expect("Failed to start container");

    let host_port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get host port");

    // Give the database a moment to fully start up.
    sleep(Duration::from_secs(1)).await;

    let params = ConnectionParams {
        host: "localhost".to_string(),
        port: host_port,
        dbname: "postgres".to_string(),
        user: "postgres".to_string(),
        password: "postgres".to_string(),
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&params.connect_string())
        .await
        .expect("Failed to connect to PostgreSQL");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let client = PostgresClient::new(&params)
        .await
        .expect("Failed to create PostgresClient");

    (container, client)
}

fn customer(id: &str) -> CustomerId {
    CustomerId::new(id).expect("valid customer id")
}

fn product(id: &str) -> ProductId {
    ProductId::new(id).expect("valid product id")
}

#[tokio::test]
async fn test_wishlist_round_trip() {
    let (_container, client) = start_postgres().await;

    let wishlist = Wishlist::new(
        customer("integration-customer"),
        vec![product("prod-2"), product("prod-1")],
    );

    let saved = client.save(&wishlist).await.expect("Failed to save wishlist");
    assert_eq!(saved, wishlist);

    let found = client
        .find_by_customer_id(&customer("integration-customer"))
        .await
        .expect("Failed to find wishlist")
        .expect("Wishlist should exist");

    // The full product set and the customer id must round-trip exactly.
    assert_eq!(found.customer_id().as_str(), "integration-customer");
    assert_eq!(found.products(), wishlist.products());

    // A customer that never saved anything has no wishlist.
    let not_found = client
        .find_by_customer_id(&customer("non-existent"))
        .await
        .expect("Failed to query non-existent wishlist");
    assert!(not_found.is_none());
}

#[tokio::test]
async fn test_save_is_last_writer_wins() {
    let (_container, client) = start_postgres().await;

    client
        .save(&Wishlist::new(
            customer("integration-customer"),
            vec![product("old-1"), product("old-2")],
        ))
        .await
        .expect("Failed to save first wishlist");

    client
        .save(&Wishlist::new(
            customer("integration-customer"),
            vec![product("new-1")],
        ))
        .await
        .expect("Failed to save second wishlist");

    let found = client
        .find_by_customer_id(&customer("integration-customer"))
        .await
        .expect("Failed to find wishlist")
        .expect("Wishlist should exist");

    assert_eq!(found.products(), vec![product("new-1")]);

    let row_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wishlists")
        .fetch_one(client.pool())
        .await
        .expect("Failed to query wishlist count");
    assert_eq!(row_count, 1, "Upserts must not create duplicate rows");
}

#[tokio::test]
async fn test_service_operations_against_postgres() {
    let (_container, client) = start_postgres().await;
    let service = Service::new(client, 20);

    // First add creates the wishlist, deduplicating the incoming batch.
    let req = AddProductsRequest::new(
        customer("integration-customer"),
        vec![product("dup"), product("dup"), product("prod-1")],
    );
    let wishlist = service.add_products(&req).await.expect("Failed to add products");
    assert_eq!(wishlist.len(), 2);

    // Membership checks read the persisted state.
    let exists = service
        .has_product(&customer("integration-customer"), &product("prod-1"))
        .await
        .expect("Failed to check product");
    assert!(exists);

    // Removing a member persists the smaller set.
    let wishlist = service
        .remove_product(&customer("integration-customer"), &product("dup"))
        .await
        .expect("Failed to remove product");
    assert_eq!(wishlist.products(), vec![product("prod-1")]);

    let wishlist = service
        .get_all_products_by_customer(&customer("integration-customer"))
        .await
        .expect("Failed to get products");
    assert_eq!(wishlist.products(), vec![product("prod-1")]);
}
