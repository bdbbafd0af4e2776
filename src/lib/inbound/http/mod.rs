/*
   Module `http` exposes the wishlist domain over HTTP. The server is generic
   over the [WishlistService] port; handlers live in `handlers`.
*/

pub mod handlers;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net;
use tower_http::trace::TraceLayer;

use crate::domain::wishlist::ports::WishlistService;
use crate::inbound::http::handlers::{add_products, get_all_products, has_product, remove_product};

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

/// The global application state shared between all request handlers.
#[derive(Debug, Clone)]
pub struct AppState<WS: WishlistService> {
    pub wishlist_service: Arc<WS>,
}

/// The application's HTTP server. The underlying HTTP package is opaque to
/// module consumers.
pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        wishlist_service: impl WishlistService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            });

        let state = AppState {
            wishlist_service: Arc::new(wishlist_service),
        };

        let router = Router::new()
            .nest("/v1/wishlists", api_routes())
            .layer(trace_layer)
            .with_state(state);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::debug!("listening on {}", addr);

        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

fn api_routes<WS: WishlistService>() -> Router<AppState<WS>> {
    Router::new()
        .route(
            "/products",
            post(add_products::add_products::<WS>).get(get_all_products::get_all_products::<WS>),
        )
        .route(
            "/products/{product_id}",
            delete(remove_product::remove_product::<WS>),
        )
        .route(
            "/products/{product_id}/exists",
            get(has_product::has_product::<WS>),
        )
}
