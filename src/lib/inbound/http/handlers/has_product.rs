/*
   Module `has_product` specifies an HTTP handler for checking whether a
   product is in a customer's [Wishlist].
*/

use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::domain::wishlist::models::value_objects::ProductId;
use crate::domain::wishlist::ports::WishlistService;
use crate::inbound::http::handlers::add_products::{require_customer_id, ApiError, ApiSuccess};
use crate::inbound::http::AppState;

/// The response body data field for a membership check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCheckResponseData {
    pub exists: bool,
}

/// Check whether a product is in a customer's [Wishlist].
///
/// # Responses
///
/// - 200 OK: the check ran; the body carries the membership flag.
/// - 404 Not Found: the customer has no wishlist.
pub async fn has_product<WS: WishlistService>(
    State(state): State<AppState<WS>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Path(product_id): Path<String>,
) -> Result<ApiSuccess<ProductCheckResponseData>, ApiError> {
    let path = uri.path().to_string();
    let customer_id = require_customer_id(&headers, &path)?;
    let product_id = ProductId::new(&product_id)
        .map_err(|e| ApiError::validation(format!("productId: {}", e), &path))?;

    state
        .wishlist_service
        .has_product(&customer_id, &product_id)
        .await
        .map_err(|e| ApiError::from_domain(e, &path))
        .map(|exists| ApiSuccess::new(StatusCode::OK, ProductCheckResponseData { exists }))
}
