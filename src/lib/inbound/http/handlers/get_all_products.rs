/*
   Module `get_all_products` specifies an HTTP handler for listing the full
   product set of a customer's [Wishlist].
*/

use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, StatusCode};

use crate::domain::wishlist::ports::WishlistService;
use crate::inbound::http::handlers::add_products::{
    require_customer_id, ApiError, ApiSuccess, WishlistResponseData,
};
use crate::inbound::http::AppState;

/// List all products in a customer's [Wishlist].
///
/// # Responses
///
/// - 200 OK: the body carries the full product set.
/// - 404 Not Found: the customer has no wishlist.
pub async fn get_all_products<WS: WishlistService>(
    State(state): State<AppState<WS>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<ApiSuccess<WishlistResponseData>, ApiError> {
    let path = uri.path().to_string();
    let customer_id = require_customer_id(&headers, &path)?;

    state
        .wishlist_service
        .get_all_products_by_customer(&customer_id)
        .await
        .map_err(|e| ApiError::from_domain(e, &path))
        .map(|ref wishlist| ApiSuccess::new(StatusCode::OK, wishlist.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{HeaderValue, StatusCode};

    use super::*;
    use crate::domain::wishlist::models::value_objects::{CustomerId, ProductId};
    use crate::domain::wishlist::models::wishlist::{AddProductsRequest, Wishlist, WishlistError};
    use crate::inbound::http::handlers::add_products::CUSTOMER_ID_HEADER;

    #[derive(Clone)]
    struct MockWishlistService {
        get_all_result: Arc<std::sync::Mutex<Option<Result<Wishlist, WishlistError>>>>,
    }

    impl WishlistService for MockWishlistService {
        async fn add_products(&self, _: &AddProductsRequest) -> Result<Wishlist, WishlistError> {
            Err(WishlistError::Unknown(anyhow::anyhow!("Not implemented")))
        }

        async fn remove_product(
            &self,
            _: &CustomerId,
            _: &ProductId,
        ) -> Result<Wishlist, WishlistError> {
            Err(WishlistError::Unknown(anyhow::anyhow!("Not implemented")))
        }

        async fn has_product(&self, _: &CustomerId, _: &ProductId) -> Result<bool, WishlistError> {
            Err(WishlistError::Unknown(anyhow::anyhow!("Not implemented")))
        }

        async fn get_all_products_by_customer(
            &self,
            _: &CustomerId,
        ) -> Result<Wishlist, WishlistError> {
            let mut guard = self.get_all_result.lock().unwrap();
            guard.take().unwrap_or_else(|| {
                Err(WishlistError::Unknown(anyhow::anyhow!(
                    "Mock get_all_products_by_customer result not set"
                )))
            })
        }
    }

    fn service_returning(
        result: Result<Wishlist, WishlistError>,
    ) -> axum::extract::State<AppState<MockWishlistService>> {
        axum::extract::State(AppState {
            wishlist_service: Arc::new(MockWishlistService {
                get_all_result: Arc::new(std::sync::Mutex::new(Some(result))),
            }),
        })
    }

    fn request_uri() -> OriginalUri {
        OriginalUri("/v1/wishlists/products".parse().unwrap())
    }

    fn headers_with_customer(customer_id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CUSTOMER_ID_HEADER,
            HeaderValue::from_str(customer_id).unwrap(),
        );
        headers
    }

    fn mock_wishlist(products: &[&str]) -> Wishlist {
        Wishlist::new(
            CustomerId::new("customer-1").unwrap(),
            products.iter().map(|id| ProductId::new(id).unwrap()),
        )
    }

    #[tokio::test]
    async fn test_get_all_products_success() {
        // Arrange
        let state = service_returning(Ok(mock_wishlist(&["p1", "p2", "p3"])));

        // Act
        let actual = get_all_products(state, request_uri(), headers_with_customer("customer-1"))
            .await;

        // Assert
        let expected = ApiSuccess::new(
            StatusCode::OK,
            WishlistResponseData {
                products: vec!["p1".to_string(), "p2".to_string(), "p3".to_string()],
            },
        );

        assert!(actual.is_ok());
        assert_eq!(actual.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_get_all_products_wishlist_not_found() {
        // Arrange
        let state = service_returning(Err(WishlistError::NotFound {
            customer_id: "non-existent".to_string(),
        }));

        // Act
        let result = get_all_products(state, request_uri(), headers_with_customer("non-existent"))
            .await;

        // Assert
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_all_products_missing_customer_header() {
        // Arrange
        let state = service_returning(Ok(mock_wishlist(&[])));

        // Act
        let result = get_all_products(state, request_uri(), HeaderMap::new()).await;

        // Assert
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ApiError::MissingHeader { .. }));
    }
}
