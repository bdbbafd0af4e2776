/*
   Module `add_products` specifies an HTTP handler for adding products to a
   customer's [Wishlist], and the associated data structures. The API
   response/error types shared by all wishlist handlers are also defined
   here.
*/

use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::wishlist::models::value_objects::{CustomerId, ProductBatch, ProductBatchError};
use crate::domain::wishlist::models::wishlist::{AddProductsRequest, Wishlist, WishlistError};
use crate::domain::wishlist::ports::WishlistService;
use crate::inbound::http::AppState;

/// Name of the request header carrying the customer identity.
pub const CUSTOMER_ID_HEADER: &str = "customerId";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub(crate) fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound { message: String, path: String },
    MaxSizeExceeded { message: String, path: String },
    ValidationError { message: String, path: String },
    MissingHeader { message: String, path: String },
    InternalServerError { message: String, path: String },
}

impl ApiError {
    /// Translate a domain error into its API representation, attaching the
    /// originating request path.
    pub(crate) fn from_domain(e: WishlistError, path: &str) -> Self {
        let path = path.to_string();
        match e {
            WishlistError::NotFound { customer_id } => Self::NotFound {
                message: format!("wishlist not found for customer id: {}", customer_id),
                path,
            },
            WishlistError::MaxSizeExceeded { max_products } => Self::MaxSizeExceeded {
                message: format!(
                    "cannot add more than {} products to the wishlist",
                    max_products
                ),
                path,
            },
            WishlistError::Unknown(cause) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError {
                    message: "Internal server error".to_string(),
                    path,
                }
            }
        }
    }

    pub(crate) fn validation(message: String, path: &str) -> Self {
        Self::ValidationError {
            message,
            path: path.to_string(),
        }
    }

    pub(crate) fn missing_header(header: &str, path: &str) -> Self {
        Self::MissingHeader {
            message: format!("Required request header '{}' is missing", header),
            path: path.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound { message, .. } => write!(f, "Not Found: {}", message),
            ApiError::MaxSizeExceeded { message, .. } => {
                write!(f, "Unprocessable Entity: {}", message)
            }
            ApiError::ValidationError { message, .. } => write!(f, "Bad Request: {}", message),
            ApiError::MissingHeader { message, .. } => write!(f, "Bad Request: {}", message),
            ApiError::InternalServerError { message, .. } => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        match self {
            NotFound { message, path } => {
                error_response(StatusCode::NOT_FOUND, "Wishlist Not Found", message, path)
            }
            MaxSizeExceeded { message, path } => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Wishlist Max Size Exceeded",
                message,
                path,
            ),
            ValidationError { message, path } => error_response(
                StatusCode::BAD_REQUEST,
                "Validation Error",
                message,
                path,
            ),
            MissingHeader { message, path } => error_response(
                StatusCode::BAD_REQUEST,
                "Missing Request Header",
                message,
                path,
            ),
            InternalServerError { message, path } => {
                tracing::error!("{}", message);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Internal server error".to_string(),
                    path,
                )
            }
        }
    }
}

fn error_response(status: StatusCode, error: &str, message: String, path: String) -> Response {
    (status, Json(ApiErrorBody::new(status, error, message, path))).into_response()
}

/// Generic response structure shared by all successful API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

/// The response format for all error responses: numeric status, short error
/// label, human-readable message, originating path and timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ApiErrorBody {
    pub fn new(status: StatusCode, error: &str, message: String, path: String) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: error.to_string(),
            message,
            path,
        }
    }
}

/// Extracts the required customer identity header.
pub(crate) fn require_customer_id(headers: &HeaderMap, path: &str) -> Result<CustomerId, ApiError> {
    let Some(value) = headers.get(CUSTOMER_ID_HEADER) else {
        return Err(ApiError::missing_header(CUSTOMER_ID_HEADER, path));
    };
    let raw = value
        .to_str()
        .map_err(|_| ApiError::validation("customerId: must be valid text".to_string(), path))?;
    CustomerId::new(raw)
        .map_err(|e| ApiError::validation(format!("customerId: {}", e), path))
}

/// The body of a [Wishlist] add-products request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddProductsHttpRequestBody {
    pub products: Vec<String>,
}

impl AddProductsHttpRequestBody {
    /// Converts the HTTP request body into a domain request.
    fn try_into_domain(
        self,
        customer_id: CustomerId,
    ) -> Result<AddProductsRequest, ProductBatchError> {
        let products = ProductBatch::new(&self.products)?;
        Ok(AddProductsRequest::new(customer_id, products.into_inner()))
    }
}

/// The response body data field carrying a wishlist's product set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistResponseData {
    pub products: Vec<String>,
}

impl From<&Wishlist> for WishlistResponseData {
    fn from(wishlist: &Wishlist) -> Self {
        Self {
            products: wishlist
                .products()
                .into_iter()
                .map(|product| product.into_inner())
                .collect(),
        }
    }
}

/// Add products to a customer's [Wishlist], creating it on first add.
///
/// # Responses
///
/// - 200 OK: the products were added.
/// - 400 Bad Request: empty product list or missing customer header.
/// - 422 Unprocessable Entity: the configured wishlist size limit would be
///   exceeded.
pub async fn add_products<WS: WishlistService>(
    State(state): State<AppState<WS>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Json(body): Json<AddProductsHttpRequestBody>,
) -> Result<ApiSuccess<WishlistResponseData>, ApiError> {
    let path = uri.path().to_string();
    let customer_id = require_customer_id(&headers, &path)?;
    let domain_req = body
        .try_into_domain(customer_id)
        .map_err(|e| ApiError::validation(format!("products: {}", e), &path))?;

    state
        .wishlist_service
        .add_products(&domain_req)
        .await
        .map_err(|e| ApiError::from_domain(e, &path))
        .map(|ref wishlist| ApiSuccess::new(StatusCode::OK, wishlist.into()))
}
