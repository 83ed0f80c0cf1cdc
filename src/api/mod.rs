//! A thin client for the catalog HTTP API.
//!
//! Every call issues exactly one request and always resolves to an [`ApiResponse`]: there are
//! no retries and no timeouts beyond what the underlying transport does.

mod envelope;
mod error;

pub use envelope::{ApiResponse, Envelope};
pub use error::ApiError;

use std::fmt::Display;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::models::{normalize_category, Category, Product, ProductDraft, ProductPatch};

/// The calls the client knows how to make. Used to label failures and log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchProducts,
    CreateProduct,
    UpdateProduct,
    UpdatePrice,
    DeleteProduct,
    FetchCategories,
    CreateCategory,
}

impl Operation {
    /// The prefix of every failure message produced by this operation.
    pub fn context(self) -> &'static str {
        match self {
            Operation::FetchProducts => "Error fetching products",
            Operation::CreateProduct => "Error creating product",
            Operation::UpdateProduct => "Error updating product",
            Operation::UpdatePrice => "Error updating price",
            Operation::DeleteProduct => "Error deleting product",
            Operation::FetchCategories => "Error fetching categories",
            Operation::CreateCategory => "Error creating category",
        }
    }

    /// The message used when the server reports a failure without saying why.
    pub fn fallback(self) -> &'static str {
        match self {
            Operation::FetchCategories => "Error loading categories",
            other => other.context(),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::FetchProducts => "fetch_products",
            Operation::CreateProduct => "create_product",
            Operation::UpdateProduct => "update_product",
            Operation::UpdatePrice => "update_price",
            Operation::DeleteProduct => "delete_product",
            Operation::FetchCategories => "fetch_categories",
            Operation::CreateCategory => "create_category",
        };
        f.write_str(name)
    }
}

/// Handle to the remote catalog. Cheap to clone; provided to the UI through context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: impl Display) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /products`
    pub async fn fetch_products(&self) -> ApiResponse<Vec<Product>> {
        let request = self.http.get(self.url("/products"));
        self.send(Operation::FetchProducts, request).await
    }

    /// `POST /products`
    pub async fn create_product(&self, draft: &ProductDraft) -> ApiResponse<Product> {
        let request = self.http.post(self.url("/products")).json(draft);
        self.send(Operation::CreateProduct, request).await
    }

    /// `PUT /products/{id}` with only the fields set in `patch`.
    pub async fn update_product(&self, id: &str, patch: &ProductPatch) -> ApiResponse<Product> {
        let request = self.http.put(self.url(format_args!("/products/{id}"))).json(patch);
        self.send(Operation::UpdateProduct, request).await
    }

    /// `PATCH /products/{id}/price`
    pub async fn update_product_price(&self, id: &str, price: f64) -> ApiResponse<Product> {
        let request = self
            .http
            .patch(self.url(format_args!("/products/{id}/price")))
            .json(&json!({ "price": price }));
        self.send(Operation::UpdatePrice, request).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: &str) -> ApiResponse<bool> {
        let request = self.http.delete(self.url(format_args!("/products/{id}")));
        self.send(Operation::DeleteProduct, request).await
    }

    /// `GET /categories`
    pub async fn fetch_categories(&self) -> ApiResponse<Vec<Category>> {
        let request = self.http.get(self.url("/categories"));
        self.send(Operation::FetchCategories, request).await
    }

    /// `POST /categories`. The name is trimmed and lower-cased before it is sent.
    pub async fn create_category(&self, name: &str) -> ApiResponse<Category> {
        let request = self
            .http
            .post(self.url("/categories"))
            .json(&json!({ "name": normalize_category(name) }));
        self.send(Operation::CreateCategory, request).await
    }

    async fn send<T: DeserializeOwned>(&self, operation: Operation, request: RequestBuilder) -> ApiResponse<T> {
        tracing::debug!(%operation, "sending catalog request");

        let response = match exchange(request, operation.fallback()).await {
            Ok(response) => response,
            Err(err) => ApiResponse::failure(format!("{}: {err}", operation.context())),
        };

        if let ApiResponse::Failure { message } = &response {
            tracing::warn!(%operation, %message, "catalog request failed");
        }

        response
    }
}

async fn exchange<T: DeserializeOwned>(request: RequestBuilder, fallback: &str) -> Result<ApiResponse<T>, ApiError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }

    let body = response.bytes().await?;
    let envelope: Envelope<T> = serde_json::from_slice(&body)?;
    ApiResponse::from_envelope(envelope, fallback)
}
