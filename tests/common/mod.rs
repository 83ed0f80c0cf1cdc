//! An in-process stand-in for the catalog API, plus helpers for driving a `VirtualDom`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, put},
    Json, Router,
};
use catalog_ui::api::{ApiClient, Envelope};
use catalog_ui::models::{Category, Product};
use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use serde_json::Value;

/// A request the mock received, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

impl Recorded {
    pub fn new(method: &'static str, path: &str, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.to_string(),
            body,
        }
    }
}

#[derive(Default)]
pub struct MockCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub requests: Vec<Recorded>,

    /// `GET /products` answers 500.
    pub fail_products: bool,
    /// `GET /categories` answers 500.
    pub fail_categories: bool,
    /// `GET /categories` answers 200 with a body that is not JSON.
    pub garbage_categories: bool,
    /// `GET /categories` answers `{ status: false }` with no message.
    pub bare_category_failure: bool,
    /// `POST /categories` answers 500.
    pub fail_category_create: bool,
    /// `POST /products` answers `{ status: false, message }`.
    pub reject_product: Option<String>,
    /// Last number handed out to a created product or category.
    pub next_id: u32,
}

impl MockCatalog {
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub async fn spawn(self) -> MockApi {
        let state = Arc::new(Mutex::new(self));

        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route("/products/{id}", put(update_product).delete(delete_product))
            .route("/products/{id}/price", patch(update_price))
            .route("/categories", get(list_categories).post(create_category))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockApi {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    fn record(&mut self, method: &'static str, path: &str, body: Option<Value>) {
        self.requests.push(Recorded::new(method, path, body));
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

pub struct MockApi {
    pub base_url: String,
    state: Arc<Mutex<MockCatalog>>,
}

impl MockApi {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.state.lock().unwrap().categories.clone()
    }
}

type Shared = Arc<Mutex<MockCatalog>>;

fn not_found<T: serde::Serialize>() -> Response {
    (StatusCode::NOT_FOUND, Json(Envelope::<T>::failure("Product not found"))).into_response()
}

async fn list_products(State(state): State<Shared>) -> Response {
    let mut catalog = state.lock().unwrap();
    catalog.record("GET", "/products", None);

    if catalog.fail_products {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }
    Json(Envelope::success(catalog.products.clone())).into_response()
}

async fn create_product(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut catalog = state.lock().unwrap();
    catalog.record("POST", "/products", Some(body.clone()));

    if let Some(message) = catalog.reject_product.clone() {
        return Json(Envelope::<Product>::failure(message)).into_response();
    }

    let mut product: Product = match serde_json::from_value(body) {
        Ok(product) => product,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };
    product.id = Some(catalog.next_id("prod"));
    catalog.products.push(product.clone());

    (StatusCode::CREATED, Json(Envelope::success(product))).into_response()
}

async fn update_product(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut catalog = state.lock().unwrap();
    catalog.record("PUT", &format!("/products/{id}"), Some(body.clone()));

    let Some(product) = catalog.products.iter_mut().find(|p| p.id.as_deref() == Some(id.as_str())) else {
        return not_found::<Product>();
    };
    if let Some(name) = body["name"].as_str() {
        product.name = name.to_string();
    }
    if let Some(price) = body["price"].as_f64() {
        product.price = price;
    }
    if let Some(category) = body["category"].as_str() {
        product.category = category.to_string();
    }
    if let Some(image) = body["image"].as_str() {
        product.image = Some(image.to_string());
    }

    Json(Envelope::success(product.clone())).into_response()
}

async fn update_price(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut catalog = state.lock().unwrap();
    catalog.record("PATCH", &format!("/products/{id}/price"), Some(body.clone()));

    let Some(price) = body["price"].as_f64() else {
        return (StatusCode::BAD_REQUEST, "price is required").into_response();
    };
    let Some(product) = catalog.products.iter_mut().find(|p| p.id.as_deref() == Some(id.as_str())) else {
        return not_found::<Product>();
    };
    product.price = price;

    Json(Envelope::success(product.clone())).into_response()
}

async fn delete_product(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut catalog = state.lock().unwrap();
    catalog.record("DELETE", &format!("/products/{id}"), None);

    let before = catalog.products.len();
    catalog.products.retain(|p| p.id.as_deref() != Some(id.as_str()));
    if catalog.products.len() == before {
        return Json(Envelope::<bool>::failure("Product not found")).into_response();
    }

    Json(Envelope::success(true)).into_response()
}

async fn list_categories(State(state): State<Shared>) -> Response {
    let mut catalog = state.lock().unwrap();
    catalog.record("GET", "/categories", None);

    if catalog.fail_categories {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }
    if catalog.garbage_categories {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }
    if catalog.bare_category_failure {
        return Json(serde_json::json!({ "status": false })).into_response();
    }
    Json(Envelope::success(catalog.categories.clone())).into_response()
}

async fn create_category(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut catalog = state.lock().unwrap();
    catalog.record("POST", "/categories", Some(body.clone()));

    if catalog.fail_category_create {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }

    let category = Category {
        id: catalog.next_id("cat"),
        name: body["name"].as_str().unwrap_or_default().to_string(),
    };
    catalog.categories.push(category.clone());

    (StatusCode::CREATED, Json(Envelope::success(category))).into_response()
}

pub fn product(id: &str, name: &str, price: f64, category: &str) -> Product {
    Product {
        id: Some(id.to_string()),
        name: name.to_string(),
        price,
        category: category.to_string(),
        image: None,
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Let the dom's tasks run until the rendered html satisfies `done`, then return that html.
///
/// Gives up after a few seconds and returns whatever was rendered last.
pub async fn render_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    for _ in 0..40 {
        let html = dioxus_ssr::render(dom);
        if done(&html) {
            return html;
        }
        _ = tokio::time::timeout(Duration::from_millis(100), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
    dioxus_ssr::render(dom)
}
