use dioxus::prelude::*;

use crate::api::{ApiClient, ApiResponse};
use crate::components::{use_alerts, Alerts, ProductCard};
use crate::hooks::use_categories;
use crate::models::{capitalize, filter_products, remove_product, replace_product, Product};

/// Ask for confirmation, then delete product `id` and drop it from `products`.
///
/// A failed delete leaves `products` alone and shows the error instead.
pub async fn delete_with_confirmation(
    api: ApiClient,
    mut alerts: Alerts,
    mut products: Signal<Vec<Product>>,
    id: String,
) {
    if !alerts.confirm_delete().await {
        return;
    }

    match api.delete_product(&id).await {
        ApiResponse::Success { .. } => {
            remove_product(&mut products.write(), &id);
            tracing::info!(%id, "deleted product");
            alerts.show_success("Product deleted successfully!");
        }
        ApiResponse::Failure { message } => alerts.show_error(message),
    }
}

/// The product list: search box, category filter and one card per product.
#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();
    let categories = use_categories();
    let mut alerts = use_alerts();

    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);

    let loader = api.clone();
    use_future(move || {
        let api = loader.clone();
        async move {
            loading.set(true);
            match api.fetch_products().await {
                ApiResponse::Success { data, .. } => {
                    tracing::debug!(count = data.len(), "loaded products");
                    products.set(data);
                    error.set(None);
                }
                ApiResponse::Failure { message } => error.set(Some(message)),
            }
            loading.set(false);
        }
    });

    let visible = use_memo(move || {
        filter_products(&products.read(), &search.read(), &category.read())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let on_update = move |updated: Product| {
        replace_product(&mut products.write(), updated);
        alerts.show_success("Price updated successfully!");
    };

    let on_delete = EventHandler::new(move |id: String| {
        let api = api.clone();
        delete_with_confirmation(api, alerts, products, id)
    });

    if loading() {
        return rsx! {
            div { class: "status", "Loading..." }
        };
    }

    if let Some(message) = error() {
        return rsx! {
            div { class: "status text-danger", "{message}" }
        };
    }

    let filter_options = categories
        .list()
        .into_iter()
        .map(|category| (category.id, capitalize(&category.name), category.name))
        .collect::<Vec<_>>();

    let cards = visible
        .read()
        .iter()
        .map(|product| (product.id.clone().unwrap_or_default(), product.clone()))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "filters",
            input {
                r#type: "text",
                class: "form-control",
                placeholder: "Search products...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
            select {
                class: "form-select",
                value: "{category}",
                onchange: move |e| category.set(e.value()),
                option { value: "", "All categories" }
                for (id, label, name) in filter_options {
                    option { key: "{id}", value: "{name}", "{label}" }
                }
            }
        }

        if cards.is_empty() {
            p { class: "empty", "No products found." }
        }

        div { class: "product-grid",
            for (key, product) in cards {
                ProductCard {
                    key: "{key}",
                    product,
                    on_update,
                    on_delete,
                    on_error: move |message: String| alerts.show_error(message),
                }
            }
        }
    }
}
