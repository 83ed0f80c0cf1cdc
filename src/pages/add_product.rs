use dioxus::prelude::*;

use crate::api::{ApiClient, ApiResponse};
use crate::components::CategoryInput;
use crate::hooks::use_categories;
use crate::models::{normalize_category, parse_price, Category, Product, ProductDraft};
use crate::router::Route;

pub const CATEGORY_FAILED: &str = "Failed to create new category";
pub const CATEGORY_MISSING: &str = "Please choose a category";
pub const PRICE_INVALID: &str = "Price must be a number greater than or equal to 0";

/// Raw values of the add-product form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

/// What happened when the form was submitted.
#[derive(Debug, PartialEq)]
pub struct Submission {
    /// A category created on the way. It exists server-side even if the product failed.
    pub created_category: Option<Category>,
    pub result: Result<Product, String>,
}

/// Create the product, creating its category first when `known` does not have it yet.
///
/// The category is trimmed and lower-cased before it is looked up or sent anywhere.
pub async fn submit_product(api: &ApiClient, known: &[Category], form: &ProductForm) -> Submission {
    let category = normalize_category(&form.category);
    if category.is_empty() {
        return Submission {
            created_category: None,
            result: Err(CATEGORY_MISSING.to_string()),
        };
    }

    let mut created_category = None;
    if !known.iter().any(|existing| existing.name == category) {
        match api.create_category(&category).await {
            ApiResponse::Success { data, .. } => created_category = Some(data),
            ApiResponse::Failure { .. } => {
                return Submission {
                    created_category: None,
                    result: Err(CATEGORY_FAILED.to_string()),
                }
            }
        }
    }

    let draft = ProductDraft::new(form.name.trim(), form.price, category, &form.image);
    let result = api.create_product(&draft).await.into_result();

    Submission {
        created_category,
        result,
    }
}

#[component]
pub fn AddProduct() -> Element {
    let api = use_context::<ApiClient>();
    let mut categories = use_categories();

    let mut name = use_signal(String::new);
    let mut price = use_signal(|| "0".to_string());
    let mut category = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        let api = api.clone();
        async move {
            error.set(None);

            let Some(amount) = parse_price(&price.read()) else {
                error.set(Some(PRICE_INVALID.to_string()));
                return;
            };

            submitting.set(true);
            let form = ProductForm {
                name: name(),
                price: amount,
                category: category(),
                image: image(),
            };
            let submission = submit_product(&api, &categories.list(), &form).await;

            if let Some(created) = submission.created_category {
                categories.push(created);
            }
            submitting.set(false);

            match submission.result {
                Ok(product) => {
                    tracing::info!(name = %product.name, category = %product.category, "created product");
                    navigator().push(Route::Home {});
                }
                Err(message) => error.set(Some(message)),
            }
        }
    };

    let on_new_category = move |typed: String| async move {
        let normalized = normalize_category(&typed);
        category.set(normalized.clone());
        if !categories.contains(&normalized) && !categories.add(&normalized).await {
            error.set(Some(CATEGORY_FAILED.to_string()));
        }
    };

    rsx! {
        div { class: "form-page",
            div { class: "card",
                div { class: "card-body",
                    h2 { "New product" }

                    if let Some(message) = error() {
                        div { class: "alert alert-danger", role: "alert", "{message}" }
                    }

                    form { onsubmit: onsubmit,
                        div { class: "mb-3",
                            label { r#for: "name", class: "form-label", "Product name" }
                            input {
                                id: "name",
                                name: "name",
                                r#type: "text",
                                class: "form-control",
                                placeholder: "Enter the product name",
                                required: true,
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                            }
                        }

                        div { class: "mb-3",
                            label { r#for: "price", class: "form-label", "Price" }
                            div { class: "input-group",
                                span { class: "input-group-text", "Bs." }
                                input {
                                    id: "price",
                                    name: "price",
                                    r#type: "number",
                                    class: "form-control",
                                    min: "0",
                                    step: "0.01",
                                    placeholder: "0.00",
                                    required: true,
                                    value: "{price}",
                                    oninput: move |e| price.set(e.value()),
                                }
                            }
                        }

                        div { class: "mb-3",
                            label { r#for: "category", class: "form-label", "Category" }
                            CategoryInput {
                                value: category(),
                                categories: categories.list(),
                                on_change: move |value: String| category.set(value),
                                on_add: on_new_category,
                            }
                        }

                        div { class: "mb-4",
                            label { r#for: "image", class: "form-label", "Image URL (optional)" }
                            input {
                                id: "image",
                                name: "image",
                                r#type: "url",
                                class: "form-control",
                                placeholder: "https://example.com/image.jpg",
                                value: "{image}",
                                oninput: move |e| image.set(e.value()),
                            }
                        }

                        div { class: "form-actions",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: submitting(),
                                if submitting() { "Creating..." } else { "Create product" }
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-outline-secondary",
                                disabled: submitting(),
                                onclick: move |_| {
                                    navigator().push(Route::Home {});
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
