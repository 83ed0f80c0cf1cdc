use dioxus::prelude::*;

use crate::api::{ApiClient, ApiResponse};
use crate::models::{format_price, parse_price, Product};

/// Shown when a product has no image or its image fails to load.
pub const DEFAULT_PRODUCT_IMAGE: Asset = asset!("/assets/default-product.svg");

/// Outcome of confirming a price edit.
#[derive(Clone, Debug, PartialEq)]
pub enum PriceSave {
    /// The typed value is not a usable price. Nothing was sent.
    Invalid,
    Saved(Product),
    Failed(String),
}

/// Send the typed price for product `id`, unless it does not parse.
pub async fn save_price(api: &ApiClient, id: &str, input: &str) -> PriceSave {
    let Some(price) = parse_price(input) else {
        return PriceSave::Invalid;
    };

    match api.update_product_price(id, price).await {
        ApiResponse::Success { data, .. } => PriceSave::Saved(data),
        ApiResponse::Failure { message } => PriceSave::Failed(message),
    }
}

/// Click-to-edit state of a card's price.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceEditor {
    pub editing: bool,
    pub draft: String,
    pub invalid: bool,
}

impl PriceEditor {
    /// Enter edit mode with the input seeded from `price`.
    pub fn begin(&mut self, price: f64) {
        self.editing = true;
        self.draft = price.to_string();
        self.invalid = false;
    }

    /// Leave edit mode and throw the typed value away.
    pub fn cancel(&mut self, price: f64) {
        self.editing = false;
        self.draft = price.to_string();
        self.invalid = false;
    }

    /// Apply the result of [`save_price`]. Only a successful save leaves edit mode.
    pub fn finish(&mut self, outcome: &PriceSave) {
        match outcome {
            PriceSave::Invalid => self.invalid = true,
            PriceSave::Saved(product) => {
                self.editing = false;
                self.invalid = false;
                self.draft = product.price.to_string();
            }
            PriceSave::Failed(_) => self.invalid = false,
        }
    }
}

#[component]
pub fn ProductCard(
    product: Product,
    on_update: EventHandler<Product>,
    on_delete: EventHandler<String>,
    on_error: Option<EventHandler<String>>,
) -> Element {
    let api = use_context::<ApiClient>();

    let mut editor = use_signal(PriceEditor::default);
    let mut saving = use_signal(|| false);
    let mut image_failed = use_signal(|| false);

    let id = product.id.clone();
    let delete_id = product.id.clone();
    let current_price = product.price;

    let image = match product.image.as_deref() {
        Some(url) if !url.trim().is_empty() && !image_failed() => url.to_string(),
        _ => DEFAULT_PRODUCT_IMAGE.to_string(),
    };

    let save = move |_| {
        let api = api.clone();
        let id = id.clone();
        async move {
            let Some(id) = id else {
                tracing::warn!("cannot update the price of a product without an id");
                return;
            };

            saving.set(true);
            let input = editor.read().draft.clone();
            let outcome = save_price(&api, &id, &input).await;
            editor.write().finish(&outcome);
            saving.set(false);

            match outcome {
                PriceSave::Saved(product) => on_update.call(product),
                PriceSave::Failed(message) => {
                    if let Some(on_error) = on_error {
                        on_error.call(message);
                    }
                }
                PriceSave::Invalid => {}
            }
        }
    };

    let PriceEditor { editing, draft, invalid } = editor();

    let price = if editing {
        rsx! {
            div { class: "price-edit",
                input {
                    r#type: "number",
                    class: if invalid { "form-control price-input is-invalid" } else { "form-control price-input" },
                    min: "0",
                    step: "0.01",
                    autofocus: true,
                    value: "{draft}",
                    oninput: move |e| editor.write().draft = e.value(),
                }
                div { class: "btn-group",
                    button {
                        class: "btn btn-success btn-sm",
                        disabled: saving(),
                        onclick: save,
                        if saving() { "..." } else { "✓" }
                    }
                    button {
                        class: "btn btn-danger btn-sm",
                        disabled: saving(),
                        onclick: move |_| editor.write().cancel(current_price),
                        "✕"
                    }
                }
            }
        }
    } else {
        let formatted = format_price(current_price);
        rsx! {
            span {
                class: "price-display",
                role: "button",
                onclick: move |_| editor.write().begin(current_price),
                "Bs. {formatted}"
            }
        }
    };

    rsx! {
        div { class: "card product-card",
            img {
                class: "card-img-top",
                src: "{image}",
                alt: "{product.name}",
                onerror: move |_| image_failed.set(true),
            }
            div { class: "card-body",
                h5 { class: "card-title", "{product.name}" }
                div { class: "card-text", {price} }
                button {
                    class: "btn btn-danger btn-sm",
                    onclick: move |_| {
                        if let Some(id) = delete_id.clone() {
                            on_delete.call(id);
                        }
                    },
                    "Delete"
                }
            }
        }
    }
}
