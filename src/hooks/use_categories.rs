use dioxus::prelude::*;

use crate::api::{ApiClient, ApiResponse};
use crate::models::Category;

/// Load the category list once when the calling component mounts.
///
/// The returned handle is `Copy`, so it can be moved into any number of event handlers. The
/// list lives as long as the calling component: every page gets its own copy.
///
/// ```rust, ignore
/// let mut categories = use_categories();
///
/// rsx! {
///     for category in categories.list() {
///         option { value: "{category.name}", "{category.name}" }
///     }
/// }
/// ```
pub fn use_categories() -> UseCategories {
    let api = use_context::<ApiClient>();

    let mut list = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let client = use_signal(move || api);

    use_future(move || async move {
        let api = client.cloned();
        match api.fetch_categories().await {
            ApiResponse::Success { data, .. } => list.set(data),
            ApiResponse::Failure { message } => error.set(Some(message)),
        }
        loading.set(false);
    });

    UseCategories {
        list,
        loading,
        error,
        client,
    }
}

#[derive(Clone, Copy)]
pub struct UseCategories {
    list: Signal<Vec<Category>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    client: Signal<ApiClient>,
}

impl UseCategories {
    /// A snapshot of the current list. Reading it subscribes the caller to changes.
    pub fn list(&self) -> Vec<Category> {
        self.list.cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.list.read().iter().any(|category| category.name == name)
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn error(&self) -> Option<String> {
        self.error.cloned()
    }

    /// Create a category on the server and append it to the local list.
    ///
    /// Returns whether the category was created. The list is not re-fetched and names are not
    /// checked for duplicates.
    pub async fn add(&mut self, name: &str) -> bool {
        let api = self.client.cloned();
        match api.create_category(name).await {
            ApiResponse::Success { data, .. } => {
                tracing::info!(category = %data.name, "created category");
                self.list.write().push(data);
                true
            }
            ApiResponse::Failure { .. } => false,
        }
    }

    /// Append a category that was created elsewhere.
    pub fn push(&mut self, category: Category) {
        self.list.write().push(category);
    }
}
