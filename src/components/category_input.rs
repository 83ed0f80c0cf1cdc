use dioxus::prelude::*;

use crate::models::{capitalize, Category};

/// The dropdown value that switches the input into free-text mode.
pub const CUSTOM_CATEGORY: &str = "_custom_";

/// What picking a dropdown option means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryPick {
    /// Switch to typing a new category.
    Custom,
    Existing(String),
}

impl CategoryPick {
    pub fn from_option(value: String) -> Self {
        if value == CUSTOM_CATEGORY {
            Self::Custom
        } else {
            Self::Existing(value)
        }
    }
}

/// The name to commit when Enter is pressed in the free-text field, if any.
pub fn typed_category(typed: &str) -> Option<String> {
    let name = typed.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// A category dropdown with an "add new" escape hatch.
///
/// Picking the last option swaps the dropdown for a text field. Pressing Enter there hands the
/// trimmed text to `on_add` and brings the dropdown back. Names are not checked against the
/// existing categories here.
#[component]
pub fn CategoryInput(
    value: String,
    categories: Vec<Category>,
    on_change: EventHandler<String>,
    on_add: EventHandler<String>,
) -> Element {
    let mut custom = use_signal(|| false);

    if custom() {
        let typed = value.clone();
        return rsx! {
            div { class: "category-input",
                input {
                    r#type: "text",
                    class: "form-control",
                    placeholder: "Type new category and press Enter",
                    autofocus: true,
                    value: "{value}",
                    oninput: move |e| on_change.call(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() != Key::Enter {
                            return;
                        }
                        // Enter would otherwise submit the surrounding form.
                        e.prevent_default();
                        if let Some(name) = typed_category(&typed) {
                            on_add.call(name);
                            custom.set(false);
                        }
                    },
                }
            }
        };
    }

    let options = categories
        .iter()
        .map(|category| {
            (
                category.id.clone(),
                category.name.clone(),
                capitalize(&category.name),
                category.name == value,
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "category-input",
            select {
                class: "form-select",
                value: "{value}",
                onchange: move |e| match CategoryPick::from_option(e.value()) {
                    CategoryPick::Custom => custom.set(true),
                    CategoryPick::Existing(value) => on_change.call(value),
                },
                option { value: "", "Select category..." }
                for (id, name, label, selected) in options {
                    option { key: "{id}", value: "{name}", selected, "{label}" }
                }
                option { value: CUSTOM_CATEGORY, "+ Add new category" }
            }
        }
    }
}
