use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "status",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the catalog" }
        }
    }
}
