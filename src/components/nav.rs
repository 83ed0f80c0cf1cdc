use dioxus::prelude::*;

use crate::components::AlertHost;
use crate::router::Route;

/// The layout every page renders in: the navigation bar, the page itself, and the alert overlay.
#[component]
pub fn Shell() -> Element {
    rsx! {
        AlertHost {
            nav { class: "navbar",
                Link { class: "navbar-brand", to: Route::Home {}, "Catalog" }
                Link { class: "btn btn-success", to: Route::AddProduct {}, "+ Add product" }
            }
            main { class: "container", Outlet::<Route> {} }
        }
    }
}
