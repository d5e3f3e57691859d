use dioxus::prelude::*;
use shared_types::RouteId;

use crate::routes::Route;

/// 404 page for paths outside the shell's route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Page Not Found" }
            p { class: "not-found-message",
                "The page "
                code { "{path}" }
                " could not be found."
            }
            Link { to: Route::from(RouteId::Home), class: "not-found-link", "Back to Home" }
        }
    }
}
