use dioxus::prelude::*;
use shared_types::{landing_actions, IconKind, ShellConfig};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardActions, CardContent, CardDescription, CardTitle,
};

use crate::auth::use_role;
use crate::routes::{nav_icon, Route};

/// Landing page: hero text and the three call-to-action cards.
#[component]
pub fn Home() -> Element {
    let config: ShellConfig = use_context();
    let role = use_role();
    let actions = landing_actions(role.as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        section { class: "home-hero",
            h1 { class: "home-title", "Welcome to {config.brand_name}" }
            h2 { class: "home-subtitle", "Your trusted platform for seamless personal loans." }
        }

        div { class: "home-actions",
            for action in actions {
                Card { key: "{action.title}",
                    CardContent {
                        CardTitle { "{action.title}" }
                        CardDescription { "{action.blurb}" }
                    }
                    CardActions {
                        Link { to: Route::from(action.destination), class: "home-action-link",
                            Button {
                                size: ButtonSize::Large,
                                full_width: true,
                                variant: if action.icon == IconKind::Dashboard {
                                    ButtonVariant::Secondary
                                } else {
                                    ButtonVariant::Primary
                                },
                                {nav_icon(action.icon)}
                                "{action.button_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
