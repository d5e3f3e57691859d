use dioxus::prelude::*;
use shared_types::ShellConfig;

mod api;
mod auth;
mod config;
mod logout;
mod routes;
use auth::{use_auth, AuthState};
use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let shell_config: ShellConfig = use_context_provider(config::load);
    use_context_provider(AuthState::new);

    // Populate the session once; failures leave the viewer anonymous.
    let auth = use_auth();
    use_future(move || {
        let client = api::AuthClient::new(&shell_config);
        let mut auth = auth;
        async move {
            match client.current_session().await {
                Ok(Some(user)) => {
                    tracing::info!(role = %user.role, "session restored");
                    auth.set_user(user);
                }
                Ok(None) => tracing::info!("no active session, browsing anonymously"),
                Err(err) => {
                    tracing::warn!(error = %err, "session lookup failed, browsing anonymously")
                }
            }
        }
    });

    rsx! {
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
