//! Viewport breakpoint queries backed by `window.matchMedia`.

use dioxus::prelude::*;

/// Test a CSS media query against the current window synchronously.
///
/// Off the web target there is no window to measure, so the wide layout
/// is assumed.
pub fn matches_now(query: &str) -> bool {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = query;
        false
    }
}

/// Call `on_change` with the query's current value, then again every time
/// it flips. Returns when the JS side goes away.
pub async fn watch(query: String, mut on_change: impl FnMut(bool)) {
    let mut eval = document::eval(&format!(
        r#"
        const mql = window.matchMedia({query:?});
        const onChange = (e) => dioxus.send(e.matches);
        mql.addEventListener('change', onChange);
        window.__shellViewportRelease = () => mql.removeEventListener('change', onChange);
        dioxus.send(mql.matches);
        "#
    ));

    while let Ok(matches) = eval.recv::<bool>().await {
        on_change(matches);
    }
}

/// Detach the listener installed by [`watch`].
pub fn release() {
    document::eval(
        r#"
        if (window.__shellViewportRelease) {
            window.__shellViewportRelease();
            window.__shellViewportRelease = undefined;
        }
        "#,
    );
}
