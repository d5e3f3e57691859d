use dioxus::prelude::*;

use crate::layout::{DismissEvent, LayoutEvent, LayoutState};
use crate::viewport;

// ─── Context ───────────────────────────────────────────────────────────

/// Handle to the shell's layout state machine, shared through context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutHandle {
    state: Signal<LayoutState>,
}

impl LayoutHandle {
    pub fn get(&self) -> LayoutState {
        *self.state.read()
    }

    /// Run one transition. Handlers run to completion on the UI thread, so
    /// read-then-write needs no further coordination.
    pub fn send(&mut self, event: LayoutEvent) {
        let next = self.state.peek().apply(event);
        if next != *self.state.peek() {
            self.state.set(next);
        }
    }
}

/// Owns the layout state for its subtree and keeps it in sync with the
/// viewport breakpoint described by `narrow_query`.
#[component]
pub fn LayoutProvider(narrow_query: String, children: Element) -> Element {
    let initial_query = narrow_query.clone();
    let state = use_signal(move || LayoutState::new(viewport::matches_now(&initial_query)));
    let handle = use_context_provider(|| LayoutHandle { state });

    use_future(move || {
        let query = narrow_query.clone();
        let mut handle = handle;
        async move {
            viewport::watch(query, move |narrow| {
                tracing::debug!(narrow, "viewport breakpoint changed");
                handle.send(LayoutEvent::ViewportChanged { narrow });
            })
            .await;
        }
    });
    use_drop(viewport::release);

    let layout = handle.get();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "layout-provider",
            "data-layout": if layout.is_narrow() { "narrow" } else { "wide" },
            {children}
        }
    }
}

/// Hook to access the layout handle.
pub fn use_layout() -> LayoutHandle {
    use_context::<LayoutHandle>()
}

// ─── Drawer ────────────────────────────────────────────────────────────

/// Left-anchored navigation drawer with a scrim. Renders nothing unless
/// the layout is narrow and the drawer is open.
#[component]
pub fn Drawer(
    #[props(default = 250)] width_px: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut layout = use_layout();
    if !layout.get().is_drawer_open() {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "drawer-panel", None, false),
        Attribute::new("role", "presentation", None, false),
        Attribute::new("style", format!("width: {width_px}px"), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            class: "drawer-scrim",
            onclick: move |_| layout.send(LayoutEvent::Dismiss(DismissEvent::Pointer)),
        }
        aside {
            onclick: move |_| layout.send(LayoutEvent::Dismiss(DismissEvent::Pointer)),
            onkeydown: move |evt: KeyboardEvent| {
                layout.send(LayoutEvent::Dismiss(DismissEvent::Keyboard { key: evt.key() }));
            },
            ..merged,
            {children}
        }
    }
}

/// Navigation list inside the drawer.
#[component]
pub fn DrawerMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "drawer-menu", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

/// One drawer entry. Choosing it closes the drawer.
#[component]
pub fn DrawerMenuItem(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut layout = use_layout();

    let base = vec![
        Attribute::new("class", "drawer-menu-item", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            onclick: move |_| layout.send(LayoutEvent::ItemSelected),
            ..merged,
            {children}
        }
    }
}

/// Menu button that opens the drawer. Hidden in the wide layout.
#[component]
pub fn DrawerTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut layout = use_layout();
    if !layout.get().is_narrow() {
        return rsx! {};
    }

    let base = vec![Attribute::new("class", "drawer-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "open drawer",
            onclick: move |_| layout.send(LayoutEvent::OpenDrawer),
            ..merged,
            {children}
        }
    }
}

/// Explicit close button for the drawer.
#[component]
pub fn DrawerClose() -> Element {
    let mut layout = use_layout();

    rsx! {
        button {
            class: "drawer-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |evt| {
                evt.stop_propagation();
                layout.send(LayoutEvent::CloseDrawer);
            },
            "\u{2715}"
        }
    }
}
