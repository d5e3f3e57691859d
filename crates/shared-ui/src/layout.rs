use dioxus::prelude::Key;

/// How a dismissal reached the drawer.
///
/// Keyboard and pointer input are distinct variants so a pointer click can
/// never be mistaken for a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum DismissEvent {
    Keyboard { key: Key },
    Pointer,
}

impl DismissEvent {
    /// Whether this dismissal should close the drawer. Tab and Shift move
    /// focus between drawer items and are left alone.
    pub fn closes_drawer(&self) -> bool {
        match self {
            DismissEvent::Keyboard { key } => !matches!(key, Key::Tab | Key::Shift),
            DismissEvent::Pointer => true,
        }
    }
}

/// Inputs to the layout state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// The viewport crossed the narrow/wide breakpoint (or was re-measured).
    ViewportChanged { narrow: bool },
    /// Menu button activated.
    OpenDrawer,
    /// Explicit close button.
    CloseDrawer,
    /// Scrim click or a key press while focus is inside the drawer.
    Dismiss(DismissEvent),
    /// A navigation item inside the drawer was chosen.
    ItemSelected,
}

/// Responsive layout of the shell: inline top bar when wide, drawer when
/// narrow.
///
/// The drawer can only be open in the narrow layout. Fields are private and
/// every transition goes through [`LayoutState::apply`], so
/// `is_drawer_open() => is_narrow()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    narrow: bool,
    drawer_open: bool,
}

impl LayoutState {
    /// Initial state on mount: drawer closed.
    pub fn new(narrow: bool) -> Self {
        Self {
            narrow,
            drawer_open: false,
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Show the inline navigation bar (wide layout).
    pub fn shows_inline_nav(&self) -> bool {
        !self.narrow
    }

    pub fn apply(self, event: LayoutEvent) -> Self {
        match event {
            LayoutEvent::ViewportChanged { narrow } => Self {
                narrow,
                drawer_open: narrow && self.drawer_open,
            },
            LayoutEvent::OpenDrawer => Self {
                drawer_open: self.narrow,
                ..self
            },
            LayoutEvent::CloseDrawer | LayoutEvent::ItemSelected => self.closed(),
            LayoutEvent::Dismiss(dismissal) => {
                if dismissal.closes_drawer() {
                    self.closed()
                } else {
                    self
                }
            }
        }
    }

    fn closed(self) -> Self {
        Self {
            drawer_open: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(k: Key) -> LayoutEvent {
        LayoutEvent::Dismiss(DismissEvent::Keyboard { key: k })
    }

    fn open_narrow() -> LayoutState {
        LayoutState::new(true).apply(LayoutEvent::OpenDrawer)
    }

    #[test]
    fn starts_with_drawer_closed() {
        assert!(!LayoutState::new(true).is_drawer_open());
        assert!(!LayoutState::new(false).is_drawer_open());
        assert!(LayoutState::new(false).shows_inline_nav());
        assert!(!LayoutState::new(true).shows_inline_nav());
    }

    #[test]
    fn menu_button_opens_drawer_when_narrow() {
        let state = open_narrow();
        assert!(state.is_narrow());
        assert!(state.is_drawer_open());
    }

    #[test]
    fn menu_button_is_ignored_when_wide() {
        let state = LayoutState::new(false).apply(LayoutEvent::OpenDrawer);
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn going_wide_forces_drawer_closed() {
        let state = open_narrow().apply(LayoutEvent::ViewportChanged { narrow: false });
        assert_eq!(state, LayoutState::new(false));
    }

    #[test]
    fn going_narrow_again_keeps_drawer_closed() {
        let state = open_narrow()
            .apply(LayoutEvent::ViewportChanged { narrow: false })
            .apply(LayoutEvent::ViewportChanged { narrow: true });
        assert!(state.is_narrow());
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn remeasuring_narrow_keeps_drawer_open() {
        let state = open_narrow().apply(LayoutEvent::ViewportChanged { narrow: true });
        assert!(state.is_drawer_open());
    }

    #[test]
    fn close_and_item_selection_close_drawer() {
        assert!(!open_narrow().apply(LayoutEvent::CloseDrawer).is_drawer_open());
        assert!(!open_narrow().apply(LayoutEvent::ItemSelected).is_drawer_open());
    }

    #[test]
    fn pointer_dismissal_always_closes() {
        let state = open_narrow().apply(LayoutEvent::Dismiss(DismissEvent::Pointer));
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn tab_and_shift_do_not_close() {
        assert!(open_narrow().apply(key(Key::Tab)).is_drawer_open());
        assert!(open_narrow().apply(key(Key::Shift)).is_drawer_open());
    }

    #[test]
    fn other_keys_close() {
        assert!(!open_narrow().apply(key(Key::Escape)).is_drawer_open());
        assert!(!open_narrow().apply(key(Key::Enter)).is_drawer_open());
        assert!(!open_narrow()
            .apply(key(Key::Character("a".into())))
            .is_drawer_open());
    }

    #[test]
    fn pointer_never_takes_the_tab_shift_path() {
        assert!(DismissEvent::Pointer.closes_drawer());
        assert!(!DismissEvent::Keyboard { key: Key::Tab }.closes_drawer());
    }

    #[test]
    fn open_then_select_apply_closes() {
        let state = LayoutState::new(true);
        assert!(!state.is_drawer_open());
        let state = state.apply(LayoutEvent::OpenDrawer);
        assert!(state.is_drawer_open());
        let state = state.apply(LayoutEvent::ItemSelected);
        assert!(!state.is_drawer_open());
    }

    #[test]
    fn drawer_open_implies_narrow_for_every_event_sequence() {
        let events = [
            LayoutEvent::ViewportChanged { narrow: true },
            LayoutEvent::ViewportChanged { narrow: false },
            LayoutEvent::OpenDrawer,
            LayoutEvent::CloseDrawer,
            LayoutEvent::ItemSelected,
            LayoutEvent::Dismiss(DismissEvent::Pointer),
            key(Key::Tab),
            key(Key::Escape),
        ];

        // Every sequence of length 4 from both starting layouts.
        let n = events.len();
        for start in [true, false] {
            for code in 0..n.pow(4) {
                let mut state = LayoutState::new(start);
                let mut c = code;
                for _ in 0..4 {
                    state = state.apply(events[c % n].clone());
                    c /= n;
                    assert!(!state.is_drawer_open() || state.is_narrow());
                }
            }
        }
    }
}
