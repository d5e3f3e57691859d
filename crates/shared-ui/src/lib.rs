pub mod components;
pub mod layout;
pub mod viewport;

pub use components::*;
pub use layout::{DismissEvent, LayoutEvent, LayoutState};
