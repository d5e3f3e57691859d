// Standalone components
pub mod button;
pub mod card;
pub mod top_bar;

// Primitive wrappers
pub mod toast;

// Stateful shell navigation; depends on crate::layout
pub mod drawer;

pub use button::*;
pub use card::*;
pub use drawer::*;
pub use toast::*;
pub use top_bar::*;
