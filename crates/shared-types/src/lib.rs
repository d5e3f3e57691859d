pub mod config;
pub mod error;
pub mod models;
pub mod navigation;

pub use config::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
