// Date picker and scores helpers for the sunset archive front-end
pub mod api;
pub mod calendar;
pub mod config;
pub mod reports;
pub mod types;
pub mod utils;

pub use api::*;
pub use calendar::*;
pub use config::Config;
pub use reports::*;
pub use types::*;
pub use utils::*;
