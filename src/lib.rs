pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod lookup;
pub mod output;
pub mod proxy;
pub mod view;

pub use config::AppConfig;
pub use error::AppError;
pub use lookup::{lookup, LookupData, LookupError};
pub use view::ViewState;
