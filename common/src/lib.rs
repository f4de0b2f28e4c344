pub mod config;
pub mod error;
pub mod types;

pub use config::HandlerConfig;
pub use error::{HandlerError, Result};
pub use types::*;
