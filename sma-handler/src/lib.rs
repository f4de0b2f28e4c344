pub mod data;
pub mod handler;
pub mod indicators;
pub mod logging;
pub mod table;

pub use data::{parse_date, DataSource, StaticDataSource};
pub use handler::{handle, Handler};
pub use indicators::calculate_sma;
pub use logging::{init_logging, LoggingConfig};
pub use table::AugmentedTable;

// Re-export common types
pub use common::{
    HandlerConfig, HandlerError, InvocationContext, PriceRow, ResponseEnvelope, Result, SmaRow,
};
