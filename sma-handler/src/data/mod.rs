pub mod fixed;
pub mod parse;

pub use fixed::StaticDataSource;
pub use parse::parse_date;

use common::{PriceRow, Result};

/// Source of the chronologically ordered rows fed to the handler
pub trait DataSource {
    fn load(&self) -> Result<Vec<PriceRow>>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn load(&self) -> Result<Vec<PriceRow>> {
        (**self).load()
    }
}
