pub mod primitives;
pub mod range;
pub mod time_series;

pub use primitives::parse_timestamp;
pub use range::{RangeOption, RangeTable, Resolution};
pub use time_series::TimeSeries;
