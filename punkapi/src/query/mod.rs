mod common;
pub use self::common::Query;

mod params;
pub use self::params::{Param, ParameterSet, ValueKind};

mod values;
pub use self::values::{BrewDate, IdList, Metric};
