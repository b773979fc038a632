pub mod dataset;
pub mod record;
pub mod selection;

pub use dataset::*;
pub use record::*;
pub use selection::*;
