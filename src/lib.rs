// region-splice - replace a marker-delimited region of a text file

pub mod config;
pub mod core;
pub mod diff;
pub mod error;
pub mod error_handling;
pub mod file;
pub mod logging;

pub use config::{JobLoader, JobSpec, Payload, SpliceJob};
pub use crate::core::{ApplyMode, RegionSplicer};
pub use diff::{SplicePlan, SpliceReport};
pub use error::{MarkerKind, SpliceError, SpliceResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
