// Job configuration: what file to rewrite, where, and with what

#[allow(clippy::module_inception)]
pub mod config;
pub mod config_loader;

pub use config::{JobSpec, Payload, SpliceJob};
pub use config_loader::JobLoader;
