pub mod splicer;

pub use splicer::*;
