pub mod classifier;
pub mod datasets;
pub mod error;
pub mod optim;
pub mod plots;
pub mod progress;
pub mod reshape;
pub mod split;

pub use error::{ArfError, ArfResult};
