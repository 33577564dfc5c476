//! Console demonstrations of the record model and the query operators.

pub mod config;
pub mod population;
pub mod report;

pub use config::DemoConfig;
pub use report::{Report, build};
