//! Model platform: stored graphs and programmatic graph creation

pub mod factory;
pub mod manager;
pub mod samples;

pub use factory::{EdgeOptions, GraphFactory};
pub use manager::{ModelInfo, ModelManager, SystemStatus};
