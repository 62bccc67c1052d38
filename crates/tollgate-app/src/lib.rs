//! Application service layer - toll booth use cases and config

pub mod booth;
pub mod config;

pub use booth::TollBooth;
pub use config::Config;
