pub mod config;
pub mod logging;

pub mod archive;
pub mod download;
pub mod error;
pub mod fetch;
pub mod link;
pub mod pipeline;
pub mod store;
