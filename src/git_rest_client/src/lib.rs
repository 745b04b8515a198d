pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
pub mod types;

pub use client::{execute, RestClient};
