pub mod config;
pub mod detailed;
pub mod models;
pub mod simplified;
