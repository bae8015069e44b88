pub mod api;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod server;
pub mod store;
