pub mod app;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod orders;
pub mod state;
pub mod store;
