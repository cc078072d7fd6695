//! Translation dispatch core

pub mod client;
pub mod config;
pub mod errors;
pub mod languages;
pub mod mode;
pub mod models;
pub mod prompt;
pub mod providers;
