//! Configuration and wire models shared by the handler.

pub mod config;
pub mod models;
