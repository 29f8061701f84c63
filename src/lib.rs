// src/lib.rs

pub mod api;
pub mod auth;
pub mod chat;
pub mod config;
pub mod llm;
pub mod memory;
pub mod persona;
pub mod prompt;
pub mod safety;
pub mod slang;
pub mod state;

pub use config::CONFIG;
pub use state::AppState;
