// src/api/http/mod.rs

pub mod auth;
pub mod chat;
pub mod health;
pub mod history;
pub mod router;

pub use router::{cors_layer, http_router};
