// src/prompt/mod.rs

pub mod builder;

pub use builder::{build_prompt, build_system_instruction, REPLY_CUE};
