// src/services/mod.rs

pub mod status;
pub mod user;
