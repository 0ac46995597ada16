// src/models/mod.rs

pub mod status;
pub mod student;
