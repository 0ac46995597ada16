// src/handlers/mod.rs

pub mod student;
