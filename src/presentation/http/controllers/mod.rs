// src/presentation/http/controllers/mod.rs
pub mod actions;
pub mod display;
pub mod preferences;
