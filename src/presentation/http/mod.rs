// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod extractors;
pub mod params;
pub mod routes;
pub mod session;
pub mod state;
