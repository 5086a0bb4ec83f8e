//! Knowledge-base display service.
//!
//! Resolves which article a display instance shows, at which workflow status,
//! and which template renders it, behind an axum HTTP surface.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
