// src/infrastructure/security/mod.rs
pub mod claims;
pub mod redis_session_store;
pub mod session_store;
pub mod token;
