// src/presentation/http/middleware/mod.rs
pub mod rate_limit;
