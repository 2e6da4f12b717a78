//! Observability Demo Services
//!
//! This library backs two small HTTP servers used for demonstrating
//! logging and latency behavior: a greeting server (`/`, `/greet/:name`,
//! `/slow`) and a logging server (`/`, `/log-error`, `/users`).
//! The binaries are in `src/main.rs` and `src/bin/logging_server.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod repository;
pub mod server;
pub mod services;
