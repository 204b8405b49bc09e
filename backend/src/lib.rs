//! FitFlow Backend Library
//!
//! HTTP surface over the FitFlow core: per-user documents, the coach chat,
//! and the health probes. Exposed as a library for integration tests.

pub mod auth;
pub mod coach;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
