//! Workshop feedback service library crate.
//!
//! # Purpose
//! Exposes the feedback API surface, validation, configuration, and the
//! in-memory store for use by the binary and tests.
//!
//! # Notes
//! Module boundaries mirror the HTTP API and the storage backend.
pub mod api;
pub mod app;
pub mod config;
pub mod contact;
pub mod model;
pub mod observability;
pub mod store;
pub mod validation;
