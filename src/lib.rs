//! # Whiskers API
//!
//! Backend service for a cat adoption site: adoption listings with a
//! status-gated soft-delete lifecycle, a breed catalog, a local cat fact
//! store, and image uploads served from local disk.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;
pub mod telemetry;
pub mod uploads;

pub use migration;
