//! Site Inventory library
//!
//! Inventory records, equipment CRUD, image attachments and audit document
//! export. The desktop shell in `main.rs` is a thin layer over this crate.

pub mod app;
#[cfg(feature = "desktop")]
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod services;
pub mod session;
pub mod storage;
