//! Storage module
//!
//! Provides file storage for attached pictures and floor plans.

pub mod image_store;

pub use image_store::{ImageStore, StoredImage};
