//! # restage-core
//!
//! Core types and utilities for working with the Restage virtual staging API.
//!
//! This crate provides the foundation shared by the Restage client crates:
//! error handling, client configuration, HTTP tuning, the domain vocabulary,
//! and input image resolution.
//!
//! ## Modules
//!
//! - [`error`] - Error types shared across all Restage crates
//! - [`config`] - Client configuration and API key handling
//! - [`http`] - Timeout defaults and connection settings
//! - [`types`] - Domain vocabulary (room types, design styles, palettes)
//! - [`image`] - Input image sources and their resolution
//! - [`uuid`] - Strongly-typed UUID wrapper for generated images

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod http;
pub mod image;
pub mod types;
pub mod uuid;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use image::ImageSource;
