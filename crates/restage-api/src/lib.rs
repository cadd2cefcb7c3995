//! Client and data models for the Restage virtual staging API.
//!
//! Provides strongly typed request and response models and an asynchronous
//! client covering every Restage operation, from URL-based staging to the
//! legacy multipart uploads. Module-level shortcuts backed by a shared
//! default client live in [`convenience`].

#![deny(missing_docs)]

pub mod client;
pub mod convenience;
pub mod models;
pub mod operation;
pub mod payload;

pub use client::{RestageClient, RestageClientBuilder, DEFAULT_UPSCALE_FACTOR};
pub use models::{
    ApiResponse, DesignImage, GenerateDesignsForRoomRequest, GenerateDesignsRequest,
    GenerateInspirationalDesignsRequest, LandscapingRequest, RemodelRequest, ResponseInfo,
    SketchRenderRequest,
};
pub use payload::Payload;

/// Convenient result alias using the shared Restage error type.
pub type Result<T> = restage_core::Result<T>;
