//! Image-pipeline node for the Restage virtual staging API.
//!
//! Wraps the staging client for plugin hosts that work on decoded rasters:
//! a serializable input [`schema`] for host discovery and a [`node`] entry
//! point that takes a `DynamicImage` plus widget values and returns the
//! staged designs as `DynamicImage`s.

#![deny(missing_docs)]

pub mod node;
pub mod schema;

pub use node::{StagingNode, StagingParams};
pub use schema::{
    FieldDef, FieldKind, NodeSchema, CHOICE_NONE, NODE_CATEGORY, NODE_DISPLAY_NAME, NODE_NAME,
    NODE_RETURNS,
};

/// Convenient result alias using the shared Restage error type.
pub type Result<T> = restage_core::Result<T>;
