//! # Runtime Module
//!
//! Runtime components for the exporter: tracing initialization and the export
//! pipeline.

pub mod initialization;
pub mod pipeline;

pub use initialization::*;
pub use pipeline::*;
