#![forbid(unsafe_code)]

//! Rekognition model: request, result and shape types for every operation
//! of the Amazon Rekognition JSON API.
//!
//! - One `XxxRequest`/`XxxResult` pair per operation, bound together by the
//!   `Operation` trait
//! - Shared shapes grouped by feature area (`face`, `label`, `project`, ...)
//! - Closed value sets in `enums`, service error codes in `error`
//!
//! Every type is re-exported at the crate root.

pub mod celebrity;
pub mod collection;
pub mod dataset;
pub mod enums;
pub mod error;
pub mod face;
pub mod geometry;
pub mod label;
pub mod liveness;
pub mod media;
pub mod media_analysis;
pub mod moderation;
pub mod operation;
pub mod ppe;
pub mod project;
pub mod segment;
pub mod stream_processor;
pub mod tagging;
pub mod text;
pub mod user;
pub mod video;

pub use celebrity::*;
pub use collection::*;
pub use dataset::*;
pub use enums::*;
pub use error::{ServiceError, ServiceErrorCode};
pub use face::*;
pub use geometry::*;
pub use label::*;
pub use liveness::*;
pub use media::*;
pub use media_analysis::*;
pub use moderation::*;
pub use operation::{Operation, OPERATION_NAMES};
pub use ppe::*;
pub use project::*;
pub use segment::*;
pub use stream_processor::*;
pub use tagging::*;
pub use text::*;
pub use user::*;
pub use video::VideoJob;

pub use rekognition_core::{Blob, Error, Result, Timestamp};
