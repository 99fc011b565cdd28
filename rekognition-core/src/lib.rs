#![forbid(unsafe_code)]

//! Rekognition core: the pieces every model type is built from.
//!
//! - Error/Result types (`rekognition_core::Error` / `rekognition_core::Result<T>`)
//! - Wire primitives (`Blob`, `Timestamp`)
//! - The `ModelField` trait that gives model types structural equality,
//!   hashing and rendering
//! - `shape!` and `string_enum!` generators used by `rekognition-model`
//! - Configuration and logging setup

pub mod config;
pub mod error;
pub mod field;
pub mod logging;
mod macros;
pub mod types;

pub use config::CoreConfig;
pub use error::{Error, Result};
pub use field::{ModelField, ShapeFormatter};
pub use types::{Blob, Timestamp};

// Re-export paste so model crates don't need to depend on it directly
#[doc(hidden)]
pub use paste;
