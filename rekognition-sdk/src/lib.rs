#![forbid(unsafe_code)]

//! Rekognition SDK: sends model requests to the service.
//!
//! - Error/Result types (`rekognition_sdk::Error` / `rekognition_sdk::Result<T>`)
//! - `Transport`, the seam an HTTP stack plugs into
//! - `RekognitionClient`, one typed method per operation
//! - `SdkConfig` for endpoint, region and timeout
//!
//! Signing, retries and pagination stay with the caller's transport.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::RekognitionClient;
pub use config::SdkConfig;
pub use error::{Error, Result, TransportError};
pub use transport::{OperationRequest, OperationResponse, Transport};

pub use rekognition_model as model;
