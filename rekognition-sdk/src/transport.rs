//! The seam between request encoding and the wire.

use crate::error::TransportError;
use async_trait::async_trait;
use std::sync::Arc;

/// Service name prefix of the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "RekognitionService";

/// Content type of every request body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Response header that can carry the error code instead of the body.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// One encoded operation call, ready to be signed and posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub endpoint: String,
    pub region: String,
    pub operation: &'static str,
    /// `RekognitionService.<Operation>`
    pub target: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl OperationRequest {
    pub fn new(
        endpoint: impl Into<String>,
        region: impl Into<String>,
        operation: &'static str,
        body: Vec<u8>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: region.into(),
            operation,
            target: format!("{TARGET_PREFIX}.{operation}"),
            content_type: CONTENT_TYPE,
            body,
        }
    }

    /// Header pairs the transport must send along with the body.
    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [("X-Amz-Target", self.target.as_str()), ("Content-Type", self.content_type)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResponse {
    pub status: u16,
    /// Value of the [`ERROR_TYPE_HEADER`] header, if the transport saw one.
    pub error_type: Option<String>,
    pub body: Vec<u8>,
}

impl OperationResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            error_type: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_error_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers an encoded request and returns the raw response.
///
/// Implementations own signing, connection reuse and retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OperationRequest) -> Result<OperationResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: OperationRequest) -> Result<OperationResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_header_names_the_operation() {
        let req = OperationRequest::new("https://rekognition.test", "us-west-2", "DetectFaces", b"{}".to_vec());
        assert_eq!(req.target, "RekognitionService.DetectFaces");
        assert_eq!(
            req.headers(),
            [
                ("X-Amz-Target", "RekognitionService.DetectFaces"),
                ("Content-Type", "application/x-amz-json-1.1"),
            ]
        );
    }

    #[test]
    fn success_is_2xx() {
        assert!(OperationResponse::new(200, "{}").is_success());
        assert!(OperationResponse::new(204, Vec::new()).is_success());
        assert!(!OperationResponse::new(400, "{}").is_success());
    }
}
