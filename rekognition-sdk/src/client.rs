use crate::config::SdkConfig;
use crate::error::{Error, Result};
use crate::transport::{OperationRequest, OperationResponse, Transport};
use rekognition_model::{self as model, Operation, ServiceError};
use tokio::time::timeout;
use tracing::{debug, warn};

/// Encodes requests, hands them to a [`Transport`] and decodes the answer.
pub struct RekognitionClient<T> {
    cfg: SdkConfig,
    transport: T,
}

impl<T: Transport> RekognitionClient<T> {
    pub fn new(cfg: SdkConfig, transport: T) -> Self {
        Self { cfg, transport }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.cfg
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends any operation. The typed methods below forward here.
    pub async fn send<O: Operation>(&self, request: &O) -> Result<O::Output> {
        let body = serde_json::to_vec(request)?;
        let req = OperationRequest::new(&self.cfg.endpoint, &self.cfg.region, O::NAME, body);
        debug!(operation = O::NAME, endpoint = %req.endpoint, bytes = req.body.len(), "dispatching request");

        let resp = timeout(self.cfg.request_timeout(), self.transport.send(req))
            .await
            .map_err(|_| {
                warn!(operation = O::NAME, timeout_ms = self.cfg.request_timeout_ms, "request timed out");
                Error::Timeout
            })??;
        decode_response::<O>(resp)
    }
}

fn decode_response<O: Operation>(resp: OperationResponse) -> Result<O::Output> {
    if resp.is_success() {
        debug!(operation = O::NAME, status = resp.status, bytes = resp.body.len(), "response received");
        // some operations answer with no body at all
        if resp.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(O::Output::default());
        }
        return serde_json::from_slice(&resp.body).map_err(|source| Error::Decode {
            operation: O::NAME,
            source,
        });
    }

    match ServiceError::from_response(resp.error_type.as_deref(), &resp.body) {
        Some(err) => {
            warn!(operation = O::NAME, status = resp.status, code = %err.code, "service error");
            Err(Error::service(O::NAME, resp.status, err))
        }
        None => {
            warn!(operation = O::NAME, status = resp.status, "unrecognized error response");
            Err(Error::UnexpectedResponse {
                operation: O::NAME,
                status: resp.status,
                body: String::from_utf8_lossy(&resp.body).into_owned(),
            })
        }
    }
}

macro_rules! operation_methods {
    ($($name:ident),* $(,)?) => {
        rekognition_core::paste::paste! {
            impl<T: Transport> RekognitionClient<T> {
                $(
                    #[doc = "Calls `" $name "`."]
                    pub async fn [<$name:snake>](
                        &self,
                        request: model::[<$name Request>],
                    ) -> Result<model::[<$name Result>]> {
                        self.send(&request).await
                    }
                )*
            }
        }
    };
}

rekognition_model::for_each_operation!(operation_methods);

#[cfg(test)]
mod tests {
    use super::*;
    use rekognition_model::{DeleteUserRequest, DescribeCollectionRequest, ServiceErrorCode};

    #[test]
    fn empty_success_body_is_the_default_result() {
        let out = decode_response::<DeleteUserRequest>(OperationResponse::new(200, "")).unwrap();
        assert_eq!(out, Default::default());
    }

    #[test]
    fn error_bodies_become_service_errors() {
        let body = r#"{"__type":"com.amazon.rekognition#ResourceNotFoundException","Message":"no such collection"}"#;
        let err = decode_response::<DescribeCollectionRequest>(OperationResponse::new(400, body)).unwrap_err();
        assert_eq!(err.code(), Some(&ServiceErrorCode::ResourceNotFound));
        assert_eq!(
            err.to_string(),
            "DescribeCollection failed with ResourceNotFoundException (HTTP 400): no such collection"
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn opaque_errors_keep_the_body() {
        let err = decode_response::<DescribeCollectionRequest>(OperationResponse::new(503, "busy")).unwrap_err();
        match &err {
            Error::UnexpectedResponse { status, body, .. } => {
                assert_eq!(*status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.is_retryable());
    }

    #[test]
    fn error_type_header_names_the_code() {
        let resp = OperationResponse::new(400, "<html>Bad Request</html>")
            .with_error_type("InvalidImageFormatException:http://internal.amazon.com/");
        let err = decode_response::<DescribeCollectionRequest>(resp).unwrap_err();
        assert_eq!(err.code(), Some(&ServiceErrorCode::InvalidImageFormat));

        let resp = OperationResponse::new(429, "").with_error_type("ThrottlingException");
        let err = decode_response::<DescribeCollectionRequest>(resp).unwrap_err();
        assert_eq!(err.code(), Some(&ServiceErrorCode::Throttling));
        assert!(err.is_retryable());
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_response::<DescribeCollectionRequest>(OperationResponse::new(200, "{")).unwrap_err();
        assert!(matches!(err, Error::Decode { operation: "DescribeCollection", .. }));
    }
}
