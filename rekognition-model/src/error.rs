//! Errors reported by the service itself, as carried in a failed response
//! body.

use rekognition_core::string_enum;
use serde::Deserialize;
use thiserror::Error;

string_enum! {
    /// The `__type` code of a service error.
    pub enum ServiceErrorCode {
        AccessDenied => "AccessDeniedException",
        Conflict => "ConflictException",
        HumanLoopQuotaExceeded => "HumanLoopQuotaExceededException",
        IdempotentParameterMismatch => "IdempotentParameterMismatchException",
        ImageTooLarge => "ImageTooLargeException",
        InternalServerError => "InternalServerError",
        InvalidImageFormat => "InvalidImageFormatException",
        InvalidManifest => "InvalidManifestException",
        InvalidPaginationToken => "InvalidPaginationTokenException",
        InvalidParameter => "InvalidParameterException",
        InvalidPolicyRevisionId => "InvalidPolicyRevisionIdException",
        InvalidS3Object => "InvalidS3ObjectException",
        LimitExceeded => "LimitExceededException",
        MalformedPolicyDocument => "MalformedPolicyDocumentException",
        ProvisionedThroughputExceeded => "ProvisionedThroughputExceededException",
        ResourceAlreadyExists => "ResourceAlreadyExistsException",
        ResourceInUse => "ResourceInUseException",
        ResourceNotFound => "ResourceNotFoundException",
        ResourceNotReady => "ResourceNotReadyException",
        ServiceQuotaExceeded => "ServiceQuotaExceededException",
        SessionNotFound => "SessionNotFoundException",
        Throttling => "ThrottlingException",
        VideoTooLarge => "VideoTooLargeException",
    }
}

impl ServiceErrorCode {
    /// Parses a raw `__type` value. Accepts the bare code as well as the
    /// `namespace#Code` and `Code:uri` forms.
    pub fn parse_type(raw: &str) -> Self {
        let code = raw.rsplit('#').next().unwrap_or(raw);
        let code = code.split(':').next().unwrap_or(code);
        Self::from(code.trim())
    }

    /// Throttling and server side faults; the same request may succeed later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InternalServerError
                | Self::ProvisionedThroughputExceeded
                | Self::Throttling
                | Self::LimitExceeded
                | Self::ResourceNotReady
        )
    }
}

/// A decoded service error body.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{code}: {message}")]
pub struct ServiceError {
    pub code: ServiceErrorCode,
    /// Empty when the service sent no message.
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(rename = "message", alias = "Message")]
    message: Option<String>,
}

impl ServiceError {
    pub fn new(code: impl Into<ServiceErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Decodes a JSON error body. Returns `None` when the body is not JSON
    /// or carries no `__type`.
    pub fn from_json(body: &[u8]) -> Option<Self> {
        Self::from_response(None, body)
    }

    /// Decodes a failed response. A non-empty `x-amzn-ErrorType` header
    /// takes precedence over the body's `__type`; the message still comes
    /// from the body when it is JSON.
    pub fn from_response(error_type: Option<&str>, body: &[u8]) -> Option<Self> {
        let parsed = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::debug!(error = %e, len = body.len(), "error body is not JSON");
                None
            }
        };
        let (body_kind, message) = match parsed {
            Some(ErrorBody { kind, message }) => (kind, message),
            None => (None, None),
        };
        let kind = error_type
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .or(body_kind)?;
        Some(Self {
            code: ServiceErrorCode::parse_type(&kind),
            message: message.unwrap_or_default(),
        })
    }

    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_prefix_and_suffix_are_stripped() {
        assert_eq!(
            ServiceErrorCode::parse_type("com.amazonaws.rekognition#ResourceNotFoundException"),
            ServiceErrorCode::ResourceNotFound
        );
        assert_eq!(
            ServiceErrorCode::parse_type("ThrottlingException:http://internal.amazon.com/"),
            ServiceErrorCode::Throttling
        );
        assert_eq!(
            ServiceErrorCode::parse_type("SomethingNew"),
            ServiceErrorCode::Unrecognized("SomethingNew".into())
        );
    }

    #[test]
    fn decodes_either_message_casing() {
        let lower = br#"{"__type":"InvalidParameterException","message":"bad"}"#;
        let upper = br#"{"__type":"InvalidParameterException","Message":"bad"}"#;
        let expected = ServiceError::new(ServiceErrorCode::InvalidParameter, "bad");
        assert_eq!(ServiceError::from_json(lower), Some(expected.clone()));
        assert_eq!(ServiceError::from_json(upper), Some(expected));
    }

    #[test]
    fn missing_type_is_not_a_service_error() {
        assert_eq!(ServiceError::from_json(br#"{"message":"x"}"#), None);
        assert_eq!(ServiceError::from_json(b"<html>"), None);
    }

    #[test]
    fn error_type_header_wins_over_body() {
        let from_header = ServiceError::from_response(
            Some("ThrottlingException:http://internal.amazon.com/"),
            b"<html>busy</html>",
        );
        assert_eq!(from_header, Some(ServiceError::new(ServiceErrorCode::Throttling, "")));

        let with_message = ServiceError::from_response(
            Some("AccessDeniedException"),
            br#"{"__type":"InvalidParameterException","message":"denied"}"#,
        );
        assert_eq!(with_message, Some(ServiceError::new(ServiceErrorCode::AccessDenied, "denied")));

        assert_eq!(ServiceError::from_response(Some(" "), b""), None);
    }

    #[test]
    fn retryable_codes() {
        assert!(ServiceError::new("ThrottlingException", "").is_retryable());
        assert!(!ServiceErrorCode::AccessDenied.is_retryable());
        assert_eq!(
            ServiceError::new("AccessDeniedException", "nope").to_string(),
            "AccessDeniedException: nope"
        );
    }
}
