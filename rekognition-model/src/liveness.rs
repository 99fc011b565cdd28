//! Face Liveness sessions.

use crate::enums::LivenessSessionStatus;
use crate::geometry::BoundingBox;
use crate::media::S3Object;
use rekognition_core::{shape, Blob};

shape! {
    pub struct LivenessOutputConfig {
        s3_bucket: String => "S3Bucket",
        s3_key_prefix: String => "S3KeyPrefix",
    }
}

shape! {
    pub struct CreateFaceLivenessSessionRequestSettings {
        output_config: LivenessOutputConfig => "OutputConfig",
        /// Number of audit images returned, 0 to 4.
        audit_images_limit: i32 => "AuditImagesLimit",
    }
}

shape! {
    /// A frame captured during the session. `bytes` is only set when no S3
    /// output was configured.
    pub struct AuditImage {
        bytes: Blob => "Bytes",
        s3_object: S3Object => "S3Object",
        bounding_box: BoundingBox => "BoundingBox",
    }
}

shape! {
    pub struct CreateFaceLivenessSessionRequest {
        kms_key_id: String => "KmsKeyId",
        settings: CreateFaceLivenessSessionRequestSettings => "Settings",
        client_request_token: String => "ClientRequestToken",
    }
}

shape! {
    pub struct CreateFaceLivenessSessionResult {
        session_id: String => "SessionId",
    }
}

shape! {
    pub struct GetFaceLivenessSessionResultsRequest {
        session_id: String => "SessionId",
    }
}

impl GetFaceLivenessSessionResultsRequest {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self::default().with_session_id(session_id)
    }
}

shape! {
    pub struct GetFaceLivenessSessionResultsResult {
        session_id: String => "SessionId",
        status: LivenessSessionStatus => "Status",
        /// Likelihood, 0 to 100, that the user was live.
        confidence: f32 => "Confidence",
        reference_image: AuditImage => "ReferenceImage",
        audit_images: Vec<AuditImage> => "AuditImages",
    }
}
