//! Batch media analysis jobs driven by a manifest of images.

use crate::enums::{MediaAnalysisJobFailureCode, MediaAnalysisJobStatus};
use crate::media::S3Object;
use rekognition_core::{shape, Timestamp};

shape! {
    /// Manifest listing the images to analyze.
    pub struct MediaAnalysisInput {
        s3_object: S3Object => "S3Object",
    }
}

shape! {
    pub struct MediaAnalysisOutputConfig {
        s3_bucket: String => "S3Bucket",
        s3_key_prefix: String => "S3KeyPrefix",
    }
}

shape! {
    pub struct MediaAnalysisDetectModerationLabelsConfig {
        min_confidence: f32 => "MinConfidence",
        project_version: String => "ProjectVersion",
    }
}

shape! {
    pub struct MediaAnalysisOperationsConfig {
        detect_moderation_labels: MediaAnalysisDetectModerationLabelsConfig => "DetectModerationLabels",
    }
}

shape! {
    pub struct MediaAnalysisModelVersions {
        moderation: String => "Moderation",
    }
}

shape! {
    pub struct MediaAnalysisResults {
        s3_object: S3Object => "S3Object",
        model_versions: MediaAnalysisModelVersions => "ModelVersions",
    }
}

shape! {
    pub struct MediaAnalysisJobFailureDetails {
        code: MediaAnalysisJobFailureCode => "Code",
        message: String => "Message",
    }
}

shape! {
    pub struct MediaAnalysisManifestSummary {
        s3_object: S3Object => "S3Object",
    }
}

shape! {
    pub struct MediaAnalysisJobDescription {
        job_id: String => "JobId",
        job_name: String => "JobName",
        operations_config: MediaAnalysisOperationsConfig => "OperationsConfig",
        status: MediaAnalysisJobStatus => "Status",
        failure_details: MediaAnalysisJobFailureDetails => "FailureDetails",
        creation_timestamp: Timestamp => "CreationTimestamp",
        completion_timestamp: Timestamp => "CompletionTimestamp",
        input: MediaAnalysisInput => "Input",
        output_config: MediaAnalysisOutputConfig => "OutputConfig",
        kms_key_id: String => "KmsKeyId",
        results: MediaAnalysisResults => "Results",
        manifest_summary: MediaAnalysisManifestSummary => "ManifestSummary",
    }
}

shape! {
    pub struct StartMediaAnalysisJobRequest {
        client_request_token: String => "ClientRequestToken",
        job_name: String => "JobName",
        operations_config: MediaAnalysisOperationsConfig => "OperationsConfig",
        input: MediaAnalysisInput => "Input",
        output_config: MediaAnalysisOutputConfig => "OutputConfig",
        kms_key_id: String => "KmsKeyId",
    }
}

impl StartMediaAnalysisJobRequest {
    pub fn new(
        operations_config: MediaAnalysisOperationsConfig,
        input: MediaAnalysisInput,
        output_config: MediaAnalysisOutputConfig,
    ) -> Self {
        Self::default()
            .with_operations_config(operations_config)
            .with_input(input)
            .with_output_config(output_config)
    }
}

shape! {
    pub struct StartMediaAnalysisJobResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetMediaAnalysisJobRequest {
        job_id: String => "JobId",
    }
}

impl GetMediaAnalysisJobRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetMediaAnalysisJobResult {
        job_id: String => "JobId",
        job_name: String => "JobName",
        operations_config: MediaAnalysisOperationsConfig => "OperationsConfig",
        status: MediaAnalysisJobStatus => "Status",
        failure_details: MediaAnalysisJobFailureDetails => "FailureDetails",
        creation_timestamp: Timestamp => "CreationTimestamp",
        completion_timestamp: Timestamp => "CompletionTimestamp",
        input: MediaAnalysisInput => "Input",
        output_config: MediaAnalysisOutputConfig => "OutputConfig",
        kms_key_id: String => "KmsKeyId",
        results: MediaAnalysisResults => "Results",
        manifest_summary: MediaAnalysisManifestSummary => "ManifestSummary",
    }
}

shape! {
    pub struct ListMediaAnalysisJobsRequest {
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

shape! {
    pub struct ListMediaAnalysisJobsResult {
        next_token: String => "NextToken",
        media_analysis_jobs: Vec<MediaAnalysisJobDescription> => "MediaAnalysisJobs",
    }
}
