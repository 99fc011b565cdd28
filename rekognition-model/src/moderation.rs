//! Unsafe content moderation.

use crate::enums::{ContentModerationAggregateBy, ContentModerationSortBy, VideoJobStatus};
use crate::media::{HumanLoopActivationOutput, HumanLoopConfig, Image, NotificationChannel, Video, VideoMetadata};
use rekognition_core::shape;

shape! {
    /// A moderation label in the two or three level taxonomy. Top level
    /// labels have an empty `parent_name`.
    pub struct ModerationLabel {
        confidence: f32 => "Confidence",
        name: String => "Name",
        parent_name: String => "ParentName",
        taxonomy_level: i32 => "TaxonomyLevel",
    }
}

shape! {
    pub struct ContentType {
        confidence: f32 => "Confidence",
        name: String => "Name",
    }
}

shape! {
    pub struct ContentModerationDetection {
        timestamp: i64 => "Timestamp",
        moderation_label: ModerationLabel => "ModerationLabel",
        start_timestamp_millis: i64 => "StartTimestampMillis",
        end_timestamp_millis: i64 => "EndTimestampMillis",
        duration_millis: i64 => "DurationMillis",
        content_types: Vec<ContentType> => "ContentTypes",
    }
}

shape! {
    pub struct GetContentModerationRequestMetadata {
        sort_by: ContentModerationSortBy => "SortBy",
        aggregate_by: ContentModerationAggregateBy => "AggregateBy",
    }
}

// ----- DetectModerationLabels -----

shape! {
    pub struct DetectModerationLabelsRequest {
        image: Image => "Image",
        min_confidence: f32 => "MinConfidence",
        human_loop_config: HumanLoopConfig => "HumanLoopConfig",
        /// Custom adapter to use instead of the base model.
        project_version: String => "ProjectVersion",
    }
}

impl DetectModerationLabelsRequest {
    pub fn new(image: Image) -> Self {
        Self::default().with_image(image)
    }
}

shape! {
    pub struct DetectModerationLabelsResult {
        moderation_labels: Vec<ModerationLabel> => "ModerationLabels",
        moderation_model_version: String => "ModerationModelVersion",
        human_loop_activation_output: HumanLoopActivationOutput => "HumanLoopActivationOutput",
        project_version: String => "ProjectVersion",
        content_types: Vec<ContentType> => "ContentTypes",
    }
}

// ----- StartContentModeration / GetContentModeration -----

shape! {
    pub struct StartContentModerationRequest {
        video: Video => "Video",
        min_confidence: f32 => "MinConfidence",
        client_request_token: String => "ClientRequestToken",
        notification_channel: NotificationChannel => "NotificationChannel",
        job_tag: String => "JobTag",
    }
}

impl StartContentModerationRequest {
    pub fn new(video: Video) -> Self {
        Self::default().with_video(video)
    }
}

shape! {
    pub struct StartContentModerationResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetContentModerationRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        sort_by: ContentModerationSortBy => "SortBy",
        aggregate_by: ContentModerationAggregateBy => "AggregateBy",
    }
}

impl GetContentModerationRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetContentModerationResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        video_metadata: VideoMetadata => "VideoMetadata",
        moderation_labels: Vec<ContentModerationDetection> => "ModerationLabels",
        next_token: String => "NextToken",
        moderation_model_version: String => "ModerationModelVersion",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
        get_request_metadata: GetContentModerationRequestMetadata => "GetRequestMetadata",
    }
}
