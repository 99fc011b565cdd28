//! Text detection in images and stored videos.

use crate::enums::{TextTypes, VideoJobStatus};
use crate::geometry::{Geometry, RegionOfInterest};
use crate::media::{Image, NotificationChannel, Video, VideoMetadata};
use rekognition_core::shape;

shape! {
    /// A detected line or word. Words carry the `id` of their line in
    /// `parent_id`.
    pub struct TextDetection {
        detected_text: String => "DetectedText",
        r#type: TextTypes => "Type",
        id: i32 => "Id",
        parent_id: i32 => "ParentId",
        confidence: f32 => "Confidence",
        geometry: Geometry => "Geometry",
    }
}

shape! {
    pub struct TextDetectionResult {
        timestamp: i64 => "Timestamp",
        text_detection: TextDetection => "TextDetection",
    }
}

shape! {
    /// Minimum size and confidence a word must have to be reported.
    pub struct DetectionFilter {
        min_confidence: f32 => "MinConfidence",
        min_bounding_box_height: f32 => "MinBoundingBoxHeight",
        min_bounding_box_width: f32 => "MinBoundingBoxWidth",
    }
}

shape! {
    pub struct DetectTextFilters {
        word_filter: DetectionFilter => "WordFilter",
        regions_of_interest: Vec<RegionOfInterest> => "RegionsOfInterest",
    }
}

shape! {
    pub struct StartTextDetectionFilters {
        word_filter: DetectionFilter => "WordFilter",
        regions_of_interest: Vec<RegionOfInterest> => "RegionsOfInterest",
    }
}

shape! {
    pub struct DetectTextRequest {
        image: Image => "Image",
        filters: DetectTextFilters => "Filters",
    }
}

impl DetectTextRequest {
    pub fn new(image: Image) -> Self {
        Self::default().with_image(image)
    }
}

shape! {
    pub struct DetectTextResult {
        text_detections: Vec<TextDetection> => "TextDetections",
        text_model_version: String => "TextModelVersion",
    }
}

shape! {
    pub struct StartTextDetectionRequest {
        video: Video => "Video",
        client_request_token: String => "ClientRequestToken",
        notification_channel: NotificationChannel => "NotificationChannel",
        job_tag: String => "JobTag",
        filters: StartTextDetectionFilters => "Filters",
    }
}

impl StartTextDetectionRequest {
    pub fn new(video: Video) -> Self {
        Self::default().with_video(video)
    }
}

shape! {
    pub struct StartTextDetectionResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetTextDetectionRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

impl GetTextDetectionRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetTextDetectionResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        video_metadata: VideoMetadata => "VideoMetadata",
        text_detections: Vec<TextDetectionResult> => "TextDetections",
        next_token: String => "NextToken",
        text_model_version: String => "TextModelVersion",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
    }
}
