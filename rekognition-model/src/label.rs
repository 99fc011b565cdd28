//! Object and scene labels, for images and stored videos.

use crate::enums::{
    DetectLabelsFeatureName, LabelDetectionAggregateBy, LabelDetectionFeatureName,
    LabelDetectionSortBy, OrientationCorrection, VideoJobStatus,
};
use crate::geometry::BoundingBox;
use crate::media::{Image, NotificationChannel, Video, VideoMetadata};
use rekognition_core::shape;

shape! {
    pub struct DominantColor {
        red: i32 => "Red",
        blue: i32 => "Blue",
        green: i32 => "Green",
        hex_code: String => "HexCode",
        css_color: String => "CSSColor",
        simplified_color: String => "SimplifiedColor",
        pixel_percent: f32 => "PixelPercent",
    }
}

shape! {
    /// One occurrence of a label, with its own location.
    pub struct Instance {
        bounding_box: BoundingBox => "BoundingBox",
        confidence: f32 => "Confidence",
        dominant_colors: Vec<DominantColor> => "DominantColors",
    }
}

shape! {
    pub struct Parent {
        name: String => "Name",
    }
}

shape! {
    pub struct LabelAlias {
        name: String => "Name",
    }
}

shape! {
    pub struct LabelCategory {
        name: String => "Name",
    }
}

shape! {
    pub struct Label {
        name: String => "Name",
        confidence: f32 => "Confidence",
        instances: Vec<Instance> => "Instances",
        parents: Vec<Parent> => "Parents",
        aliases: Vec<LabelAlias> => "Aliases",
        categories: Vec<LabelCategory> => "Categories",
    }
}

shape! {
    /// Inclusion and exclusion filters for general labels. Exclusions win.
    pub struct GeneralLabelsSettings {
        label_inclusion_filters: Vec<String> => "LabelInclusionFilters",
        label_exclusion_filters: Vec<String> => "LabelExclusionFilters",
        label_category_inclusion_filters: Vec<String> => "LabelCategoryInclusionFilters",
        label_category_exclusion_filters: Vec<String> => "LabelCategoryExclusionFilters",
    }
}

shape! {
    pub struct DetectLabelsImagePropertiesSettings {
        max_dominant_colors: i32 => "MaxDominantColors",
    }
}

shape! {
    pub struct DetectLabelsSettings {
        general_labels: GeneralLabelsSettings => "GeneralLabels",
        image_properties: DetectLabelsImagePropertiesSettings => "ImageProperties",
    }
}

shape! {
    pub struct DetectLabelsImageQuality {
        brightness: f32 => "Brightness",
        sharpness: f32 => "Sharpness",
        contrast: f32 => "Contrast",
    }
}

shape! {
    pub struct DetectLabelsImageForeground {
        quality: DetectLabelsImageQuality => "Quality",
        dominant_colors: Vec<DominantColor> => "DominantColors",
    }
}

shape! {
    pub struct DetectLabelsImageBackground {
        quality: DetectLabelsImageQuality => "Quality",
        dominant_colors: Vec<DominantColor> => "DominantColors",
    }
}

shape! {
    pub struct DetectLabelsImageProperties {
        quality: DetectLabelsImageQuality => "Quality",
        dominant_colors: Vec<DominantColor> => "DominantColors",
        foreground: DetectLabelsImageForeground => "Foreground",
        background: DetectLabelsImageBackground => "Background",
    }
}

shape! {
    /// A label found in a video, at a timestamp or over a segment.
    pub struct LabelDetection {
        /// Milliseconds from the start of the video.
        timestamp: i64 => "Timestamp",
        label: Label => "Label",
        start_timestamp_millis: i64 => "StartTimestampMillis",
        end_timestamp_millis: i64 => "EndTimestampMillis",
        duration_millis: i64 => "DurationMillis",
    }
}

shape! {
    pub struct LabelDetectionSettings {
        general_labels: GeneralLabelsSettings => "GeneralLabels",
    }
}

shape! {
    /// Echo of the parameters a `GetLabelDetection` call was made with.
    pub struct GetLabelDetectionRequestMetadata {
        sort_by: LabelDetectionSortBy => "SortBy",
        aggregate_by: LabelDetectionAggregateBy => "AggregateBy",
    }
}

// ----- DetectLabels -----

shape! {
    pub struct DetectLabelsRequest {
        image: Image => "Image",
        max_labels: i32 => "MaxLabels",
        min_confidence: f32 => "MinConfidence",
        features: Vec<DetectLabelsFeatureName> => "Features",
        settings: DetectLabelsSettings => "Settings",
    }
}

impl DetectLabelsRequest {
    pub fn new(image: Image) -> Self {
        Self::default().with_image(image)
    }
}

shape! {
    pub struct DetectLabelsResult {
        labels: Vec<Label> => "Labels",
        orientation_correction: OrientationCorrection => "OrientationCorrection",
        label_model_version: String => "LabelModelVersion",
        image_properties: DetectLabelsImageProperties => "ImageProperties",
    }
}

// ----- StartLabelDetection / GetLabelDetection -----

shape! {
    pub struct StartLabelDetectionRequest {
        video: Video => "Video",
        client_request_token: String => "ClientRequestToken",
        min_confidence: f32 => "MinConfidence",
        notification_channel: NotificationChannel => "NotificationChannel",
        job_tag: String => "JobTag",
        features: Vec<LabelDetectionFeatureName> => "Features",
        settings: LabelDetectionSettings => "Settings",
    }
}

impl StartLabelDetectionRequest {
    pub fn new(video: Video) -> Self {
        Self::default().with_video(video)
    }
}

shape! {
    pub struct StartLabelDetectionResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetLabelDetectionRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        sort_by: LabelDetectionSortBy => "SortBy",
        aggregate_by: LabelDetectionAggregateBy => "AggregateBy",
    }
}

impl GetLabelDetectionRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetLabelDetectionResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        video_metadata: VideoMetadata => "VideoMetadata",
        next_token: String => "NextToken",
        labels: Vec<LabelDetection> => "Labels",
        label_model_version: String => "LabelModelVersion",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
        get_request_metadata: GetLabelDetectionRequestMetadata => "GetRequestMetadata",
    }
}
