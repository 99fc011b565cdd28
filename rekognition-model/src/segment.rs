//! Shot and technical cue segments in stored videos.

use crate::enums::{SegmentType, TechnicalCueType, VideoJobStatus};
use crate::media::{AudioMetadata, NotificationChannel, Video, VideoMetadata};
use rekognition_core::shape;

shape! {
    pub struct ShotSegment {
        index: i64 => "Index",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct TechnicalCueSegment {
        r#type: TechnicalCueType => "Type",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct SegmentTypeInfo {
        r#type: SegmentType => "Type",
        model_version: String => "ModelVersion",
    }
}

shape! {
    /// A segment of the video. Timecodes use SMPTE `HH:MM:SS:fr` notation.
    pub struct SegmentDetection {
        r#type: SegmentType => "Type",
        start_timestamp_millis: i64 => "StartTimestampMillis",
        end_timestamp_millis: i64 => "EndTimestampMillis",
        duration_millis: i64 => "DurationMillis",
        start_timecode_smpte: String => "StartTimecodeSMPTE",
        end_timecode_smpte: String => "EndTimecodeSMPTE",
        duration_smpte: String => "DurationSMPTE",
        technical_cue_segment: TechnicalCueSegment => "TechnicalCueSegment",
        shot_segment: ShotSegment => "ShotSegment",
        start_frame_number: i64 => "StartFrameNumber",
        end_frame_number: i64 => "EndFrameNumber",
        duration_frames: i64 => "DurationFrames",
    }
}

shape! {
    /// Tuning for black frame detection.
    pub struct BlackFrame {
        max_pixel_threshold: f32 => "MaxPixelThreshold",
        min_coverage_percentage: f32 => "MinCoveragePercentage",
    }
}

shape! {
    pub struct StartTechnicalCueDetectionFilter {
        min_segment_confidence: f32 => "MinSegmentConfidence",
        black_frame: BlackFrame => "BlackFrame",
    }
}

shape! {
    pub struct StartShotDetectionFilter {
        min_segment_confidence: f32 => "MinSegmentConfidence",
    }
}

shape! {
    pub struct StartSegmentDetectionFilters {
        technical_cue_filter: StartTechnicalCueDetectionFilter => "TechnicalCueFilter",
        shot_filter: StartShotDetectionFilter => "ShotFilter",
    }
}

shape! {
    pub struct StartSegmentDetectionRequest {
        video: Video => "Video",
        client_request_token: String => "ClientRequestToken",
        notification_channel: NotificationChannel => "NotificationChannel",
        job_tag: String => "JobTag",
        filters: StartSegmentDetectionFilters => "Filters",
        segment_types: Vec<SegmentType> => "SegmentTypes",
    }
}

impl StartSegmentDetectionRequest {
    pub fn new(video: Video, segment_types: impl IntoIterator<Item = SegmentType>) -> Self {
        Self::default()
            .with_video(video)
            .with_segment_types(segment_types.into_iter().collect::<Vec<SegmentType>>())
    }
}

shape! {
    pub struct StartSegmentDetectionResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetSegmentDetectionRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

impl GetSegmentDetectionRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetSegmentDetectionResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        /// One entry per video stream in the input.
        video_metadata: Vec<VideoMetadata> => "VideoMetadata",
        /// One entry per audio stream in the input.
        audio_metadata: Vec<AudioMetadata> => "AudioMetadata",
        next_token: String => "NextToken",
        segments: Vec<SegmentDetection> => "Segments",
        selected_segment_types: Vec<SegmentTypeInfo> => "SelectedSegmentTypes",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
    }
}
