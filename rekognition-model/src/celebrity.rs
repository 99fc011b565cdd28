//! Celebrity recognition.

use crate::enums::{CelebrityRecognitionSortBy, KnownGenderType, OrientationCorrection, VideoJobStatus};
use crate::face::{ComparedFace, FaceDetail};
use crate::geometry::BoundingBox;
use crate::media::{Image, NotificationChannel, Video, VideoMetadata};
use rekognition_core::shape;

shape! {
    /// Gender the celebrity publicly identifies with.
    pub struct KnownGender {
        r#type: KnownGenderType => "Type",
    }
}

shape! {
    pub struct Celebrity {
        /// Links to more information, such as an IMDb page.
        urls: Vec<String> => "Urls",
        name: String => "Name",
        id: String => "Id",
        face: ComparedFace => "Face",
        match_confidence: f32 => "MatchConfidence",
        known_gender: KnownGender => "KnownGender",
    }
}

shape! {
    pub struct CelebrityDetail {
        urls: Vec<String> => "Urls",
        name: String => "Name",
        id: String => "Id",
        confidence: f32 => "Confidence",
        bounding_box: BoundingBox => "BoundingBox",
        face: FaceDetail => "Face",
        known_gender: KnownGender => "KnownGender",
    }
}

shape! {
    pub struct CelebrityRecognition {
        timestamp: i64 => "Timestamp",
        celebrity: CelebrityDetail => "Celebrity",
    }
}

// ----- RecognizeCelebrities / GetCelebrityInfo -----

shape! {
    pub struct RecognizeCelebritiesRequest {
        image: Image => "Image",
    }
}

impl RecognizeCelebritiesRequest {
    pub fn new(image: Image) -> Self {
        Self::default().with_image(image)
    }
}

shape! {
    pub struct RecognizeCelebritiesResult {
        celebrity_faces: Vec<Celebrity> => "CelebrityFaces",
        unrecognized_faces: Vec<ComparedFace> => "UnrecognizedFaces",
        orientation_correction: OrientationCorrection => "OrientationCorrection",
    }
}

shape! {
    pub struct GetCelebrityInfoRequest {
        id: String => "Id",
    }
}

impl GetCelebrityInfoRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self::default().with_id(id)
    }
}

shape! {
    pub struct GetCelebrityInfoResult {
        urls: Vec<String> => "Urls",
        name: String => "Name",
        known_gender: KnownGender => "KnownGender",
    }
}

// ----- StartCelebrityRecognition / GetCelebrityRecognition -----

shape! {
    pub struct StartCelebrityRecognitionRequest {
        video: Video => "Video",
        client_request_token: String => "ClientRequestToken",
        notification_channel: NotificationChannel => "NotificationChannel",
        job_tag: String => "JobTag",
    }
}

impl StartCelebrityRecognitionRequest {
    pub fn new(video: Video) -> Self {
        Self::default().with_video(video)
    }
}

shape! {
    pub struct StartCelebrityRecognitionResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetCelebrityRecognitionRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        sort_by: CelebrityRecognitionSortBy => "SortBy",
    }
}

impl GetCelebrityRecognitionRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetCelebrityRecognitionResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        video_metadata: VideoMetadata => "VideoMetadata",
        next_token: String => "NextToken",
        celebrities: Vec<CelebrityRecognition> => "Celebrities",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
    }
}
