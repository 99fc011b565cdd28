//! Face analysis: detected face attributes, stored faces, matches, and the
//! image and video operations built on them.

use crate::enums::{
    Attribute, EmotionName, FaceAttributes, FaceSearchSortBy, GenderType, LandmarkType,
    OrientationCorrection, PersonTrackingSortBy, QualityFilter, Reason, VideoJobStatus,
};
use crate::geometry::{BoundingBox, Pose};
use crate::media::{Image, ImageQuality, NotificationChannel, Video, VideoMetadata};
use crate::user::UnsuccessfulFaceDeletion;
use rekognition_core::shape;

shape! {
    /// Estimated age range in years.
    pub struct AgeRange {
        low: i32 => "Low",
        high: i32 => "High",
    }
}

shape! {
    pub struct Smile {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct Eyeglasses {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct Sunglasses {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    /// Predicted physical appearance, not an identification of gender.
    pub struct Gender {
        value: GenderType => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct Beard {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct Mustache {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct EyesOpen {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct MouthOpen {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    /// Whether the face is partially covered by an object.
    pub struct FaceOccluded {
        value: bool => "Value",
        confidence: f32 => "Confidence",
    }
}

shape! {
    /// Apparent emotional expression.
    pub struct Emotion {
        r#type: EmotionName => "Type",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct Landmark {
        r#type: LandmarkType => "Type",
        x: f32 => "X",
        y: f32 => "Y",
    }
}

shape! {
    /// Gaze direction in degrees.
    pub struct EyeDirection {
        yaw: f32 => "Yaw",
        pitch: f32 => "Pitch",
        confidence: f32 => "Confidence",
    }
}

shape! {
    /// Everything the service reports about one detected face. Members beyond
    /// the default set are only present when requested via `Attributes`.
    pub struct FaceDetail {
        bounding_box: BoundingBox => "BoundingBox",
        age_range: AgeRange => "AgeRange",
        smile: Smile => "Smile",
        eyeglasses: Eyeglasses => "Eyeglasses",
        sunglasses: Sunglasses => "Sunglasses",
        gender: Gender => "Gender",
        beard: Beard => "Beard",
        mustache: Mustache => "Mustache",
        eyes_open: EyesOpen => "EyesOpen",
        mouth_open: MouthOpen => "MouthOpen",
        emotions: Vec<Emotion> => "Emotions",
        landmarks: Vec<Landmark> => "Landmarks",
        pose: Pose => "Pose",
        quality: ImageQuality => "Quality",
        confidence: f32 => "Confidence",
        face_occluded: FaceOccluded => "FaceOccluded",
        eye_direction: EyeDirection => "EyeDirection",
    }
}

shape! {
    /// A face found in a target image or by celebrity recognition.
    pub struct ComparedFace {
        bounding_box: BoundingBox => "BoundingBox",
        confidence: f32 => "Confidence",
        landmarks: Vec<Landmark> => "Landmarks",
        pose: Pose => "Pose",
        quality: ImageQuality => "Quality",
        emotions: Vec<Emotion> => "Emotions",
        smile: Smile => "Smile",
    }
}

shape! {
    pub struct ComparedSourceImageFace {
        bounding_box: BoundingBox => "BoundingBox",
        confidence: f32 => "Confidence",
    }
}

shape! {
    pub struct CompareFacesMatch {
        similarity: f32 => "Similarity",
        face: ComparedFace => "Face",
    }
}

shape! {
    /// A face stored in a collection.
    pub struct Face {
        face_id: String => "FaceId",
        bounding_box: BoundingBox => "BoundingBox",
        image_id: String => "ImageId",
        external_image_id: String => "ExternalImageId",
        confidence: f32 => "Confidence",
        index_faces_model_version: String => "IndexFacesModelVersion",
        user_id: String => "UserId",
    }
}

shape! {
    pub struct FaceMatch {
        similarity: f32 => "Similarity",
        face: Face => "Face",
    }
}

shape! {
    /// A face added to a collection together with its detected attributes.
    pub struct FaceRecord {
        face: Face => "Face",
        face_detail: FaceDetail => "FaceDetail",
    }
}

shape! {
    pub struct UnindexedFace {
        reasons: Vec<Reason> => "Reasons",
        face_detail: FaceDetail => "FaceDetail",
    }
}

shape! {
    /// A face seen in a video, `timestamp` milliseconds from the start.
    pub struct FaceDetection {
        timestamp: i64 => "Timestamp",
        face: FaceDetail => "Face",
    }
}

shape! {
    pub struct PersonDetail {
        /// Identifier of the person, stable across one video.
        index: i64 => "Index",
        bounding_box: BoundingBox => "BoundingBox",
        face: FaceDetail => "Face",
    }
}

shape! {
    pub struct PersonDetection {
        timestamp: i64 => "Timestamp",
        person: PersonDetail => "Person",
    }
}

shape! {
    pub struct PersonMatch {
        timestamp: i64 => "Timestamp",
        person: PersonDetail => "Person",
        face_matches: Vec<FaceMatch> => "FaceMatches",
    }
}

shape! {
    /// Face search parameters of a stream processor.
    pub struct FaceSearchSettings {
        collection_id: String => "CollectionId",
        face_match_threshold: f32 => "FaceMatchThreshold",
    }
}

// ----- CompareFaces -----

shape! {
    pub struct CompareFacesRequest {
        source_image: Image => "SourceImage",
        target_image: Image => "TargetImage",
        similarity_threshold: f32 => "SimilarityThreshold",
        quality_filter: QualityFilter => "QualityFilter",
    }
}

impl CompareFacesRequest {
    pub fn new(source_image: Image, target_image: Image) -> Self {
        Self::default()
            .with_source_image(source_image)
            .with_target_image(target_image)
    }
}

shape! {
    pub struct CompareFacesResult {
        source_image_face: ComparedSourceImageFace => "SourceImageFace",
        face_matches: Vec<CompareFacesMatch> => "FaceMatches",
        unmatched_faces: Vec<ComparedFace> => "UnmatchedFaces",
        source_image_orientation_correction: OrientationCorrection => "SourceImageOrientationCorrection",
        target_image_orientation_correction: OrientationCorrection => "TargetImageOrientationCorrection",
    }
}

// ----- DetectFaces -----

shape! {
    pub struct DetectFacesRequest {
        image: Image => "Image",
        attributes: Vec<Attribute> => "Attributes",
    }
}

impl DetectFacesRequest {
    pub fn new(image: Image) -> Self {
        Self::default().with_image(image)
    }
}

shape! {
    pub struct DetectFacesResult {
        face_details: Vec<FaceDetail> => "FaceDetails",
        orientation_correction: OrientationCorrection => "OrientationCorrection",
    }
}

// ----- IndexFaces -----

shape! {
    pub struct IndexFacesRequest {
        collection_id: String => "CollectionId",
        image: Image => "Image",
        external_image_id: String => "ExternalImageId",
        detection_attributes: Vec<Attribute> => "DetectionAttributes",
        max_faces: i32 => "MaxFaces",
        quality_filter: QualityFilter => "QualityFilter",
    }
}

impl IndexFacesRequest {
    pub fn new(collection_id: impl Into<String>, image: Image) -> Self {
        Self::default()
            .with_collection_id(collection_id)
            .with_image(image)
    }
}

shape! {
    pub struct IndexFacesResult {
        face_records: Vec<FaceRecord> => "FaceRecords",
        orientation_correction: OrientationCorrection => "OrientationCorrection",
        face_model_version: String => "FaceModelVersion",
        unindexed_faces: Vec<UnindexedFace> => "UnindexedFaces",
    }
}

// ----- ListFaces -----

shape! {
    pub struct ListFacesRequest {
        collection_id: String => "CollectionId",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
        user_id: String => "UserId",
        face_ids: Vec<String> => "FaceIds",
    }
}

impl ListFacesRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self::default().with_collection_id(collection_id)
    }
}

shape! {
    pub struct ListFacesResult {
        faces: Vec<Face> => "Faces",
        next_token: String => "NextToken",
        face_model_version: String => "FaceModelVersion",
    }
}

// ----- DeleteFaces -----

shape! {
    pub struct DeleteFacesRequest {
        collection_id: String => "CollectionId",
        face_ids: Vec<String> => "FaceIds",
    }
}

impl DeleteFacesRequest {
    pub fn new<I, S>(collection_id: impl Into<String>, face_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default()
            .with_collection_id(collection_id)
            .with_face_ids(face_ids.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}

shape! {
    pub struct DeleteFacesResult {
        deleted_faces: Vec<String> => "DeletedFaces",
        unsuccessful_face_deletions: Vec<UnsuccessfulFaceDeletion> => "UnsuccessfulFaceDeletions",
    }
}

// ----- SearchFaces -----

shape! {
    pub struct SearchFacesRequest {
        collection_id: String => "CollectionId",
        face_id: String => "FaceId",
        max_faces: i32 => "MaxFaces",
        face_match_threshold: f32 => "FaceMatchThreshold",
    }
}

impl SearchFacesRequest {
    pub fn new(collection_id: impl Into<String>, face_id: impl Into<String>) -> Self {
        Self::default()
            .with_collection_id(collection_id)
            .with_face_id(face_id)
    }
}

shape! {
    pub struct SearchFacesResult {
        searched_face_id: String => "SearchedFaceId",
        face_matches: Vec<FaceMatch> => "FaceMatches",
        face_model_version: String => "FaceModelVersion",
    }
}

// ----- SearchFacesByImage -----

shape! {
    pub struct SearchFacesByImageRequest {
        collection_id: String => "CollectionId",
        image: Image => "Image",
        max_faces: i32 => "MaxFaces",
        face_match_threshold: f32 => "FaceMatchThreshold",
        quality_filter: QualityFilter => "QualityFilter",
    }
}

impl SearchFacesByImageRequest {
    pub fn new(collection_id: impl Into<String>, image: Image) -> Self {
        Self::default()
            .with_collection_id(collection_id)
            .with_image(image)
    }
}

shape! {
    pub struct SearchFacesByImageResult {
        searched_face_bounding_box: BoundingBox => "SearchedFaceBoundingBox",
        searched_face_confidence: f32 => "SearchedFaceConfidence",
        face_matches: Vec<FaceMatch> => "FaceMatches",
        face_model_version: String => "FaceModelVersion",
    }
}

// ----- StartFaceDetection / GetFaceDetection -----

shape! {
    pub struct StartFaceDetectionRequest {
        video: Video => "Video",
        client_request_token: String => "ClientRequestToken",
        notification_channel: NotificationChannel => "NotificationChannel",
        face_attributes: FaceAttributes => "FaceAttributes",
        job_tag: String => "JobTag",
    }
}

impl StartFaceDetectionRequest {
    pub fn new(video: Video) -> Self {
        Self::default().with_video(video)
    }
}

shape! {
    pub struct StartFaceDetectionResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetFaceDetectionRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

impl GetFaceDetectionRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetFaceDetectionResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        video_metadata: VideoMetadata => "VideoMetadata",
        next_token: String => "NextToken",
        faces: Vec<FaceDetection> => "Faces",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
    }
}

// ----- StartFaceSearch / GetFaceSearch -----

shape! {
    pub struct StartFaceSearchRequest {
        video: Video => "Video",
        client_request_token: String => "ClientRequestToken",
        face_match_threshold: f32 => "FaceMatchThreshold",
        collection_id: String => "CollectionId",
        notification_channel: NotificationChannel => "NotificationChannel",
        job_tag: String => "JobTag",
    }
}

impl StartFaceSearchRequest {
    pub fn new(video: Video, collection_id: impl Into<String>) -> Self {
        Self::default()
            .with_video(video)
            .with_collection_id(collection_id)
    }
}

shape! {
    pub struct StartFaceSearchResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetFaceSearchRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        sort_by: FaceSearchSortBy => "SortBy",
    }
}

impl GetFaceSearchRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetFaceSearchResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        next_token: String => "NextToken",
        video_metadata: VideoMetadata => "VideoMetadata",
        persons: Vec<PersonMatch> => "Persons",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
    }
}

// ----- StartPersonTracking / GetPersonTracking -----

shape! {
    pub struct StartPersonTrackingRequest {
        video: Video => "Video",
        client_request_token: String => "ClientRequestToken",
        notification_channel: NotificationChannel => "NotificationChannel",
        job_tag: String => "JobTag",
    }
}

impl StartPersonTrackingRequest {
    pub fn new(video: Video) -> Self {
        Self::default().with_video(video)
    }
}

shape! {
    pub struct StartPersonTrackingResult {
        job_id: String => "JobId",
    }
}

shape! {
    pub struct GetPersonTrackingRequest {
        job_id: String => "JobId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        sort_by: PersonTrackingSortBy => "SortBy",
    }
}

impl GetPersonTrackingRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self::default().with_job_id(job_id)
    }
}

shape! {
    pub struct GetPersonTrackingResult {
        job_status: VideoJobStatus => "JobStatus",
        status_message: String => "StatusMessage",
        video_metadata: VideoMetadata => "VideoMetadata",
        next_token: String => "NextToken",
        persons: Vec<PersonDetection> => "Persons",
        job_id: String => "JobId",
        video: Video => "Video",
        job_tag: String => "JobTag",
    }
}
