//! Closed value sets of the Rekognition API.
//!
//! Every enum keeps wire values it does not know in `Unrecognized`, so a
//! response from a newer service version never fails to decode.

use rekognition_core::string_enum;

string_enum! {
    /// Facial attributes to return from face detection.
    pub enum Attribute {
        Default => "DEFAULT",
        All => "ALL",
        AgeRange => "AGE_RANGE",
        Beard => "BEARD",
        Emotions => "EMOTIONS",
        EyeDirection => "EYE_DIRECTION",
        Eyeglasses => "EYEGLASSES",
        EyesOpen => "EYES_OPEN",
        Gender => "GENDER",
        MouthOpen => "MOUTH_OPEN",
        Mustache => "MUSTACHE",
        FaceOccluded => "FACE_OCCLUDED",
        Smile => "SMILE",
        Sunglasses => "SUNGLASSES",
    }
}

string_enum! {
    pub enum BodyPart {
        Face => "FACE",
        Head => "HEAD",
        LeftHand => "LEFT_HAND",
        RightHand => "RIGHT_HAND",
    }
}

string_enum! {
    pub enum CelebrityRecognitionSortBy {
        Id => "ID",
        Timestamp => "TIMESTAMP",
    }
}

string_enum! {
    /// Conditions under which a human loop review is started.
    pub enum ContentClassifier {
        FreeOfPersonallyIdentifiableInformation => "FreeOfPersonallyIdentifiableInformation",
        FreeOfAdultContent => "FreeOfAdultContent",
    }
}

string_enum! {
    pub enum ContentModerationAggregateBy {
        Timestamps => "TIMESTAMPS",
        Segments => "SEGMENTS",
    }
}

string_enum! {
    pub enum ContentModerationSortBy {
        Name => "NAME",
        Timestamp => "TIMESTAMP",
    }
}

string_enum! {
    /// The kind of model a Custom Labels project trains.
    pub enum CustomizationFeature {
        ContentModeration => "CONTENT_MODERATION",
        CustomLabels => "CUSTOM_LABELS",
    }
}

string_enum! {
    pub enum DatasetStatus {
        CreateInProgress => "CREATE_IN_PROGRESS",
        CreateComplete => "CREATE_COMPLETE",
        CreateFailed => "CREATE_FAILED",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        UpdateComplete => "UPDATE_COMPLETE",
        UpdateFailed => "UPDATE_FAILED",
        DeleteInProgress => "DELETE_IN_PROGRESS",
    }
}

string_enum! {
    pub enum DatasetStatusMessageCode {
        Success => "SUCCESS",
        ServiceError => "SERVICE_ERROR",
        ClientError => "CLIENT_ERROR",
    }
}

string_enum! {
    pub enum DatasetType {
        Train => "TRAIN",
        Test => "TEST",
    }
}

string_enum! {
    pub enum DetectLabelsFeatureName {
        GeneralLabels => "GENERAL_LABELS",
        ImageProperties => "IMAGE_PROPERTIES",
    }
}

string_enum! {
    pub enum EmotionName {
        Happy => "HAPPY",
        Sad => "SAD",
        Angry => "ANGRY",
        Confused => "CONFUSED",
        Disgusted => "DISGUSTED",
        Surprised => "SURPRISED",
        Calm => "CALM",
        Unknown => "UNKNOWN",
        Fear => "FEAR",
    }
}

string_enum! {
    pub enum FaceAttributes {
        Default => "DEFAULT",
        All => "ALL",
    }
}

string_enum! {
    pub enum FaceSearchSortBy {
        Index => "INDEX",
        Timestamp => "TIMESTAMP",
    }
}

string_enum! {
    pub enum GenderType {
        Male => "Male",
        Female => "Female",
    }
}

string_enum! {
    pub enum KnownGenderType {
        Male => "Male",
        Female => "Female",
        Nonbinary => "Nonbinary",
        Unlisted => "Unlisted",
    }
}

string_enum! {
    pub enum LabelDetectionAggregateBy {
        Timestamps => "TIMESTAMPS",
        Segments => "SEGMENTS",
    }
}

string_enum! {
    pub enum LabelDetectionFeatureName {
        GeneralLabels => "GENERAL_LABELS",
    }
}

string_enum! {
    pub enum LabelDetectionSortBy {
        Name => "NAME",
        Timestamp => "TIMESTAMP",
    }
}

string_enum! {
    /// Facial landmark positions. The wire values are lower camel case.
    pub enum LandmarkType {
        EyeLeft => "eyeLeft",
        EyeRight => "eyeRight",
        Nose => "nose",
        MouthLeft => "mouthLeft",
        MouthRight => "mouthRight",
        LeftEyeBrowLeft => "leftEyeBrowLeft",
        LeftEyeBrowRight => "leftEyeBrowRight",
        LeftEyeBrowUp => "leftEyeBrowUp",
        RightEyeBrowLeft => "rightEyeBrowLeft",
        RightEyeBrowRight => "rightEyeBrowRight",
        RightEyeBrowUp => "rightEyeBrowUp",
        LeftEyeLeft => "leftEyeLeft",
        LeftEyeRight => "leftEyeRight",
        LeftEyeUp => "leftEyeUp",
        LeftEyeDown => "leftEyeDown",
        RightEyeLeft => "rightEyeLeft",
        RightEyeRight => "rightEyeRight",
        RightEyeUp => "rightEyeUp",
        RightEyeDown => "rightEyeDown",
        NoseLeft => "noseLeft",
        NoseRight => "noseRight",
        MouthUp => "mouthUp",
        MouthDown => "mouthDown",
        LeftPupil => "leftPupil",
        RightPupil => "rightPupil",
        UpperJawlineLeft => "upperJawlineLeft",
        MidJawlineLeft => "midJawlineLeft",
        ChinBottom => "chinBottom",
        MidJawlineRight => "midJawlineRight",
        UpperJawlineRight => "upperJawlineRight",
    }
}

string_enum! {
    pub enum LivenessSessionStatus {
        Created => "CREATED",
        InProgress => "IN_PROGRESS",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        Expired => "EXPIRED",
    }
}

string_enum! {
    pub enum MediaAnalysisJobFailureCode {
        InternalError => "INTERNAL_ERROR",
        InvalidS3Object => "INVALID_S3_OBJECT",
        InvalidManifest => "INVALID_MANIFEST",
        InvalidOutputConfig => "INVALID_OUTPUT_CONFIG",
        InvalidKmsKey => "INVALID_KMS_KEY",
        AccessDenied => "ACCESS_DENIED",
        ResourceNotFound => "RESOURCE_NOT_FOUND",
        ResourceNotReady => "RESOURCE_NOT_READY",
        Throttled => "THROTTLED",
    }
}

string_enum! {
    pub enum MediaAnalysisJobStatus {
        Created => "CREATED",
        Queued => "QUEUED",
        InProgress => "IN_PROGRESS",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum OrientationCorrection {
        Rotate0 => "ROTATE_0",
        Rotate90 => "ROTATE_90",
        Rotate180 => "ROTATE_180",
        Rotate270 => "ROTATE_270",
    }
}

string_enum! {
    pub enum PersonTrackingSortBy {
        Index => "INDEX",
        Timestamp => "TIMESTAMP",
    }
}

string_enum! {
    pub enum ProjectAutoUpdate {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum ProjectStatus {
        Creating => "CREATING",
        Created => "CREATED",
        Deleting => "DELETING",
    }
}

string_enum! {
    /// Lifecycle state of a trained model version, as reported by the service.
    pub enum ProjectVersionStatus {
        TrainingInProgress => "TRAINING_IN_PROGRESS",
        TrainingCompleted => "TRAINING_COMPLETED",
        TrainingFailed => "TRAINING_FAILED",
        Starting => "STARTING",
        Running => "RUNNING",
        Failed => "FAILED",
        Stopping => "STOPPING",
        Stopped => "STOPPED",
        Deleting => "DELETING",
        CopyingInProgress => "COPYING_IN_PROGRESS",
        CopyingCompleted => "COPYING_COMPLETED",
        CopyingFailed => "COPYING_FAILED",
        Deprecated => "DEPRECATED",
        Expired => "EXPIRED",
    }
}

string_enum! {
    pub enum ProtectiveEquipmentType {
        FaceCover => "FACE_COVER",
        HandCover => "HAND_COVER",
        HeadCover => "HEAD_COVER",
    }
}

string_enum! {
    pub enum QualityFilter {
        None => "NONE",
        Auto => "AUTO",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

string_enum! {
    /// Why a detected face was not indexed.
    pub enum Reason {
        ExceedsMaxFaces => "EXCEEDS_MAX_FACES",
        ExtremePose => "EXTREME_POSE",
        LowBrightness => "LOW_BRIGHTNESS",
        LowSharpness => "LOW_SHARPNESS",
        LowConfidence => "LOW_CONFIDENCE",
        SmallBoundingBox => "SMALL_BOUNDING_BOX",
        LowFaceQuality => "LOW_FACE_QUALITY",
    }
}

string_enum! {
    pub enum SegmentType {
        TechnicalCue => "TECHNICAL_CUE",
        Shot => "SHOT",
    }
}

string_enum! {
    pub enum StreamProcessorParameterToDelete {
        ConnectedHomeMinConfidence => "ConnectedHomeMinConfidence",
        RegionsOfInterest => "RegionsOfInterest",
    }
}

string_enum! {
    pub enum StreamProcessorStatus {
        Stopped => "STOPPED",
        Starting => "STARTING",
        Running => "RUNNING",
        Failed => "FAILED",
        Stopping => "STOPPING",
        Updating => "UPDATING",
    }
}

string_enum! {
    pub enum TechnicalCueType {
        ColorBars => "ColorBars",
        EndCredits => "EndCredits",
        BlackFrames => "BlackFrames",
        OpeningCredits => "OpeningCredits",
        StudioLogo => "StudioLogo",
        Slate => "Slate",
        Content => "Content",
    }
}

string_enum! {
    pub enum TextTypes {
        Line => "LINE",
        Word => "WORD",
    }
}

string_enum! {
    pub enum UnsearchedFaceReason {
        FaceNotLargest => "FACE_NOT_LARGEST",
        ExceedsMaxFaces => "EXCEEDS_MAX_FACES",
        ExtremePose => "EXTREME_POSE",
        LowBrightness => "LOW_BRIGHTNESS",
        LowSharpness => "LOW_SHARPNESS",
        LowConfidence => "LOW_CONFIDENCE",
        SmallBoundingBox => "SMALL_BOUNDING_BOX",
        LowFaceQuality => "LOW_FACE_QUALITY",
    }
}

string_enum! {
    pub enum UnsuccessfulFaceAssociationReason {
        FaceNotFound => "FACE_NOT_FOUND",
        AssociatedToADifferentUser => "ASSOCIATED_TO_A_DIFFERENT_USER",
        LowMatchConfidence => "LOW_MATCH_CONFIDENCE",
    }
}

string_enum! {
    pub enum UnsuccessfulFaceDeletionReason {
        AssociatedToAnExistingUser => "ASSOCIATED_TO_AN_EXISTING_USER",
        FaceNotFound => "FACE_NOT_FOUND",
    }
}

string_enum! {
    pub enum UnsuccessfulFaceDisassociationReason {
        FaceNotFound => "FACE_NOT_FOUND",
        AssociatedToADifferentUser => "ASSOCIATED_TO_A_DIFFERENT_USER",
    }
}

string_enum! {
    pub enum UserStatus {
        Active => "ACTIVE",
        Updating => "UPDATING",
        Creating => "CREATING",
        Created => "CREATED",
    }
}

string_enum! {
    pub enum VideoColorRange {
        Full => "FULL",
        Limited => "LIMITED",
    }
}

string_enum! {
    /// Status of an asynchronous video analysis job.
    pub enum VideoJobStatus {
        InProgress => "IN_PROGRESS",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
    }
}

impl VideoJobStatus {
    /// `true` once the job will not change state again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl MediaAnalysisJobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_keep_their_case() {
        assert_eq!(LandmarkType::UpperJawlineLeft.as_str(), "upperJawlineLeft");
        assert_eq!(GenderType::from("Female"), GenderType::Female);
        assert_eq!(TechnicalCueType::BlackFrames.to_string(), "BlackFrames");
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert_eq!(
            QualityFilter::from("auto"),
            QualityFilter::Unrecognized("auto".into())
        );
    }

    #[test]
    fn terminal_states() {
        assert!(!VideoJobStatus::InProgress.is_terminal());
        assert!(VideoJobStatus::from("FAILED").is_terminal());
        assert!(!VideoJobStatus::from("PAUSED").is_terminal());
        assert!(MediaAnalysisJobStatus::Succeeded.is_terminal());
    }
}
