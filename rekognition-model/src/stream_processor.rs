//! Stream processors: long running analysis of Kinesis video streams.

use crate::enums::{StreamProcessorParameterToDelete, StreamProcessorStatus};
use crate::face::FaceSearchSettings;
use crate::geometry::RegionOfInterest;
use crate::media::{KinesisDataStream, KinesisVideoStream, S3Destination};
use rekognition_core::{shape, Timestamp};
use std::collections::BTreeMap;

shape! {
    pub struct StreamProcessor {
        name: String => "Name",
        status: StreamProcessorStatus => "Status",
    }
}

shape! {
    pub struct StreamProcessorInput {
        kinesis_video_stream: KinesisVideoStream => "KinesisVideoStream",
    }
}

shape! {
    /// Face search processors write to a data stream, connected home
    /// processors to S3.
    pub struct StreamProcessorOutput {
        kinesis_data_stream: KinesisDataStream => "KinesisDataStream",
        s3_destination: S3Destination => "S3Destination",
    }
}

shape! {
    /// Labels to watch for: `PERSON`, `PET`, `PACKAGE` or `ALL`.
    pub struct ConnectedHomeSettings {
        labels: Vec<String> => "Labels",
        min_confidence: f32 => "MinConfidence",
    }
}

shape! {
    pub struct ConnectedHomeSettingsForUpdate {
        labels: Vec<String> => "Labels",
        min_confidence: f32 => "MinConfidence",
    }
}

shape! {
    /// Exactly one of the members selects what the processor does.
    pub struct StreamProcessorSettings {
        face_search: FaceSearchSettings => "FaceSearch",
        connected_home: ConnectedHomeSettings => "ConnectedHome",
    }
}

shape! {
    pub struct StreamProcessorSettingsForUpdate {
        connected_home_for_update: ConnectedHomeSettingsForUpdate => "ConnectedHomeForUpdate",
    }
}

shape! {
    pub struct StreamProcessorNotificationChannel {
        sns_topic_arn: String => "SNSTopicArn",
    }
}

shape! {
    pub struct StreamProcessorDataSharingPreference {
        opt_in: bool => "OptIn",
    }
}

shape! {
    /// Where in the video stream processing starts. Set at most one member.
    pub struct KinesisVideoStreamStartSelector {
        /// Epoch milliseconds of the producer timestamp to start at.
        producer_timestamp: i64 => "ProducerTimestamp",
        fragment_number: String => "FragmentNumber",
    }
}

shape! {
    pub struct StreamProcessingStartSelector {
        kvs_stream_start_selector: KinesisVideoStreamStartSelector => "KVSStreamStartSelector",
    }
}

shape! {
    pub struct StreamProcessingStopSelector {
        max_duration_in_seconds: i64 => "MaxDurationInSeconds",
    }
}

// ----- lifecycle -----

shape! {
    pub struct CreateStreamProcessorRequest {
        input: StreamProcessorInput => "Input",
        output: StreamProcessorOutput => "Output",
        name: String => "Name",
        settings: StreamProcessorSettings => "Settings",
        role_arn: String => "RoleArn",
        tags: BTreeMap<String, String> => "Tags",
        notification_channel: StreamProcessorNotificationChannel => "NotificationChannel",
        kms_key_id: String => "KmsKeyId",
        regions_of_interest: Vec<RegionOfInterest> => "RegionsOfInterest",
        data_sharing_preference: StreamProcessorDataSharingPreference => "DataSharingPreference",
    }
}

impl CreateStreamProcessorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }
}

shape! {
    pub struct CreateStreamProcessorResult {
        stream_processor_arn: String => "StreamProcessorArn",
    }
}

shape! {
    pub struct DeleteStreamProcessorRequest {
        name: String => "Name",
    }
}

impl DeleteStreamProcessorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }
}

shape! {
    pub struct DeleteStreamProcessorResult {}
}

shape! {
    pub struct DescribeStreamProcessorRequest {
        name: String => "Name",
    }
}

impl DescribeStreamProcessorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }
}

shape! {
    pub struct DescribeStreamProcessorResult {
        name: String => "Name",
        stream_processor_arn: String => "StreamProcessorArn",
        status: StreamProcessorStatus => "Status",
        status_message: String => "StatusMessage",
        creation_timestamp: Timestamp => "CreationTimestamp",
        last_update_timestamp: Timestamp => "LastUpdateTimestamp",
        input: StreamProcessorInput => "Input",
        output: StreamProcessorOutput => "Output",
        role_arn: String => "RoleArn",
        settings: StreamProcessorSettings => "Settings",
        notification_channel: StreamProcessorNotificationChannel => "NotificationChannel",
        kms_key_id: String => "KmsKeyId",
        regions_of_interest: Vec<RegionOfInterest> => "RegionsOfInterest",
        data_sharing_preference: StreamProcessorDataSharingPreference => "DataSharingPreference",
    }
}

shape! {
    pub struct ListStreamProcessorsRequest {
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

shape! {
    pub struct ListStreamProcessorsResult {
        next_token: String => "NextToken",
        stream_processors: Vec<StreamProcessor> => "StreamProcessors",
    }
}

shape! {
    pub struct StartStreamProcessorRequest {
        name: String => "Name",
        start_selector: StreamProcessingStartSelector => "StartSelector",
        stop_selector: StreamProcessingStopSelector => "StopSelector",
    }
}

impl StartStreamProcessorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }
}

shape! {
    pub struct StartStreamProcessorResult {
        /// Only returned for connected home processors.
        session_id: String => "SessionId",
    }
}

shape! {
    pub struct StopStreamProcessorRequest {
        name: String => "Name",
    }
}

impl StopStreamProcessorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }
}

shape! {
    pub struct StopStreamProcessorResult {}
}

shape! {
    pub struct UpdateStreamProcessorRequest {
        name: String => "Name",
        settings_for_update: StreamProcessorSettingsForUpdate => "SettingsForUpdate",
        regions_of_interest_for_update: Vec<RegionOfInterest> => "RegionsOfInterestForUpdate",
        data_sharing_preference_for_update: StreamProcessorDataSharingPreference => "DataSharingPreferenceForUpdate",
        parameters_to_delete: Vec<StreamProcessorParameterToDelete> => "ParametersToDelete",
    }
}

impl UpdateStreamProcessorRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }
}

shape! {
    pub struct UpdateStreamProcessorResult {}
}
