//! Input media references and the metadata the service reports back about
//! them.

use crate::enums::{ContentClassifier, VideoColorRange};
use rekognition_core::{shape, Blob};

shape! {
    /// Reference to an object stored in S3.
    pub struct S3Object {
        bucket: String => "Bucket",
        name: String => "Name",
        /// Only needed when the bucket has versioning enabled.
        version: String => "Version",
    }
}

impl S3Object {
    pub fn new(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self::default().with_bucket(bucket).with_name(name)
    }
}

shape! {
    /// An image, either inline or stored in S3. Set exactly one member.
    pub struct Image {
        bytes: Blob => "Bytes",
        s3_object: S3Object => "S3Object",
    }
}

impl Image {
    pub fn from_bytes(bytes: impl Into<Blob>) -> Self {
        Self::default().with_bytes(bytes)
    }

    pub fn from_s3(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self::default().with_s3_object(S3Object::new(bucket, name))
    }
}

shape! {
    pub struct ImageQuality {
        brightness: f32 => "Brightness",
        sharpness: f32 => "Sharpness",
    }
}

shape! {
    /// A stored video to analyze. Video operations only accept S3 input.
    pub struct Video {
        s3_object: S3Object => "S3Object",
    }
}

impl Video {
    pub fn from_s3(bucket: impl Into<String>, name: impl Into<String>) -> Self {
        Self::default().with_s3_object(S3Object::new(bucket, name))
    }
}

shape! {
    pub struct VideoMetadata {
        codec: String => "Codec",
        duration_millis: i64 => "DurationMillis",
        format: String => "Format",
        frame_rate: f32 => "FrameRate",
        frame_height: i64 => "FrameHeight",
        frame_width: i64 => "FrameWidth",
        color_range: VideoColorRange => "ColorRange",
    }
}

shape! {
    pub struct AudioMetadata {
        codec: String => "Codec",
        duration_millis: i64 => "DurationMillis",
        sample_rate: i64 => "SampleRate",
        number_of_channels: i64 => "NumberOfChannels",
    }
}

shape! {
    /// Topic the completion status of a video job is published to.
    pub struct NotificationChannel {
        sns_topic_arn: String => "SNSTopicArn",
        role_arn: String => "RoleArn",
    }
}

impl NotificationChannel {
    pub fn new(sns_topic_arn: impl Into<String>, role_arn: impl Into<String>) -> Self {
        Self::default()
            .with_sns_topic_arn(sns_topic_arn)
            .with_role_arn(role_arn)
    }
}

shape! {
    /// Where training output is written.
    pub struct OutputConfig {
        s3_bucket: String => "S3Bucket",
        s3_key_prefix: String => "S3KeyPrefix",
    }
}

shape! {
    pub struct HumanLoopDataAttributes {
        content_classifiers: Vec<ContentClassifier> => "ContentClassifiers",
    }
}

shape! {
    /// Routes low confidence moderation results to human review.
    pub struct HumanLoopConfig {
        human_loop_name: String => "HumanLoopName",
        flow_definition_arn: String => "FlowDefinitionArn",
        data_attributes: HumanLoopDataAttributes => "DataAttributes",
    }
}

shape! {
    pub struct HumanLoopActivationOutput {
        human_loop_arn: String => "HumanLoopArn",
        human_loop_activation_reasons: Vec<String> => "HumanLoopActivationReasons",
        /// JSON document, carried as a string.
        human_loop_activation_conditions_evaluation_results: String => "HumanLoopActivationConditionsEvaluationResults",
    }
}

shape! {
    pub struct S3Destination {
        bucket: String => "Bucket",
        key_prefix: String => "KeyPrefix",
    }
}

shape! {
    /// Kinesis video stream a stream processor reads from.
    pub struct KinesisVideoStream {
        arn: String => "Arn",
    }
}

shape! {
    /// Kinesis data stream a stream processor writes results to.
    pub struct KinesisDataStream {
        arn: String => "Arn",
    }
}
