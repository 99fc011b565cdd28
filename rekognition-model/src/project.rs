//! Custom Labels projects, their trained versions, and resource policies.

use crate::enums::{
    CustomizationFeature, DatasetStatus, DatasetStatusMessageCode, DatasetType, ProjectAutoUpdate,
    ProjectStatus, ProjectVersionStatus,
};
use crate::geometry::Geometry;
use crate::media::{Image, OutputConfig, S3Object};
use rekognition_core::{shape, Timestamp};
use std::collections::BTreeMap;

shape! {
    pub struct GroundTruthManifest {
        s3_object: S3Object => "S3Object",
    }
}

shape! {
    /// A SageMaker Ground Truth manifest used as training or test input.
    pub struct Asset {
        ground_truth_manifest: GroundTruthManifest => "GroundTruthManifest",
    }
}

shape! {
    pub struct TrainingData {
        assets: Vec<Asset> => "Assets",
    }
}

shape! {
    pub struct TestingData {
        assets: Vec<Asset> => "Assets",
        /// Split the training data to create a test set.
        auto_create: bool => "AutoCreate",
    }
}

shape! {
    pub struct ValidationData {
        assets: Vec<Asset> => "Assets",
    }
}

shape! {
    pub struct TrainingDataResult {
        input: TrainingData => "Input",
        output: TrainingData => "Output",
        validation: ValidationData => "Validation",
    }
}

shape! {
    pub struct TestingDataResult {
        input: TestingData => "Input",
        output: TestingData => "Output",
        validation: ValidationData => "Validation",
    }
}

shape! {
    pub struct Summary {
        s3_object: S3Object => "S3Object",
    }
}

shape! {
    pub struct EvaluationResult {
        f1_score: f32 => "F1Score",
        summary: Summary => "Summary",
    }
}

shape! {
    pub struct CustomizationFeatureContentModerationConfig {
        confidence_threshold: f32 => "ConfidenceThreshold",
    }
}

shape! {
    pub struct CustomizationFeatureConfig {
        content_moderation: CustomizationFeatureContentModerationConfig => "ContentModeration",
    }
}

shape! {
    pub struct DatasetMetadata {
        creation_timestamp: Timestamp => "CreationTimestamp",
        dataset_type: DatasetType => "DatasetType",
        dataset_arn: String => "DatasetArn",
        status: DatasetStatus => "Status",
        status_message: String => "StatusMessage",
        status_message_code: DatasetStatusMessageCode => "StatusMessageCode",
    }
}

shape! {
    pub struct ProjectDescription {
        project_arn: String => "ProjectArn",
        creation_timestamp: Timestamp => "CreationTimestamp",
        status: ProjectStatus => "Status",
        datasets: Vec<DatasetMetadata> => "Datasets",
        feature: CustomizationFeature => "Feature",
        auto_update: ProjectAutoUpdate => "AutoUpdate",
    }
}

shape! {
    pub struct ProjectVersionDescription {
        project_version_arn: String => "ProjectVersionArn",
        creation_timestamp: Timestamp => "CreationTimestamp",
        min_inference_units: i32 => "MinInferenceUnits",
        status: ProjectVersionStatus => "Status",
        status_message: String => "StatusMessage",
        billable_training_time_in_seconds: i64 => "BillableTrainingTimeInSeconds",
        training_end_timestamp: Timestamp => "TrainingEndTimestamp",
        output_config: OutputConfig => "OutputConfig",
        training_data_result: TrainingDataResult => "TrainingDataResult",
        testing_data_result: TestingDataResult => "TestingDataResult",
        evaluation_result: EvaluationResult => "EvaluationResult",
        manifest_summary: GroundTruthManifest => "ManifestSummary",
        kms_key_id: String => "KmsKeyId",
        max_inference_units: i32 => "MaxInferenceUnits",
        source_project_version_arn: String => "SourceProjectVersionArn",
        version_description: String => "VersionDescription",
        feature: CustomizationFeature => "Feature",
        base_model_version: String => "BaseModelVersion",
        feature_config: CustomizationFeatureConfig => "FeatureConfig",
    }
}

shape! {
    pub struct CustomLabel {
        name: String => "Name",
        confidence: f32 => "Confidence",
        geometry: Geometry => "Geometry",
    }
}

shape! {
    pub struct ProjectPolicy {
        project_arn: String => "ProjectArn",
        policy_name: String => "PolicyName",
        policy_revision_id: String => "PolicyRevisionId",
        /// IAM policy document as JSON text.
        policy_document: String => "PolicyDocument",
        creation_timestamp: Timestamp => "CreationTimestamp",
        last_updated_timestamp: Timestamp => "LastUpdatedTimestamp",
    }
}

// ----- projects -----

shape! {
    pub struct CreateProjectRequest {
        project_name: String => "ProjectName",
        feature: CustomizationFeature => "Feature",
        auto_update: ProjectAutoUpdate => "AutoUpdate",
        tags: BTreeMap<String, String> => "Tags",
    }
}

impl CreateProjectRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self::default().with_project_name(project_name)
    }
}

shape! {
    pub struct CreateProjectResult {
        project_arn: String => "ProjectArn",
    }
}

shape! {
    pub struct DeleteProjectRequest {
        project_arn: String => "ProjectArn",
    }
}

impl DeleteProjectRequest {
    pub fn new(project_arn: impl Into<String>) -> Self {
        Self::default().with_project_arn(project_arn)
    }
}

shape! {
    pub struct DeleteProjectResult {
        status: ProjectStatus => "Status",
    }
}

shape! {
    pub struct DescribeProjectsRequest {
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
        project_names: Vec<String> => "ProjectNames",
        features: Vec<CustomizationFeature> => "Features",
    }
}

shape! {
    pub struct DescribeProjectsResult {
        project_descriptions: Vec<ProjectDescription> => "ProjectDescriptions",
        next_token: String => "NextToken",
    }
}

// ----- project versions -----

shape! {
    pub struct CreateProjectVersionRequest {
        project_arn: String => "ProjectArn",
        version_name: String => "VersionName",
        output_config: OutputConfig => "OutputConfig",
        training_data: TrainingData => "TrainingData",
        testing_data: TestingData => "TestingData",
        tags: BTreeMap<String, String> => "Tags",
        kms_key_id: String => "KmsKeyId",
        version_description: String => "VersionDescription",
        feature_config: CustomizationFeatureConfig => "FeatureConfig",
    }
}

impl CreateProjectVersionRequest {
    pub fn new(
        project_arn: impl Into<String>,
        version_name: impl Into<String>,
        output_config: OutputConfig,
    ) -> Self {
        Self::default()
            .with_project_arn(project_arn)
            .with_version_name(version_name)
            .with_output_config(output_config)
    }
}

shape! {
    pub struct CreateProjectVersionResult {
        project_version_arn: String => "ProjectVersionArn",
    }
}

shape! {
    pub struct DeleteProjectVersionRequest {
        project_version_arn: String => "ProjectVersionArn",
    }
}

impl DeleteProjectVersionRequest {
    pub fn new(project_version_arn: impl Into<String>) -> Self {
        Self::default().with_project_version_arn(project_version_arn)
    }
}

shape! {
    pub struct DeleteProjectVersionResult {
        status: ProjectVersionStatus => "Status",
    }
}

shape! {
    pub struct DescribeProjectVersionsRequest {
        project_arn: String => "ProjectArn",
        version_names: Vec<String> => "VersionNames",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

impl DescribeProjectVersionsRequest {
    pub fn new(project_arn: impl Into<String>) -> Self {
        Self::default().with_project_arn(project_arn)
    }
}

shape! {
    pub struct DescribeProjectVersionsResult {
        project_version_descriptions: Vec<ProjectVersionDescription> => "ProjectVersionDescriptions",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct StartProjectVersionRequest {
        project_version_arn: String => "ProjectVersionArn",
        min_inference_units: i32 => "MinInferenceUnits",
        /// Upper bound for auto scaling. Defaults to `min_inference_units`.
        max_inference_units: i32 => "MaxInferenceUnits",
    }
}

impl StartProjectVersionRequest {
    pub fn new(project_version_arn: impl Into<String>, min_inference_units: i32) -> Self {
        Self::default()
            .with_project_version_arn(project_version_arn)
            .with_min_inference_units(min_inference_units)
    }
}

shape! {
    pub struct StartProjectVersionResult {
        status: ProjectVersionStatus => "Status",
    }
}

shape! {
    pub struct StopProjectVersionRequest {
        project_version_arn: String => "ProjectVersionArn",
    }
}

impl StopProjectVersionRequest {
    pub fn new(project_version_arn: impl Into<String>) -> Self {
        Self::default().with_project_version_arn(project_version_arn)
    }
}

shape! {
    pub struct StopProjectVersionResult {
        status: ProjectVersionStatus => "Status",
    }
}

shape! {
    pub struct CopyProjectVersionRequest {
        source_project_arn: String => "SourceProjectArn",
        source_project_version_arn: String => "SourceProjectVersionArn",
        destination_project_arn: String => "DestinationProjectArn",
        version_name: String => "VersionName",
        output_config: OutputConfig => "OutputConfig",
        tags: BTreeMap<String, String> => "Tags",
        kms_key_id: String => "KmsKeyId",
    }
}

shape! {
    pub struct CopyProjectVersionResult {
        project_version_arn: String => "ProjectVersionArn",
    }
}

shape! {
    pub struct DetectCustomLabelsRequest {
        project_version_arn: String => "ProjectVersionArn",
        image: Image => "Image",
        max_results: i32 => "MaxResults",
        min_confidence: f32 => "MinConfidence",
    }
}

impl DetectCustomLabelsRequest {
    pub fn new(project_version_arn: impl Into<String>, image: Image) -> Self {
        Self::default()
            .with_project_version_arn(project_version_arn)
            .with_image(image)
    }
}

shape! {
    pub struct DetectCustomLabelsResult {
        custom_labels: Vec<CustomLabel> => "CustomLabels",
    }
}

// ----- project policies -----

shape! {
    pub struct PutProjectPolicyRequest {
        project_arn: String => "ProjectArn",
        policy_name: String => "PolicyName",
        /// Revision being replaced; omit when creating a new policy.
        policy_revision_id: String => "PolicyRevisionId",
        policy_document: String => "PolicyDocument",
    }
}

shape! {
    pub struct PutProjectPolicyResult {
        policy_revision_id: String => "PolicyRevisionId",
    }
}

shape! {
    pub struct DeleteProjectPolicyRequest {
        project_arn: String => "ProjectArn",
        policy_name: String => "PolicyName",
        policy_revision_id: String => "PolicyRevisionId",
    }
}

shape! {
    pub struct DeleteProjectPolicyResult {}
}

shape! {
    pub struct ListProjectPoliciesRequest {
        project_arn: String => "ProjectArn",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

impl ListProjectPoliciesRequest {
    pub fn new(project_arn: impl Into<String>) -> Self {
        Self::default().with_project_arn(project_arn)
    }
}

shape! {
    pub struct ListProjectPoliciesResult {
        project_policies: Vec<ProjectPolicy> => "ProjectPolicies",
        next_token: String => "NextToken",
    }
}
