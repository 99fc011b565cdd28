//! Custom Labels datasets and their entries.

use crate::enums::{DatasetStatus, DatasetStatusMessageCode, DatasetType};
use crate::project::GroundTruthManifest;
use rekognition_core::{shape, Blob, Timestamp};
use std::collections::BTreeMap;

shape! {
    pub struct DatasetStats {
        labeled_entries: i32 => "LabeledEntries",
        total_entries: i32 => "TotalEntries",
        total_labels: i32 => "TotalLabels",
        error_entries: i32 => "ErrorEntries",
    }
}

shape! {
    pub struct DatasetDescription {
        creation_timestamp: Timestamp => "CreationTimestamp",
        last_updated_timestamp: Timestamp => "LastUpdatedTimestamp",
        status: DatasetStatus => "Status",
        status_message: String => "StatusMessage",
        status_message_code: DatasetStatusMessageCode => "StatusMessageCode",
        dataset_stats: DatasetStats => "DatasetStats",
    }
}

shape! {
    pub struct DatasetLabelStats {
        entry_count: i32 => "EntryCount",
        bounding_box_count: i32 => "BoundingBoxCount",
    }
}

shape! {
    pub struct DatasetLabelDescription {
        label_name: String => "LabelName",
        label_stats: DatasetLabelStats => "LabelStats",
    }
}

shape! {
    /// Initial content of a new dataset: a manifest file or an existing
    /// dataset to copy.
    pub struct DatasetSource {
        ground_truth_manifest: GroundTruthManifest => "GroundTruthManifest",
        dataset_arn: String => "DatasetArn",
    }
}

shape! {
    pub struct DatasetChanges {
        /// JSON Lines manifest entries to add or update.
        ground_truth: Blob => "GroundTruth",
    }
}

shape! {
    pub struct DistributeDataset {
        arn: String => "Arn",
    }
}

shape! {
    pub struct CreateDatasetRequest {
        dataset_source: DatasetSource => "DatasetSource",
        dataset_type: DatasetType => "DatasetType",
        project_arn: String => "ProjectArn",
        tags: BTreeMap<String, String> => "Tags",
    }
}

impl CreateDatasetRequest {
    pub fn new(project_arn: impl Into<String>, dataset_type: DatasetType) -> Self {
        Self::default()
            .with_project_arn(project_arn)
            .with_dataset_type(dataset_type)
    }
}

shape! {
    pub struct CreateDatasetResult {
        dataset_arn: String => "DatasetArn",
    }
}

shape! {
    pub struct DeleteDatasetRequest {
        dataset_arn: String => "DatasetArn",
    }
}

impl DeleteDatasetRequest {
    pub fn new(dataset_arn: impl Into<String>) -> Self {
        Self::default().with_dataset_arn(dataset_arn)
    }
}

shape! {
    pub struct DeleteDatasetResult {}
}

shape! {
    pub struct DescribeDatasetRequest {
        dataset_arn: String => "DatasetArn",
    }
}

impl DescribeDatasetRequest {
    pub fn new(dataset_arn: impl Into<String>) -> Self {
        Self::default().with_dataset_arn(dataset_arn)
    }
}

shape! {
    pub struct DescribeDatasetResult {
        dataset_description: DatasetDescription => "DatasetDescription",
    }
}

shape! {
    pub struct ListDatasetEntriesRequest {
        dataset_arn: String => "DatasetArn",
        contains_labels: Vec<String> => "ContainsLabels",
        labeled: bool => "Labeled",
        source_ref_contains: String => "SourceRefContains",
        has_errors: bool => "HasErrors",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

impl ListDatasetEntriesRequest {
    pub fn new(dataset_arn: impl Into<String>) -> Self {
        Self::default().with_dataset_arn(dataset_arn)
    }
}

shape! {
    pub struct ListDatasetEntriesResult {
        /// One JSON Lines manifest entry per element.
        dataset_entries: Vec<String> => "DatasetEntries",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct ListDatasetLabelsRequest {
        dataset_arn: String => "DatasetArn",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

impl ListDatasetLabelsRequest {
    pub fn new(dataset_arn: impl Into<String>) -> Self {
        Self::default().with_dataset_arn(dataset_arn)
    }
}

shape! {
    pub struct ListDatasetLabelsResult {
        dataset_label_descriptions: Vec<DatasetLabelDescription> => "DatasetLabelDescriptions",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct UpdateDatasetEntriesRequest {
        dataset_arn: String => "DatasetArn",
        changes: DatasetChanges => "Changes",
    }
}

impl UpdateDatasetEntriesRequest {
    pub fn new(dataset_arn: impl Into<String>, ground_truth: impl Into<Blob>) -> Self {
        Self::default()
            .with_dataset_arn(dataset_arn)
            .with_changes(DatasetChanges::default().with_ground_truth(ground_truth))
    }
}

shape! {
    pub struct UpdateDatasetEntriesResult {}
}

shape! {
    /// Distributes training entries between the training and test datasets
    /// given, which must belong to the same project.
    pub struct DistributeDatasetEntriesRequest {
        datasets: Vec<DistributeDataset> => "Datasets",
    }
}

shape! {
    pub struct DistributeDatasetEntriesResult {}
}
