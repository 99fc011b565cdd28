//! Face collections: server-side containers that indexed faces and users
//! live in.

use rekognition_core::{shape, Timestamp};
use std::collections::BTreeMap;

shape! {
    pub struct CreateCollectionRequest {
        collection_id: String => "CollectionId",
        tags: BTreeMap<String, String> => "Tags",
    }
}

impl CreateCollectionRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self::default().with_collection_id(collection_id)
    }
}

shape! {
    pub struct CreateCollectionResult {
        /// HTTP status code reported by the service for the creation.
        status_code: i32 => "StatusCode",
        collection_arn: String => "CollectionArn",
        face_model_version: String => "FaceModelVersion",
    }
}

shape! {
    pub struct DeleteCollectionRequest {
        collection_id: String => "CollectionId",
    }
}

impl DeleteCollectionRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self::default().with_collection_id(collection_id)
    }
}

shape! {
    pub struct DeleteCollectionResult {
        status_code: i32 => "StatusCode",
    }
}

shape! {
    pub struct DescribeCollectionRequest {
        collection_id: String => "CollectionId",
    }
}

impl DescribeCollectionRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self::default().with_collection_id(collection_id)
    }
}

shape! {
    pub struct DescribeCollectionResult {
        face_count: i64 => "FaceCount",
        face_model_version: String => "FaceModelVersion",
        // upper case ARN on the wire, unlike CreateCollection
        collection_arn: String => "CollectionARN",
        creation_timestamp: Timestamp => "CreationTimestamp",
        user_count: i64 => "UserCount",
    }
}

shape! {
    pub struct ListCollectionsRequest {
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

shape! {
    pub struct ListCollectionsResult {
        collection_ids: Vec<String> => "CollectionIds",
        next_token: String => "NextToken",
        /// Parallel to `collection_ids`.
        face_model_versions: Vec<String> => "FaceModelVersions",
    }
}
