//! Binds each request type to its operation name and result type.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A remote operation, keyed by its request type.
pub trait Operation: Serialize + Debug {
    /// Operation name as used in the `X-Amz-Target` header.
    const NAME: &'static str;

    /// Deserialized response. Operations without a response body use an
    /// empty shape.
    type Output: DeserializeOwned + Default + Debug;
}

/// Invokes `$callback! { Name, Name, ... }` with every operation name.
///
/// For each `Name` the crate root exports `NameRequest` and `NameResult`.
#[macro_export]
macro_rules! for_each_operation {
    ($callback:ident) => {
        $callback! {
            AssociateFaces,
            CompareFaces,
            CopyProjectVersion,
            CreateCollection,
            CreateDataset,
            CreateFaceLivenessSession,
            CreateProject,
            CreateProjectVersion,
            CreateStreamProcessor,
            CreateUser,
            DeleteCollection,
            DeleteDataset,
            DeleteFaces,
            DeleteProject,
            DeleteProjectPolicy,
            DeleteProjectVersion,
            DeleteStreamProcessor,
            DeleteUser,
            DescribeCollection,
            DescribeDataset,
            DescribeProjectVersions,
            DescribeProjects,
            DescribeStreamProcessor,
            DetectCustomLabels,
            DetectFaces,
            DetectLabels,
            DetectModerationLabels,
            DetectProtectiveEquipment,
            DetectText,
            DisassociateFaces,
            DistributeDatasetEntries,
            GetCelebrityInfo,
            GetCelebrityRecognition,
            GetContentModeration,
            GetFaceDetection,
            GetFaceLivenessSessionResults,
            GetFaceSearch,
            GetLabelDetection,
            GetMediaAnalysisJob,
            GetPersonTracking,
            GetSegmentDetection,
            GetTextDetection,
            IndexFaces,
            ListCollections,
            ListDatasetEntries,
            ListDatasetLabels,
            ListFaces,
            ListMediaAnalysisJobs,
            ListProjectPolicies,
            ListStreamProcessors,
            ListTagsForResource,
            ListUsers,
            PutProjectPolicy,
            RecognizeCelebrities,
            SearchFaces,
            SearchFacesByImage,
            SearchUsers,
            SearchUsersByImage,
            StartCelebrityRecognition,
            StartContentModeration,
            StartFaceDetection,
            StartFaceSearch,
            StartLabelDetection,
            StartMediaAnalysisJob,
            StartPersonTracking,
            StartProjectVersion,
            StartSegmentDetection,
            StartStreamProcessor,
            StartTextDetection,
            StopProjectVersion,
            StopStreamProcessor,
            TagResource,
            UntagResource,
            UpdateDatasetEntries,
            UpdateStreamProcessor,
        }
    };
}

macro_rules! impl_operations {
    ($($name:ident),* $(,)?) => {
        rekognition_core::paste::paste! {
            $(
                impl Operation for crate::[<$name Request>] {
                    const NAME: &'static str = stringify!($name);
                    type Output = crate::[<$name Result>];
                }
            )*
        }

        /// Every operation name, sorted.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($name)),*];
    };
}

crate::for_each_operation!(impl_operations);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeleteFacesRequest, DeleteFacesResult, GetFaceLivenessSessionResultsRequest};

    fn name_of<O: Operation>(_: &O) -> &'static str {
        O::NAME
    }

    #[test]
    fn names_are_sorted_and_unique() {
        assert_eq!(OPERATION_NAMES.len(), 75);
        assert!(OPERATION_NAMES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn request_types_know_their_operation() {
        assert_eq!(name_of(&DeleteFacesRequest::default()), "DeleteFaces");
        assert_eq!(
            <GetFaceLivenessSessionResultsRequest as Operation>::NAME,
            "GetFaceLivenessSessionResults"
        );
        let empty: <DeleteFacesRequest as Operation>::Output = Default::default();
        assert_eq!(empty, DeleteFacesResult::default());
    }
}
