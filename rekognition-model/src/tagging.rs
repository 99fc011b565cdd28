//! Resource tags, and the tag map helpers shared by every shape that carries
//! a `Tags` member.

use rekognition_core::field::insert_unique;
use rekognition_core::{shape, Result};
use std::collections::BTreeMap;

macro_rules! tag_entries {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Adds one tag. Fails with `Error::DuplicateKey` if `key` is
                /// already present, leaving the existing map untouched.
                pub fn add_tags_entry(
                    &mut self,
                    key: impl Into<String>,
                    value: impl Into<String>,
                ) -> Result<&mut Self> {
                    insert_unique(&mut self.tags, "Tags", key.into(), value.into())?;
                    Ok(self)
                }

                /// Removes every tag, leaving the member absent.
                pub fn clear_tags_entries(&mut self) -> &mut Self {
                    self.tags = None;
                    self
                }
            }
        )*
    };
}

shape! {
    pub struct TagResourceRequest {
        resource_arn: String => "ResourceArn",
        tags: BTreeMap<String, String> => "Tags",
    }
}

impl TagResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self::default().with_resource_arn(resource_arn)
    }
}

shape! {
    pub struct TagResourceResult {}
}

shape! {
    pub struct UntagResourceRequest {
        resource_arn: String => "ResourceArn",
        tag_keys: Vec<String> => "TagKeys",
    }
}

impl UntagResourceRequest {
    pub fn new<I, S>(resource_arn: impl Into<String>, tag_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default()
            .with_resource_arn(resource_arn)
            .with_tag_keys(tag_keys.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}

shape! {
    pub struct UntagResourceResult {}
}

shape! {
    pub struct ListTagsForResourceRequest {
        resource_arn: String => "ResourceArn",
    }
}

impl ListTagsForResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self::default().with_resource_arn(resource_arn)
    }
}

shape! {
    pub struct ListTagsForResourceResult {
        tags: BTreeMap<String, String> => "Tags",
    }
}

tag_entries!(
    TagResourceRequest,
    ListTagsForResourceResult,
    crate::collection::CreateCollectionRequest,
    crate::project::CreateProjectRequest,
    crate::project::CreateProjectVersionRequest,
    crate::project::CopyProjectVersionRequest,
    crate::dataset::CreateDatasetRequest,
    crate::stream_processor::CreateStreamProcessorRequest,
);
