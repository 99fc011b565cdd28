//! Common view over the results of the `Get*` stored video operations.

use crate::enums::VideoJobStatus;

/// Status and paging members shared by every stored video job result.
pub trait VideoJob {
    fn job_id(&self) -> Option<&str>;
    fn job_status(&self) -> Option<&VideoJobStatus>;
    fn status_message(&self) -> Option<&str>;
    fn next_token(&self) -> Option<&str>;

    /// `true` once the job has succeeded or failed.
    fn is_complete(&self) -> bool {
        self.job_status().is_some_and(VideoJobStatus::is_terminal)
    }

    /// `true` when a further page of results can be requested.
    fn has_more_pages(&self) -> bool {
        self.next_token().is_some_and(|token| !token.is_empty())
    }
}

macro_rules! video_jobs {
    ($($ty:ty),* $(,)?) => {
        $(
            impl VideoJob for $ty {
                fn job_id(&self) -> Option<&str> {
                    self.job_id.as_deref()
                }

                fn job_status(&self) -> Option<&VideoJobStatus> {
                    self.job_status.as_ref()
                }

                fn status_message(&self) -> Option<&str> {
                    self.status_message.as_deref()
                }

                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }
            }
        )*
    };
}

video_jobs!(
    crate::face::GetFaceDetectionResult,
    crate::face::GetFaceSearchResult,
    crate::face::GetPersonTrackingResult,
    crate::label::GetLabelDetectionResult,
    crate::moderation::GetContentModerationResult,
    crate::text::GetTextDetectionResult,
    crate::celebrity::GetCelebrityRecognitionResult,
    crate::segment::GetSegmentDetectionResult,
);
