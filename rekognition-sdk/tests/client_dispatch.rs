use async_trait::async_trait;
use rekognition_sdk::model::*;
use rekognition_sdk::{
    Error, OperationRequest, OperationResponse, RekognitionClient, SdkConfig, Transport,
    TransportError,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records every request and answers from a queue of canned responses.
struct MockTransport {
    seen: Mutex<Vec<OperationRequest>>,
    replies: Mutex<VecDeque<Result<OperationResponse, TransportError>>>,
}

impl MockTransport {
    fn replying(replies: impl IntoIterator<Item = OperationResponse>) -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into_iter().map(Ok).collect()),
        })
    }

    fn seen(&self) -> Vec<OperationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: OperationRequest) -> Result<OperationResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no reply queued".into())))
    }
}

struct StallingTransport;

#[async_trait]
impl Transport for StallingTransport {
    async fn send(&self, _request: OperationRequest) -> Result<OperationResponse, TransportError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(OperationResponse::new(200, "{}"))
    }
}

#[tokio::test]
async fn requests_are_routed_by_operation_name() {
    let mock = MockTransport::replying([
        OperationResponse::new(200, r#"{"DeletedFaces":["id1"]}"#),
        OperationResponse::new(200, r#"{"Users":[{"UserId":"u1","UserStatus":"ACTIVE"}]}"#),
    ]);
    let client = RekognitionClient::new(SdkConfig::for_region("eu-west-1"), Arc::clone(&mock));

    let deleted = client
        .delete_faces(DeleteFacesRequest::new("myCollection", ["id1", "id2"]))
        .await
        .unwrap();
    assert_eq!(deleted.deleted_faces, Some(vec!["id1".to_string()]));

    let users = client.list_users(ListUsersRequest::new("myCollection")).await.unwrap();
    assert_eq!(
        users.users,
        Some(vec![User::default().with_user_id("u1").with_user_status(UserStatus::Active)])
    );

    let seen = mock.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].target, "RekognitionService.DeleteFaces");
    assert_eq!(seen[0].content_type, "application/x-amz-json-1.1");
    assert_eq!(seen[0].endpoint, "https://rekognition.eu-west-1.amazonaws.com");
    assert_eq!(seen[0].region, "eu-west-1");
    assert_eq!(seen[1].operation, "ListUsers");

    let body: serde_json::Value = serde_json::from_slice(&seen[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"CollectionId": "myCollection", "FaceIds": ["id1", "id2"]})
    );
}

#[tokio::test]
async fn generic_send_matches_typed_method() {
    let mock = MockTransport::replying([OperationResponse::new(200, r#"{"JobId":"job-7"}"#)]);
    let client = RekognitionClient::new(SdkConfig::default(), Arc::clone(&mock));

    let request = StartSegmentDetectionRequest::new(
        Video::from_s3("bucket", "clip.mp4"),
        [SegmentType::Shot, SegmentType::TechnicalCue],
    );
    let out = client.send(&request).await.unwrap();
    assert_eq!(out.job_id.as_deref(), Some("job-7"));
    assert_eq!(mock.seen()[0].target, "RekognitionService.StartSegmentDetection");
}

#[tokio::test]
async fn service_errors_are_typed() {
    let mock = MockTransport::replying([OperationResponse::new(
        400,
        r#"{"__type":"ProvisionedThroughputExceededException","message":"slow down"}"#,
    )]);
    let client = RekognitionClient::new(SdkConfig::default(), mock);

    let err = client
        .detect_labels(DetectLabelsRequest::new(Image::from_s3("b", "k.jpg")))
        .await
        .unwrap_err();
    match &err {
        Error::Service { operation, status, code, message } => {
            assert_eq!(*operation, "DetectLabels");
            assert_eq!(*status, 400);
            assert_eq!(*code, ServiceErrorCode::ProvisionedThroughputExceeded);
            assert_eq!(message, "slow down");
        }
        other => panic!("expected a service error, got {other}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn transport_failures_propagate() {
    let client = RekognitionClient::new(SdkConfig::default(), MockTransport::replying(Vec::new()));
    let err = client
        .list_collections(ListCollectionsRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::Other(_))));
}

#[tokio::test(start_paused = true)]
async fn slow_transports_time_out() {
    let mut cfg = SdkConfig::default();
    cfg.request_timeout_ms = 50;
    let client = RekognitionClient::new(cfg, StallingTransport);
    let err = client
        .describe_collection(DescribeCollectionRequest::new("c"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout));
}

#[test]
fn blocking_callers_can_drive_the_client() {
    let mock = MockTransport::replying([OperationResponse::new(200, "")]);
    let client = RekognitionClient::new(SdkConfig::default(), mock);
    let out = tokio_test::block_on(client.tag_resource({
        let mut req = TagResourceRequest::new("arn:aws:rekognition:us-east-1:1:collection/c");
        req.add_tags_entry("team", "vision").unwrap();
        req
    }))
    .unwrap();
    assert_eq!(out, TagResourceResult::default());
}
