use chrono::{TimeZone, Utc};
use rekognition_model::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn delete_faces_request_builds_and_appends() {
    let req = DeleteFacesRequest::new("myCollection", ["id1", "id2"]);
    assert_eq!(req.collection_id.as_deref(), Some("myCollection"));
    assert_eq!(
        req.face_ids,
        Some(vec!["id1".to_string(), "id2".to_string()])
    );

    let req = req.with_face_ids(["id3".to_string()]);
    assert_eq!(
        req.face_ids.as_deref(),
        Some(&["id1".to_string(), "id2".to_string(), "id3".to_string()][..])
    );

    let twin = DeleteFacesRequest::new("myCollection", ["id1", "id2", "id3"]);
    assert_eq!(req, twin);
    assert_eq!(hash_of(&req), hash_of(&twin));
}

#[test]
fn clearing_a_list_then_appending_starts_fresh() {
    let mut req = ListUsersResult::default()
        .with_users(vec![User::default().with_user_id("u1")])
        .with_next_token("t");
    req.users = None;
    assert!(req.users.is_none());

    let req = req.with_users(vec![User::default().with_user_id("u2")]);
    assert_eq!(req.users.map(|u| u.len()), Some(1));
}

#[test]
fn display_skips_absent_fields_and_keeps_declaration_order() {
    let req = DeleteFacesRequest::new("myCollection", ["id1", "id2"]);
    assert_eq!(
        req.to_string(),
        "{CollectionId: myCollection, FaceIds: [id1, id2]}"
    );

    // set in reverse order, rendered in declaration order
    let bbox = BoundingBox::default()
        .with_top(1.0f32)
        .with_width(0.5f32);
    assert_eq!(bbox.to_string(), "{Width: 0.5, Top: 1.0}");

    let detect = DetectFacesRequest::default()
        .with_image(Image::from_bytes(vec![0u8; 4]))
        .with_attributes(vec![Attribute::All]);
    assert_eq!(
        detect.to_string(),
        "{Image: {Bytes: <4 bytes>}, Attributes: [ALL]}"
    );
    assert_eq!(DeleteUserResult::default().to_string(), "{}");
}

#[test]
fn equality_covers_every_field() {
    let a = Face::default().with_face_id("f").with_confidence(99.5f32);
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, b.clone().with_image_id("img"));
    assert_ne!(a, b.with_confidence(99.25f32));

    let mut absent = a.clone();
    absent.confidence = None;
    assert_ne!(a, absent);
}

#[test]
fn enum_members_accept_raw_strings_and_typed_values() {
    let typed = ProjectDescription::default().with_status(ProjectStatus::Created);
    let raw = ProjectDescription::default().with_status("CREATED");
    assert_eq!(typed, raw);

    let future = ProjectDescription::default().with_status("ARCHIVED");
    assert_eq!(
        future.status,
        Some(ProjectStatus::Unrecognized("ARCHIVED".into()))
    );
    assert_eq!(future.to_string(), "{Status: ARCHIVED}");
}

#[test]
fn tag_maps_reject_duplicates_and_extend_through_builders() {
    let mut req = TagResourceRequest::new("arn:aws:rekognition:us-east-1:1:project/p");
    req.add_tags_entry("k", "v1").unwrap();
    let before = req.clone();

    assert!(req.add_tags_entry("k", "v2").is_err());
    assert_eq!(req, before);

    let extended = req.with_tags(BTreeMap::from([("k2".to_string(), "v".to_string())]));
    assert_eq!(extended.tags.map(|t| t.len()), Some(2));
}

#[test]
fn wire_names_follow_the_published_schema() {
    let channel = NotificationChannel::new("arn:sns", "arn:role");
    assert_eq!(
        serde_json::to_value(&channel).unwrap(),
        serde_json::json!({"SNSTopicArn": "arn:sns", "RoleArn": "arn:role"})
    );

    let segment: SegmentDetection = serde_json::from_str(
        r#"{"Type":"SHOT","DurationSMPTE":"00:00:01:00","StartTimecodeSMPTE":"00:00:00:00","ShotSegment":{"Index":3,"Confidence":90.5}}"#,
    )
    .unwrap();
    assert_eq!(segment.r#type, Some(SegmentType::Shot));
    assert_eq!(segment.duration_smpte.as_deref(), Some("00:00:01:00"));
    assert_eq!(segment.shot_segment.and_then(|s| s.index), Some(3));

    let described: DescribeCollectionResult = serde_json::from_str(
        r#"{"CollectionARN":"arn:c","FaceCount":12,"CreationTimestamp":1700000000.25,"Unknown":true}"#,
    )
    .unwrap();
    assert_eq!(described.collection_arn.as_deref(), Some("arn:c"));
    assert_eq!(described.face_count, Some(12));
    assert_eq!(
        described.creation_timestamp.map(|t| t.epoch_millis()),
        Some(1_700_000_000_250)
    );
}

#[test]
fn absent_members_are_not_serialized() {
    let req = ListCollectionsRequest::default().with_max_results(10);
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"MaxResults":10}"#);
    assert_eq!(
        serde_json::to_string(&CreateUserResult::default()).unwrap(),
        "{}"
    );
}

#[test]
fn nested_results_decode() {
    let body = r#"{
        "FaceDetails": [{
            "BoundingBox": {"Width": 0.25, "Height": 0.5, "Left": 0.1, "Top": 0.2},
            "Emotions": [{"Type": "HAPPY", "Confidence": 97.0}],
            "Landmarks": [{"Type": "eyeLeft", "X": 0.3, "Y": 0.4}],
            "Confidence": 99.9
        }],
        "OrientationCorrection": "ROTATE_90"
    }"#;
    let result: DetectFacesResult = serde_json::from_str(body).unwrap();
    let detail = &result.face_details.as_ref().unwrap()[0];
    assert_eq!(
        detail.emotions.as_ref().unwrap()[0].r#type,
        Some(EmotionName::Happy)
    );
    assert_eq!(
        detail.landmarks.as_ref().unwrap()[0].r#type,
        Some(LandmarkType::EyeLeft)
    );
    assert_eq!(
        result.orientation_correction,
        Some(OrientationCorrection::Rotate90)
    );
}

#[test]
fn video_results_report_completion() {
    let result: GetLabelDetectionResult =
        serde_json::from_str(r#"{"JobStatus":"IN_PROGRESS","JobId":"j1"}"#).unwrap();
    assert!(!result.is_complete());
    assert_eq!(result.job_id(), Some("j1"));

    let done = result.with_job_status(VideoJobStatus::Failed).with_status_message("bad input");
    assert!(done.is_complete());
    assert_eq!(VideoJob::status_message(&done), Some("bad input"));
}

#[test]
fn timestamps_take_chrono_datetimes() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let out = DescribeCollectionResult::default()
        .with_face_count(3i64)
        .with_creation_timestamp(created);

    assert_eq!(out.creation_timestamp.map(|ts| ts.as_datetime()), Some(created));
    assert_eq!(
        out.to_string(),
        "{FaceCount: 3, CreationTimestamp: 2024-03-01T12:00:00.000Z}"
    );

    let json: serde_json::Value = serde_json::to_value(&out).unwrap();
    assert_eq!(json["CreationTimestamp"].as_f64(), Some(created.timestamp() as f64));
}
