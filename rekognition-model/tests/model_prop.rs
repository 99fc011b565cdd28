use proptest::prelude::*;
use rekognition_model::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

prop_compose! {
    fn arb_bbox()(w in 0f32..1f32, h in 0f32..1f32, l in -0.5f32..1f32, t in -0.5f32..1f32) -> BoundingBox {
        BoundingBox::new(w, h, l, t)
    }
}

prop_compose! {
    fn arb_face()(
        id in proptest::option::of("[a-f0-9]{8}"),
        bbox in proptest::option::of(arb_bbox()),
        confidence in proptest::option::of(0f32..100f32),
        user in proptest::option::of("[a-z]{1,6}"),
    ) -> Face {
        Face { face_id: id, bounding_box: bbox, confidence, user_id: user, ..Face::default() }
    }
}

proptest! {
    #[test]
    fn builder_sets_exactly_the_given_value(id in ".{0,32}", max in any::<i32>()) {
        let req = ListFacesRequest::new(id.clone()).with_max_results(max);
        prop_assert_eq!(req.collection_id, Some(id));
        prop_assert_eq!(req.max_results, Some(max));
        prop_assert!(req.next_token.is_none());
    }

    #[test]
    fn list_builders_append(first in proptest::collection::vec("[a-z]{1,4}", 0..5), second in proptest::collection::vec("[a-z]{1,4}", 0..5)) {
        let req = DeleteFacesRequest::new("c", first.clone()).with_face_ids(second.clone());
        let mut expected = first;
        expected.extend(second);
        prop_assert_eq!(req.face_ids, Some(expected));
    }

    #[test]
    fn equal_values_hash_equal(face in arb_face()) {
        let copy = face.clone();
        prop_assert_eq!(&face, &copy);
        prop_assert_eq!(hash_of(&face), hash_of(&copy));
    }

    #[test]
    fn changing_any_member_breaks_equality(face in arb_face(), other in "[A-Z]{3}") {
        prop_assert_ne!(&face, &face.clone().with_external_image_id(other.clone()));
        let mut cleared = face.clone();
        cleared.face_id = if face.face_id.is_some() { None } else { Some(other) };
        prop_assert_ne!(&face, &cleared);
    }

    #[test]
    fn display_names_only_present_members(face in arb_face()) {
        let rendered = face.to_string();
        prop_assert_eq!(rendered.contains("FaceId: "), face.face_id.is_some());
        prop_assert_eq!(rendered.contains("UserId: "), face.user_id.is_some());
        prop_assert!(!rendered.contains("ImageId: "));
        let braced = rendered.starts_with('{') && rendered.ends_with('}');
        prop_assert!(braced, "not braced: {}", rendered);
    }

    #[test]
    fn json_keeps_every_present_member(face in arb_face()) {
        let json = serde_json::to_string(&face).unwrap();
        let back: Face = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, face);
    }

    #[test]
    fn duplicate_tag_leaves_map_unchanged(key in "[a-z]{1,8}", v1 in ".{0,8}", v2 in ".{0,8}") {
        let mut req = TagResourceRequest::new("arn");
        req.add_tags_entry(key.clone(), v1.clone()).unwrap();
        let snapshot = req.tags.clone();
        prop_assert!(req.add_tags_entry(key.clone(), v2).is_err());
        prop_assert_eq!(req.tags, snapshot);
    }
}
