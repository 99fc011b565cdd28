//! Users: groups of faces in a collection that belong to one person.

use crate::enums::{
    QualityFilter, UnsearchedFaceReason, UnsuccessfulFaceAssociationReason,
    UnsuccessfulFaceDeletionReason, UnsuccessfulFaceDisassociationReason, UserStatus,
};
use crate::face::FaceDetail;
use crate::media::Image;
use rekognition_core::shape;

shape! {
    pub struct User {
        user_id: String => "UserId",
        user_status: UserStatus => "UserStatus",
    }
}

shape! {
    pub struct MatchedUser {
        user_id: String => "UserId",
        user_status: UserStatus => "UserStatus",
    }
}

shape! {
    pub struct UserMatch {
        similarity: f32 => "Similarity",
        user: MatchedUser => "User",
    }
}

shape! {
    pub struct SearchedFace {
        face_id: String => "FaceId",
    }
}

shape! {
    pub struct SearchedFaceDetails {
        face_detail: FaceDetail => "FaceDetail",
    }
}

shape! {
    pub struct SearchedUser {
        user_id: String => "UserId",
    }
}

shape! {
    pub struct UnsearchedFace {
        face_details: FaceDetail => "FaceDetails",
        reasons: Vec<UnsearchedFaceReason> => "Reasons",
    }
}

shape! {
    pub struct AssociatedFace {
        face_id: String => "FaceId",
    }
}

shape! {
    pub struct UnsuccessfulFaceAssociation {
        face_id: String => "FaceId",
        user_id: String => "UserId",
        confidence: f32 => "Confidence",
        reasons: Vec<UnsuccessfulFaceAssociationReason> => "Reasons",
    }
}

shape! {
    pub struct DisassociatedFace {
        face_id: String => "FaceId",
    }
}

shape! {
    pub struct UnsuccessfulFaceDisassociation {
        face_id: String => "FaceId",
        user_id: String => "UserId",
        reasons: Vec<UnsuccessfulFaceDisassociationReason> => "Reasons",
    }
}

shape! {
    pub struct UnsuccessfulFaceDeletion {
        face_id: String => "FaceId",
        user_id: String => "UserId",
        reasons: Vec<UnsuccessfulFaceDeletionReason> => "Reasons",
    }
}

// ----- CreateUser / DeleteUser / ListUsers -----

shape! {
    pub struct CreateUserRequest {
        collection_id: String => "CollectionId",
        user_id: String => "UserId",
        /// Idempotency token; retries with the same token create one user.
        client_request_token: String => "ClientRequestToken",
    }
}

impl CreateUserRequest {
    pub fn new(collection_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::default()
            .with_collection_id(collection_id)
            .with_user_id(user_id)
    }
}

shape! {
    pub struct CreateUserResult {}
}

shape! {
    pub struct DeleteUserRequest {
        collection_id: String => "CollectionId",
        user_id: String => "UserId",
        client_request_token: String => "ClientRequestToken",
    }
}

impl DeleteUserRequest {
    pub fn new(collection_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::default()
            .with_collection_id(collection_id)
            .with_user_id(user_id)
    }
}

shape! {
    pub struct DeleteUserResult {}
}

shape! {
    pub struct ListUsersRequest {
        collection_id: String => "CollectionId",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

impl ListUsersRequest {
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self::default().with_collection_id(collection_id)
    }
}

shape! {
    pub struct ListUsersResult {
        users: Vec<User> => "Users",
        next_token: String => "NextToken",
    }
}

// ----- AssociateFaces / DisassociateFaces -----

shape! {
    pub struct AssociateFacesRequest {
        collection_id: String => "CollectionId",
        user_id: String => "UserId",
        face_ids: Vec<String> => "FaceIds",
        user_match_threshold: f32 => "UserMatchThreshold",
        client_request_token: String => "ClientRequestToken",
    }
}

shape! {
    pub struct AssociateFacesResult {
        associated_faces: Vec<AssociatedFace> => "AssociatedFaces",
        unsuccessful_face_associations: Vec<UnsuccessfulFaceAssociation> => "UnsuccessfulFaceAssociations",
        user_status: UserStatus => "UserStatus",
    }
}

shape! {
    pub struct DisassociateFacesRequest {
        collection_id: String => "CollectionId",
        user_id: String => "UserId",
        client_request_token: String => "ClientRequestToken",
        face_ids: Vec<String> => "FaceIds",
    }
}

shape! {
    pub struct DisassociateFacesResult {
        disassociated_faces: Vec<DisassociatedFace> => "DisassociatedFaces",
        unsuccessful_face_disassociations: Vec<UnsuccessfulFaceDisassociation> => "UnsuccessfulFaceDisassociations",
        user_status: UserStatus => "UserStatus",
    }
}

// ----- SearchUsers / SearchUsersByImage -----

shape! {
    /// Search by either `user_id` or `face_id`, not both.
    pub struct SearchUsersRequest {
        collection_id: String => "CollectionId",
        user_id: String => "UserId",
        face_id: String => "FaceId",
        user_match_threshold: f32 => "UserMatchThreshold",
        max_users: i32 => "MaxUsers",
    }
}

shape! {
    pub struct SearchUsersResult {
        user_matches: Vec<UserMatch> => "UserMatches",
        face_model_version: String => "FaceModelVersion",
        searched_face: SearchedFace => "SearchedFace",
        searched_user: SearchedUser => "SearchedUser",
    }
}

shape! {
    pub struct SearchUsersByImageRequest {
        collection_id: String => "CollectionId",
        image: Image => "Image",
        user_match_threshold: f32 => "UserMatchThreshold",
        max_users: i32 => "MaxUsers",
        quality_filter: QualityFilter => "QualityFilter",
    }
}

shape! {
    pub struct SearchUsersByImageResult {
        user_matches: Vec<UserMatch> => "UserMatches",
        face_model_version: String => "FaceModelVersion",
        searched_face: SearchedFaceDetails => "SearchedFace",
        unsearched_faces: Vec<UnsearchedFace> => "UnsearchedFaces",
    }
}
