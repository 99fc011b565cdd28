//! Personal protective equipment detection.

use crate::enums::{BodyPart, ProtectiveEquipmentType};
use crate::geometry::BoundingBox;
use crate::media::Image;
use rekognition_core::shape;

shape! {
    pub struct CoversBodyPart {
        confidence: f32 => "Confidence",
        value: bool => "Value",
    }
}

shape! {
    pub struct EquipmentDetection {
        bounding_box: BoundingBox => "BoundingBox",
        confidence: f32 => "Confidence",
        r#type: ProtectiveEquipmentType => "Type",
        covers_body_part: CoversBodyPart => "CoversBodyPart",
    }
}

shape! {
    pub struct ProtectiveEquipmentBodyPart {
        name: BodyPart => "Name",
        confidence: f32 => "Confidence",
        equipment_detections: Vec<EquipmentDetection> => "EquipmentDetections",
    }
}

shape! {
    pub struct ProtectiveEquipmentPerson {
        body_parts: Vec<ProtectiveEquipmentBodyPart> => "BodyParts",
        bounding_box: BoundingBox => "BoundingBox",
        confidence: f32 => "Confidence",
        id: i32 => "Id",
    }
}

shape! {
    /// Which equipment types to summarize, and the confidence a detection
    /// needs to count.
    pub struct ProtectiveEquipmentSummarizationAttributes {
        min_confidence: f32 => "MinConfidence",
        required_equipment_types: Vec<ProtectiveEquipmentType> => "RequiredEquipmentTypes",
    }
}

shape! {
    /// Person ids grouped by whether they wear the required equipment.
    pub struct ProtectiveEquipmentSummary {
        persons_with_required_equipment: Vec<i32> => "PersonsWithRequiredEquipment",
        persons_without_required_equipment: Vec<i32> => "PersonsWithoutRequiredEquipment",
        persons_indeterminate: Vec<i32> => "PersonsIndeterminate",
    }
}

shape! {
    pub struct DetectProtectiveEquipmentRequest {
        image: Image => "Image",
        summarization_attributes: ProtectiveEquipmentSummarizationAttributes => "SummarizationAttributes",
    }
}

impl DetectProtectiveEquipmentRequest {
    pub fn new(image: Image) -> Self {
        Self::default().with_image(image)
    }
}

shape! {
    pub struct DetectProtectiveEquipmentResult {
        protective_equipment_model_version: String => "ProtectiveEquipmentModelVersion",
        persons: Vec<ProtectiveEquipmentPerson> => "Persons",
        summary: ProtectiveEquipmentSummary => "Summary",
    }
}
