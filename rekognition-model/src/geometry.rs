//! Positions on an image or video frame.
//!
//! Coordinates are ratios of the overall frame size, so values usually fall
//! in `0.0..=1.0`. Values outside that range are possible when a box extends
//! past the frame edge.

use rekognition_core::shape;

shape! {
    /// Axis-aligned box around a detected item.
    pub struct BoundingBox {
        /// Width as a ratio of the overall image width.
        width: f32 => "Width",
        /// Height as a ratio of the overall image height.
        height: f32 => "Height",
        /// Left coordinate as a ratio of the overall image width.
        left: f32 => "Left",
        /// Top coordinate as a ratio of the overall image height.
        top: f32 => "Top",
    }
}

impl BoundingBox {
    pub fn new(width: f32, height: f32, left: f32, top: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            left: Some(left),
            top: Some(top),
        }
    }
}

shape! {
    /// A point of a polygon.
    pub struct Point {
        x: f32 => "X",
        y: f32 => "Y",
    }
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

shape! {
    /// Location of detected text as a box and a finer polygon.
    pub struct Geometry {
        bounding_box: BoundingBox => "BoundingBox",
        polygon: Vec<Point> => "Polygon",
    }
}

shape! {
    /// Face orientation in degrees.
    pub struct Pose {
        roll: f32 => "Roll",
        yaw: f32 => "Yaw",
        pitch: f32 => "Pitch",
    }
}

shape! {
    /// Area of a frame that a detection is restricted to.
    pub struct RegionOfInterest {
        bounding_box: BoundingBox => "BoundingBox",
        polygon: Vec<Point> => "Polygon",
    }
}
