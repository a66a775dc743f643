//! World-sphere binding driven by a single hand.
//!
//! The sphere is unrelated to the overlay rectangles: it is shown while hand
//! slot 0 is tracked and spins around its Y axis as the hand's bounding box
//! moves across the camera frame.

use std::f32::consts::PI;

use crate::hand::HandState;

/// Derived visibility and rotation of the sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereTransform {
    pub hidden: bool,
    /// Rotation around the Y axis, in radians.
    pub rotation_y: f32,
}

/// Computes the sphere transform from hand slot 0.
///
/// The box's left edge sweeps the rotation through 0..=pi as the hand crosses
/// the frame left to right.
pub fn compute(hand: &HandState) -> SphereTransform {
    SphereTransform {
        hidden: !hand.is_tracked,
        rotation_y: hand.bounding_box.x * PI,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::hand::BoundingBox;

    use super::*;

    #[test]
    fn test_rotation_follows_box_x() {
        let hand = HandState {
            bounding_box: BoundingBox::new(0.5, 0.2, 0.3, 0.3),
            is_tracked: true,
        };
        let transform = compute(&hand);
        assert!(!transform.hidden);
        assert_relative_eq!(transform.rotation_y, PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_untracked_hand_hides_sphere() {
        let transform = compute(&HandState::untracked());
        assert!(transform.hidden);
        assert_eq!(transform.rotation_y, 0.0);
    }
}
