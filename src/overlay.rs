//! Screen-space overlay geometry derived from the tracked hands.
//!
//! Three rectangles are driven from one [`HandSnapshot`]: one following each
//! hand's bounding box, and a connecting rectangle stretched between the two
//! hands. [`compute`] is a pure function from the input snapshot to the full
//! output frame; evaluating it twice with identical inputs yields identical
//! frames.

use std::f32::consts::FRAC_PI_2;

use nalgebra::{distance, Point2};

use crate::{
    camera::PreviewSize,
    hand::{HandSnapshot, HandState},
};

/// Derived state of one screen-space overlay rectangle.
///
/// Positions and sizes are in preview points, rotations in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectTransform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation_z: f32,
    pub hidden: bool,
}

/// Tunables of the overlay computation.
#[derive(Debug, Clone, Copy)]
pub struct OverlayConfig {
    /// Multiplied with the inter-hand distance to size the connecting
    /// rectangle. Compensates for the padding in the connecting texture.
    pub texture_scale: f32,
    /// Authored width of the connecting rectangle. Half of it is subtracted
    /// from the midpoint position so the rectangle stays centered between the
    /// hands.
    pub connecting_rect_base_width: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            texture_scale: 1.2,
            connecting_rect_base_width: 0.0,
        }
    }
}

/// The full output frame: one transform per overlay rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub hand0: RectTransform,
    pub hand1: RectTransform,
    pub between: RectTransform,
}

/// Computes the overlay transforms for one tick.
///
/// Every output is rederived from the snapshot; nothing is cached between
/// calls. A zero-sized preview collapses positions and sizes to zero without
/// being treated as an error.
pub fn compute(
    preview: PreviewSize,
    hands: &HandSnapshot,
    config: &OverlayConfig,
) -> OverlayFrame {
    let (hand0, hand1) = (hands.hand(0), hands.hand(1));
    let (c0, c1) = (hand0.bounding_box.center(), hand1.bounding_box.center());

    // Left/right disambiguation, compared by center X. When both centers
    // share the same X, neither strict comparison holds: both Y roles then
    // resolve to hand 1's center and both hands count as "left" below.
    // Inherited behavior, kept as-is.
    let left_x = c0.x.min(c1.x);
    let right_x = c0.x.max(c1.x);
    let left_y = if c0.x < c1.x { c0.y } else { c1.y };
    let right_y = if c0.x > c1.x { c0.y } else { c1.y };

    // The left hand keeps the un-mirrored texture.
    let mirror = |center_x: f32| if center_x == left_x { 1.0 } else { -1.0 };

    // Midpoint between the hands, offset by half the authored width so the
    // connecting rectangle stays centered on it.
    let half_base = config.connecting_rect_base_width / 2.0;
    let mid = Point2::new(
        (c0.x + c1.x) / 2.0 * preview.width() - half_base,
        (c0.y + c1.y) / 2.0 * preview.height() - half_base,
    );

    // The distance is measured between the scaled top-left corners, not in
    // normalized space.
    let hand_distance = distance(
        &preview.scale_point(hand0.bounding_box.top_left()),
        &preview.scale_point(hand1.bounding_box.top_left()),
    );
    let between_scale = hand_distance * config.texture_scale;

    let rotation_z = (left_x - right_x).atan2(left_y - right_y) + FRAC_PI_2;

    OverlayFrame {
        hand0: hand_rect(preview, hand0, mirror(c0.x)),
        hand1: hand_rect(preview, hand1, mirror(c1.x)),
        between: RectTransform {
            x: mid.x,
            y: mid.y,
            // The connecting rectangle keeps its authored size; the hand
            // distance drives the uniform scale instead.
            width: config.connecting_rect_base_width,
            height: config.connecting_rect_base_width,
            scale_x: between_scale,
            scale_y: between_scale,
            rotation_z,
            hidden: hands.count() < 2,
        },
    }
}

/// Maps one hand's bounding box onto the preview.
fn hand_rect(preview: PreviewSize, hand: &HandState, scale_x: f32) -> RectTransform {
    let bb = hand.bounding_box;
    RectTransform {
        x: bb.x * preview.width(),
        y: bb.y * preview.height(),
        width: bb.width * preview.width(),
        height: bb.height * preview.height(),
        scale_x,
        scale_y: 1.0,
        rotation_z: 0.0,
        hidden: !hand.is_tracked,
    }
}
