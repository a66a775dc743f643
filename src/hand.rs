//! Tracked-hand input signals.
//!
//! The host's hand tracker exposes exactly two hand slots and a count of how
//! many of them are currently tracked. One [`HandSnapshot`] captures all of
//! those signals for a single host tick; the overlay geometry is recomputed
//! from scratch for every snapshot.

use nalgebra::Point2;

/// Axis-aligned bounding box of a detected hand, in normalized camera space.
///
/// All coordinates lie in the 0–1 range, with the origin in the top-left
/// corner of the camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// X coordinate of the left edge.
    pub x: f32,
    /// Y coordinate of the top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Creates a bounding box extending right and down from `(x, y)`.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the top-left corner of the box.
    #[inline]
    pub fn top_left(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    /// Returns the center point of the box.
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// State of one of the two tracked hand slots.
///
/// While a slot is not tracked, its bounding box retains whatever values the
/// tracker last reported for it. Consumers decide per output whether the box
/// is meaningful by checking `is_tracked`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandState {
    pub bounding_box: BoundingBox,
    pub is_tracked: bool,
}

impl HandState {
    /// An empty, untracked hand slot.
    pub fn untracked() -> Self {
        Self {
            bounding_box: BoundingBox::new(0.0, 0.0, 0.0, 0.0),
            is_tracked: false,
        }
    }
}

/// Snapshot of the hand-tracking signals for a single host tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSnapshot {
    hands: [HandState; 2],
    count: u8,
}

impl HandSnapshot {
    /// Creates a snapshot from the two hand slots and the tracked-hand count.
    ///
    /// The count is a separate signal on the host side and is passed through
    /// as-is rather than being rederived from the slots.
    ///
    /// # Panics
    ///
    /// This method will panic if `count` is greater than 2.
    pub fn new(hands: [HandState; 2], count: u8) -> Self {
        assert!(count <= 2, "tracked-hand count out of range: {count}");
        Self { hands, count }
    }

    /// Creates a snapshot from the two hand slots, counting the slots whose
    /// `is_tracked` flag is set.
    pub fn from_hands(hands: [HandState; 2]) -> Self {
        let count = hands.iter().filter(|hand| hand.is_tracked).count() as u8;
        Self { hands, count }
    }

    /// Returns the hand slot at `index`.
    ///
    /// # Panics
    ///
    /// This method will panic if `index` is not 0 or 1; the tracker exposes
    /// exactly two slots.
    #[inline]
    pub fn hand(&self, index: usize) -> &HandState {
        &self.hands[index]
    }

    /// Returns the number of currently tracked hands (0, 1, or 2).
    #[inline]
    pub fn count(&self) -> u8 {
        self.count
    }
}

/// Produces one [`HandSnapshot`] per host tick.
///
/// The host's live signals are behind this seam; tests and demos substitute
/// synthetic feeds.
pub trait HandSource {
    fn sample(&mut self) -> HandSnapshot;
}
