//! Camera preview geometry.

use std::fmt;

use nalgebra::Point2;

/// Size (`width x height`) of the visible camera preview, in points.
///
/// The preview is the on-screen area showing the camera feed. The host reports
/// its size in device pixels together with a screen scale factor; dividing the
/// two yields points, the space all overlay transforms live in.
///
/// Both dimensions are expected to be positive. A zero dimension is not an
/// error, it just collapses every derived transform onto a line or point.
#[derive(Clone, Copy, PartialEq)]
pub struct PreviewSize {
    width: f32,
    height: f32,
}

impl PreviewSize {
    /// Creates a new [`PreviewSize`] of `width x height` points.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Derives the preview size in points from the device preview resolution
    /// and the screen scale factor.
    pub fn from_device(device_width: f32, device_height: f32, screen_scale: f32) -> Self {
        Self {
            width: device_width / screen_scale,
            height: device_height / screen_scale,
        }
    }

    /// Returns the width of the preview in points.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height of the preview in points.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Maps a point from normalized camera space onto the preview.
    #[inline]
    pub fn scale_point(&self, point: Point2<f32>) -> Point2<f32> {
        Point2::new(point.x * self.width, point.y * self.height)
    }
}

impl fmt::Display for PreviewSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Debug for PreviewSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_device() {
        let preview = PreviewSize::from_device(1080.0, 1920.0, 2.0);
        assert_eq!(preview.width(), 540.0);
        assert_eq!(preview.height(), 960.0);
        assert_eq!(preview.to_string(), "540x960");
    }

    #[test]
    fn test_scale_point() {
        let preview = PreviewSize::new(1000.0, 500.0);
        assert_eq!(
            preview.scale_point(Point2::new(0.5, 0.5)),
            Point2::new(500.0, 250.0)
        );
        assert_eq!(
            preview.scale_point(Point2::new(0.0, 1.0)),
            Point2::new(0.0, 500.0)
        );
    }

    #[test]
    fn test_zero_size_collapses() {
        let preview = PreviewSize::new(0.0, 0.0);
        assert_eq!(
            preview.scale_point(Point2::new(0.7, 0.3)),
            Point2::new(0.0, 0.0)
        );
    }
}
