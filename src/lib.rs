//! Hand-tracking overlay effects for camera previews.
//!
//! The host platform owns the hand tracker, the scene graph, and the frame
//! schedule. This crate derives the per-frame overlay geometry in between: it
//! takes a snapshot of the tracking signals, computes screen-space transforms
//! for the overlay rectangles (one per hand, plus one connecting the two), and
//! writes them to the bound scene nodes.
//!
//! # Coordinate Spaces
//!
//! Hand detections arrive in *normalized camera space*: bounding boxes use
//! coordinates in the 0–1 range, with X pointing right and Y pointing down.
//! All derived transforms are in *preview points*, the visible camera feed
//! area scaled from device pixels by the screen scale factor (see
//! [`camera::PreviewSize`]).
//!
//! # Evaluation Model
//!
//! Everything here is a pure function of the current input snapshot. The host
//! calls [`driver::HandOverlayBindings::tick`] once per rendered frame; no
//! state is carried between ticks and no change detection happens on our side.

use log::LevelFilter;

pub mod camera;
pub mod driver;
pub mod hand;
pub mod overlay;
pub mod scene;
pub mod sphere;
pub mod timer;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate will log at *debug* level; everything else
/// stays at the `env_logger` defaults unless overridden via `RUST_LOG`.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
