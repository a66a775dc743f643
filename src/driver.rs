//! Startup binding and per-tick evaluation.
//!
//! Binding happens once: the named nodes are resolved, in full, before
//! anything is installed, and a missing name aborts the whole startup. After
//! that the host drives [`HandOverlayBindings::tick`] and
//! [`SphereBindings::tick`] once per rendered frame; each tick rederives the
//! complete output snapshot and writes it to the nodes.

use itertools::Itertools;

use crate::{
    camera::PreviewSize,
    hand::HandSnapshot,
    overlay::{self, OverlayConfig, RectTransform},
    scene::{NodeHandle, SceneRoot},
    sphere,
};

/// Scene name of the rectangle following hand slot 0.
pub const RECT_HAND0: &str = "rect_hand0";
/// Scene name of the rectangle following hand slot 1.
pub const RECT_HAND1: &str = "rect_hand1";
/// Scene name of the rectangle connecting the two hands.
pub const RECT_BETWEEN_HANDS: &str = "rect_betweenhands";
/// Scene name of the rotating sphere.
pub const WORLD_SPHERE: &str = "WorldSphere";

/// The three overlay rectangles, resolved and ready to drive.
#[derive(Debug)]
pub struct HandOverlayBindings {
    rect_hand0: NodeHandle,
    rect_hand1: NodeHandle,
    rect_between: NodeHandle,
    config: OverlayConfig,
}

impl HandOverlayBindings {
    /// Resolves the overlay rectangles in `scene`.
    ///
    /// All three nodes are resolved before any binding exists. If one of the
    /// names is missing, the error propagates and nothing is installed.
    pub async fn bind(scene: &SceneRoot, config: OverlayConfig) -> anyhow::Result<Self> {
        let rect_hand0 = scene.find_first(RECT_HAND0).await?;
        let rect_hand1 = scene.find_first(RECT_HAND1).await?;
        let rect_between = scene.find_first(RECT_BETWEEN_HANDS).await?;

        log::info!(
            "hand overlay bound to {}",
            [RECT_HAND0, RECT_HAND1, RECT_BETWEEN_HANDS]
                .iter()
                .format(", ")
        );

        Ok(Self {
            rect_hand0,
            rect_hand1,
            rect_between,
            config,
        })
    }

    /// Recomputes the overlay geometry for `hands` and writes it to the bound
    /// nodes.
    pub fn tick(&self, preview: PreviewSize, hands: &HandSnapshot) {
        let frame = overlay::compute(preview, hands, &self.config);
        log::trace!("overlay frame: {frame:?}");

        apply_rect(&self.rect_hand0, &frame.hand0);
        apply_rect(&self.rect_hand1, &frame.hand1);
        apply_rect(&self.rect_between, &frame.between);
    }
}

/// The sphere node, resolved and ready to drive.
pub struct SphereBindings {
    sphere: NodeHandle,
}

impl SphereBindings {
    /// Resolves the sphere node in `scene`, failing if the name is missing.
    pub async fn bind(scene: &SceneRoot) -> anyhow::Result<Self> {
        let sphere = scene.find_first(WORLD_SPHERE).await?;
        log::info!("sphere bound to {WORLD_SPHERE}");
        Ok(Self { sphere })
    }

    /// Recomputes the sphere transform from hand slot 0 and writes it.
    pub fn tick(&self, hands: &HandSnapshot) {
        let transform = sphere::compute(hands.hand(0));
        self.sphere.set_hidden(transform.hidden);
        self.sphere.set_rotation_y(transform.rotation_y);
    }
}

fn apply_rect(node: &NodeHandle, rect: &RectTransform) {
    node.set_position(rect.x, rect.y);
    node.set_size(rect.width, rect.height);
    node.set_scale(rect.scale_x, rect.scale_y);
    node.set_rotation_z(rect.rotation_z);
    node.set_hidden(rect.hidden);
}
