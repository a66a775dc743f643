//! Demo driver: runs the overlay and sphere bindings against an in-memory
//! scene, fed by a synthetic hand-tracking source.

use std::f32::consts::TAU;

use mudra::{
    camera::PreviewSize,
    driver::{
        HandOverlayBindings, SphereBindings, RECT_BETWEEN_HANDS, RECT_HAND0, RECT_HAND1,
        WORLD_SPHERE,
    },
    hand::{BoundingBox, HandSnapshot, HandSource, HandState},
    overlay::OverlayConfig,
    scene::SceneRoot,
    timer::FpsCounter,
};

const FRAMES: u32 = 600;

/// Synthetic tracking feed: two hands orbiting the center of the frame on
/// opposite sides.
struct OrbitingHands {
    frame: u32,
}

impl HandSource for OrbitingHands {
    fn sample(&mut self) -> HandSnapshot {
        let angle = self.frame as f32 / 120.0 * TAU;
        self.frame += 1;

        let hand = |phase: f32| {
            let (sin, cos) = (angle + phase).sin_cos();
            HandState {
                bounding_box: BoundingBox::new(0.4 + cos * 0.25, 0.4 + sin * 0.25, 0.2, 0.2),
                is_tracked: true,
            }
        };

        HandSnapshot::from_hands([hand(0.0), hand(TAU / 2.0)])
    }
}

fn main() -> anyhow::Result<()> {
    mudra::init_logger!();

    let scene = SceneRoot::new([RECT_HAND0, RECT_HAND1, RECT_BETWEEN_HANDS, WORLD_SPHERE]);
    let overlay = pollster::block_on(HandOverlayBindings::bind(&scene, OverlayConfig::default()))?;
    let sphere = pollster::block_on(SphereBindings::bind(&scene))?;

    let preview = PreviewSize::from_device(1170.0, 2532.0, 3.0);
    log::info!("preview size: {preview}");

    let mut source = OrbitingHands { frame: 0 };
    let mut fps = FpsCounter::new("overlay demo");
    for _ in 0..FRAMES {
        let snapshot = source.sample();
        overlay.tick(preview, &snapshot);
        sphere.tick(&snapshot);
        fps.tick();
    }

    Ok(())
}
