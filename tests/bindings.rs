use approx::assert_relative_eq;
use mudra::{
    camera::PreviewSize,
    driver::{
        HandOverlayBindings, SphereBindings, RECT_BETWEEN_HANDS, RECT_HAND0, RECT_HAND1,
        WORLD_SPHERE,
    },
    hand::{BoundingBox, HandSnapshot, HandState},
    overlay::OverlayConfig,
    scene::SceneRoot,
};

fn full_scene() -> SceneRoot {
    SceneRoot::new([RECT_HAND0, RECT_HAND1, RECT_BETWEEN_HANDS, WORLD_SPHERE])
}

fn tracked(x: f32, y: f32, w: f32, h: f32) -> HandState {
    HandState {
        bounding_box: BoundingBox::new(x, y, w, h),
        is_tracked: true,
    }
}

#[test]
fn tick_writes_every_bound_property() {
    let scene = full_scene();
    let bindings =
        pollster::block_on(HandOverlayBindings::bind(&scene, OverlayConfig::default())).unwrap();

    let snapshot =
        HandSnapshot::from_hands([tracked(0.1, 0.1, 0.2, 0.2), tracked(0.6, 0.6, 0.2, 0.2)]);
    bindings.tick(PreviewSize::new(1000.0, 1000.0), &snapshot);

    let rect0 = pollster::block_on(scene.find_first(RECT_HAND0)).unwrap();
    assert_relative_eq!(rect0.position().x, 100.0, epsilon = 1e-3);
    assert_relative_eq!(rect0.position().y, 100.0, epsilon = 1e-3);
    assert_relative_eq!(rect0.size().x, 200.0, epsilon = 1e-3);
    assert_relative_eq!(rect0.size().y, 200.0, epsilon = 1e-3);
    assert_eq!(rect0.scale().x, 1.0);
    assert!(!rect0.is_hidden());

    let rect1 = pollster::block_on(scene.find_first(RECT_HAND1)).unwrap();
    assert_relative_eq!(rect1.position().x, 600.0, epsilon = 1e-3);
    assert_eq!(rect1.scale().x, -1.0);

    let between = pollster::block_on(scene.find_first(RECT_BETWEEN_HANDS)).unwrap();
    assert_relative_eq!(between.position().x, 450.0, epsilon = 1e-3);
    assert_relative_eq!(between.position().y, 450.0, epsilon = 1e-3);
    assert_relative_eq!(between.scale().x, 848.528, epsilon = 1e-1);
    assert_relative_eq!(between.scale().y, 848.528, epsilon = 1e-1);
    assert!(!between.is_hidden());
}

#[test]
fn single_hand_hides_connecting_rect() {
    let scene = full_scene();
    let bindings =
        pollster::block_on(HandOverlayBindings::bind(&scene, OverlayConfig::default())).unwrap();

    let snapshot = HandSnapshot::from_hands([tracked(0.1, 0.1, 0.2, 0.2), HandState::untracked()]);
    bindings.tick(PreviewSize::new(1000.0, 1000.0), &snapshot);

    let rect1 = pollster::block_on(scene.find_first(RECT_HAND1)).unwrap();
    let between = pollster::block_on(scene.find_first(RECT_BETWEEN_HANDS)).unwrap();
    assert!(rect1.is_hidden());
    assert!(between.is_hidden());
}

#[test]
fn missing_node_aborts_bind() {
    // No connecting rectangle in the scene.
    let scene = SceneRoot::new([RECT_HAND0, RECT_HAND1]);
    let err = pollster::block_on(HandOverlayBindings::bind(&scene, OverlayConfig::default()))
        .unwrap_err();
    assert!(err.to_string().contains(RECT_BETWEEN_HANDS));
}

#[test]
fn sphere_follows_hand0() {
    let scene = full_scene();
    let bindings = pollster::block_on(SphereBindings::bind(&scene)).unwrap();

    bindings.tick(&HandSnapshot::from_hands([
        tracked(0.5, 0.2, 0.3, 0.3),
        HandState::untracked(),
    ]));

    let sphere = pollster::block_on(scene.find_first(WORLD_SPHERE)).unwrap();
    assert!(!sphere.is_hidden());
    assert_relative_eq!(
        sphere.rotation_y(),
        std::f32::consts::PI / 2.0,
        epsilon = 1e-6
    );

    bindings.tick(&HandSnapshot::from_hands([HandState::untracked(); 2]));
    assert!(sphere.is_hidden());
}
