//! Facade smoke test, run under wasm-pack: `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use platforma_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_steps_and_exposes_render_buffers() {
    let mut world = World::new();

    assert_eq!(world.width(), 800.0);
    assert_eq!(world.height(), 400.0);
    assert!((1..=3).contains(&world.obstacle_count()));

    world.set_input(false, true, false);
    for _ in 0..10 {
        world.step();
    }
    assert_eq!(world.frame(), 10);

    let count = world.extract_render_frame();
    assert_eq!(count, world.body_count());
    assert_eq!(world.bodies_len(), 4 * count);
    assert_eq!(world.segments_len(), 4 * world.segment_count());
    assert!(!world.segments_ptr().is_null());
    assert!(!world.bodies_ptr().is_null());
}

#[wasm_bindgen_test]
fn facade_rejects_bad_bundles() {
    let mut world = World::new();
    assert!(world.load_level_bundle("{}".to_string()).is_err());

    let manifest = world.get_level_manifest_json();
    assert!(world.load_level_bundle(manifest).is_ok());
}
