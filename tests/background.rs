//! Scene scenarios driven through the public API.

use cybernode::params::GRID_RESOLUTION;
use cybernode::scene::{BackgroundScene, FrameClock, SceneParams, WaveGrid};
use std::time::{Duration, Instant};

#[test]
fn grid_animates_heights_only() {
    let mut scene = BackgroundScene::new(SceneParams::default(), 3);
    let before: Vec<f32> = scene.grid.positions().to_vec();

    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    for frame in 1..=30 {
        let tick = clock.tick_at(start + Duration::from_millis(16 * frame));
        scene.update(tick);
    }

    let after = scene.grid.positions();
    assert_eq!(after.len(), 3 * GRID_RESOLUTION * GRID_RESOLUTION);
    for (old, new) in before.chunks_exact(3).zip(after.chunks_exact(3)) {
        assert_eq!(old[0], new[0]);
        assert_eq!(old[2], new[2]);
    }

    let elapsed = 30.0 * 0.016;
    let params = scene.grid.params().clone();
    let [x, y, z] = scene.grid.point(10, 40);
    let expected = WaveGrid::height_at(&params, x, z, elapsed * params.time_scale);
    assert!((y - expected).abs() < 1e-4);
}

#[test]
fn same_seed_same_layout() {
    let a = BackgroundScene::new(SceneParams::default(), 99);
    let b = BackgroundScene::new(SceneParams::default(), 99);
    let c = BackgroundScene::new(SceneParams::default(), 100);

    assert_eq!(a.sphere.positions(), b.sphere.positions());
    assert_eq!(a.stars.positions(), b.stars.positions());
    assert_ne!(a.sphere.positions(), c.sphere.positions());
}

#[test]
fn sphere_points_sit_on_radius() {
    let scene = BackgroundScene::new(SceneParams::default(), 5);
    let radius = scene.sphere.params().radius;

    assert_eq!(scene.sphere.positions().len(), 3 * 3000);
    for p in scene.sphere.positions().chunks_exact(3) {
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - radius).abs() < 1e-3);
    }
}
