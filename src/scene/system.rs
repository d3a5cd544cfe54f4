//! Background scene composed of independent animated layers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::clock::FrameTime;
use super::grid::WaveGrid;
use super::shape::CyberShape;
use super::sphere::ParticleSphere;
use super::stars::StarField;
use crate::params::{ParticleSphereParams, ShapeParams, StarFieldParams, WaveGridParams};

/// Parameters for every background layer
#[derive(Debug, Clone, Default)]
pub struct SceneParams {
    pub grid: WaveGridParams,
    pub sphere: ParticleSphereParams,
    pub shape: ShapeParams,
    pub stars: StarFieldParams,
}

/// Background layers, each owning its own buffers and animation state
pub struct BackgroundScene {
    pub stars: StarField,
    pub grid: WaveGrid,
    pub sphere: ParticleSphere,
    pub shape: CyberShape,
}

impl BackgroundScene {
    /// Build every layer; `seed` makes the random layouts reproducible
    pub fn new(params: SceneParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let stars = StarField::new(params.stars, &mut rng);
        let sphere = ParticleSphere::new(params.sphere, &mut rng);
        let float_offset = rng.gen::<f32>() * 10000.0;
        let shape = CyberShape::new(params.shape, float_offset);
        let grid = WaveGrid::new(params.grid);

        log::debug!(
            "Scene: {} stars, {} grid points, {} sphere points, {} shape edges",
            stars.positions().len() / 3,
            grid.positions().len() / 3,
            sphere.positions().len() / 3,
            shape.edge_count()
        );

        Self {
            stars,
            grid,
            sphere,
            shape,
        }
    }

    /// Advance every layer by one animation frame tick
    pub fn update(&mut self, frame: FrameTime) {
        self.stars.update(frame.delta_s);
        self.grid.update(frame.elapsed_s);
        self.sphere.update(frame.delta_s);
        self.shape.update(frame.elapsed_s);
    }
}
