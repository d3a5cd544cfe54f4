//! Procedural background scene: wave grid, particle sphere, wireframe shape
//! and star shell, each a self-contained animated layer.

mod clock;
mod grid;
mod shape;
mod sphere;
mod stars;
mod system;

pub use clock::{FrameClock, FrameTime};
pub use grid::{WaveGrid, GRID_POINTS};
pub use shape::{icosahedron_edges, icosahedron_vertices, CyberShape, FloatEffect};
pub use sphere::ParticleSphere;
pub use stars::{hsl_to_rgb, StarField};
pub use system::{BackgroundScene, SceneParams};
