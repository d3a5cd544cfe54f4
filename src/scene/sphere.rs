//! Spherical particle cloud rotating as a single rigid group.

use glam::{EulerRot, Mat4};
use rand::Rng;

use crate::params::ParticleSphereParams;

/// Uniform sample in `[-range / 2, range / 2]`
fn spread<R: Rng>(rng: &mut R, range: f32) -> f32 {
    range * (0.5 - rng.gen::<f32>())
}

/// Particle cloud on a fixed-radius shell
pub struct ParticleSphere {
    positions: Box<[f32]>,
    /// Accumulated group rotation about X and Y (radians)
    rotation: [f32; 2],
    params: ParticleSphereParams,
}

impl ParticleSphere {
    /// Scatter `params.count` points over the shell using two random angles
    pub fn new<R: Rng>(params: ParticleSphereParams, rng: &mut R) -> Self {
        let mut positions = vec![0.0f32; params.count * 3].into_boxed_slice();

        for point in positions.chunks_exact_mut(3) {
            let theta = spread(rng, params.angle_spread);
            let phi = spread(rng, params.angle_spread);

            point[0] = params.radius * theta.sin() * phi.cos();
            point[1] = params.radius * theta.sin() * phi.sin();
            point[2] = params.radius * theta.cos();
        }

        Self {
            positions,
            rotation: [0.0, 0.0],
            params,
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn rotation(&self) -> [f32; 2] {
        self.rotation
    }

    pub fn params(&self) -> &ParticleSphereParams {
        &self.params
    }

    /// Advance the group rotation by one frame of `delta_s` seconds
    pub fn update(&mut self, delta_s: f32) {
        self.rotation[0] -= delta_s / self.params.x_period_s;
        self.rotation[1] -= delta_s / self.params.y_period_s;
    }

    /// Group transform: static Z tilt wrapping the accumulated X/Y spin
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.params.group_tilt_z)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation[0], self.rotation[1], 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sphere() -> ParticleSphere {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleSphere::new(ParticleSphereParams::default(), &mut rng)
    }

    #[test]
    fn test_point_count() {
        assert_eq!(sphere().positions().len(), 3000 * 3);
    }

    #[test]
    fn test_points_lie_on_shell() {
        let sphere = sphere();

        for point in sphere.positions().chunks_exact(3) {
            let r = Vec3::new(point[0], point[1], point[2]).length();
            assert!((r - 20.0).abs() < 1e-3, "radius {}", r);
        }
    }

    #[test]
    fn test_same_seed_same_cloud() {
        assert_eq!(sphere().positions(), sphere().positions());
    }

    #[test]
    fn test_rotation_is_frame_rate_independent() {
        let mut fast = sphere();
        let mut slow = sphere();

        for _ in 0..60 {
            fast.update(1.0 / 60.0);
        }
        for _ in 0..30 {
            slow.update(1.0 / 30.0);
        }

        let [fx, fy] = fast.rotation();
        let [sx, sy] = slow.rotation();
        assert!((fx - sx).abs() < 1e-5);
        assert!((fy - sy).abs() < 1e-5);
        assert!((fx + 1.0 / 15.0).abs() < 1e-5);
        assert!((fy + 1.0 / 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_positions_untouched_by_update() {
        let mut sphere = sphere();
        let before = sphere.positions().to_vec();

        sphere.update(0.5);

        assert_eq!(before, sphere.positions().to_vec());
    }

    #[test]
    fn test_model_matrix_preserves_radius() {
        let mut sphere = sphere();
        sphere.update(3.0);

        let model = sphere.model_matrix();
        let p = model.transform_point3(Vec3::new(0.0, 20.0, 0.0));
        assert!((p.length() - 20.0).abs() < 1e-3);
    }
}
