//! Wave-deformed point lattice in the XZ plane.

use crate::params::{WaveGridParams, GRID_RESOLUTION};

/// Number of points in the wave grid
pub const GRID_POINTS: usize = GRID_RESOLUTION * GRID_RESOLUTION;

/// Point lattice whose heights follow two layered travelling waves
pub struct WaveGrid {
    /// Interleaved (x, y, z) triples, `3 * GRID_POINTS` long
    positions: Box<[f32]>,
    params: WaveGridParams,
}

impl WaveGrid {
    /// Create a centred lattice with every height at zero
    pub fn new(params: WaveGridParams) -> Self {
        let n = GRID_RESOLUTION;
        let half = (n / 2) as f32;
        let mut positions = vec![0.0f32; GRID_POINTS * 3].into_boxed_slice();

        for i in 0..n {
            for j in 0..n {
                let k = Self::offset(i, j);
                positions[k] = (i as f32 - half) * params.spacing;
                positions[k + 1] = 0.0;
                positions[k + 2] = (j as f32 - half) * params.spacing;
            }
        }

        Self { positions, params }
    }

    /// Buffer offset of lattice point (i, j)
    pub fn offset(i: usize, j: usize) -> usize {
        (i * GRID_RESOLUTION + j) * 3
    }

    /// Flat position buffer (x, y, z triples)
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Position of lattice point (i, j)
    pub fn point(&self, i: usize, j: usize) -> [f32; 3] {
        let k = Self::offset(i, j);
        [
            self.positions[k],
            self.positions[k + 1],
            self.positions[k + 2],
        ]
    }

    pub fn params(&self) -> &WaveGridParams {
        &self.params
    }

    /// Height of the wave surface at (x, z) for already-scaled time `t`
    pub fn height_at(params: &WaveGridParams, x: f32, z: f32, t: f32) -> f32 {
        let a = params.base_frequency;
        let b = params.detail_frequency;
        let td = t * params.detail_speed;

        let base = (x * a + t).sin() * (z * a + t).cos() * params.base_amplitude;
        let detail = (x * b + td).sin() * (z * b + td).sin() * params.detail_amplitude;

        base + detail - params.depth_offset
    }

    /// Recompute every height for the given elapsed time (seconds).
    ///
    /// Only Y is written; X and Z keep their lattice values.
    pub fn update(&mut self, elapsed_s: f32) {
        let t = elapsed_s * self.params.time_scale;

        for point in self.positions.chunks_exact_mut(3) {
            point[1] = Self::height_at(&self.params, point[0], point[2], t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_buffer_length() {
        let grid = WaveGrid::new(WaveGridParams::default());
        assert_eq!(grid.positions().len(), 3 * 50 * 50);
    }

    #[test]
    fn test_grid_lattice_is_centred() {
        let grid = WaveGrid::new(WaveGridParams::default());

        assert_eq!(grid.point(0, 0), [-50.0, 0.0, -50.0]);
        assert_eq!(grid.point(25, 25), [0.0, 0.0, 0.0]);
        assert_eq!(grid.point(49, 10), [48.0, 0.0, -30.0]);
    }

    #[test]
    fn test_centre_point_at_t0() {
        let mut grid = WaveGrid::new(WaveGridParams::default());
        grid.update(0.0);

        // sin(0)·cos(0)·2 + sin(0)·sin(0)·0.5 − 8
        assert_eq!(grid.point(25, 25)[1], -8.0);
    }

    #[test]
    fn test_heights_match_closed_form_at_t0() {
        let mut grid = WaveGrid::new(WaveGridParams::default());
        grid.update(0.0);

        for (i, j) in [(0, 0), (3, 41), (25, 7), (49, 49)] {
            let [x, y, z] = grid.point(i, j);
            let expected = (x * 0.15).sin() * (z * 0.15).cos() * 2.0
                + (x * 0.3).sin() * (z * 0.3).sin() * 0.5
                - 8.0;
            assert!(
                (y - expected).abs() < 1e-5,
                "point ({}, {}) y={} expected={}",
                i,
                j,
                y,
                expected
            );
        }
    }

    #[test]
    fn test_only_heights_change_between_frames() {
        let mut grid = WaveGrid::new(WaveGridParams::default());
        let initial: Vec<f32> = grid.positions().to_vec();

        grid.update(1.3);
        let first: Vec<f32> = grid.positions().to_vec();
        grid.update(7.9);

        for (k, point) in grid.positions().chunks_exact(3).enumerate() {
            assert_eq!(point[0], initial[k * 3]);
            assert_eq!(point[2], initial[k * 3 + 2]);
        }
        assert_ne!(first, grid.positions().to_vec());
        assert_eq!(grid.positions().len(), initial.len());
    }

    #[test]
    fn test_elapsed_time_is_scaled() {
        let params = WaveGridParams::default();
        let mut grid = WaveGrid::new(params.clone());
        grid.update(2.5);

        let [x, y, z] = grid.point(10, 30);
        assert!((y - WaveGrid::height_at(&params, x, z, 1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_heights_stay_in_band() {
        let mut grid = WaveGrid::new(WaveGridParams::default());

        for step in 0..20 {
            grid.update(step as f32 * 0.37);
            for point in grid.positions().chunks_exact(3) {
                assert!(point[1] >= -10.5 && point[1] <= -5.5);
            }
        }
    }
}
