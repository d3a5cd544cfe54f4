//! Distant star shell with per-star size and a slow pulse.

use std::f32::consts::TAU;

use rand::Rng;

use crate::params::StarFieldParams;

/// Convert HSL (all components in [0, 1]) to sRGB
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };

    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}

/// Star shell between `radius` and `radius + depth`
pub struct StarField {
    positions: Box<[f32]>,
    /// Per-star size factor
    sizes: Box<[f32]>,
    /// Per-star sRGB colour
    colors: Box<[[f32; 3]]>,
    /// Twinkle clock (seconds scaled by `speed`)
    time: f32,
    params: StarFieldParams,
}

impl StarField {
    pub fn new<R: Rng>(params: StarFieldParams, rng: &mut R) -> Self {
        let count = params.count;
        let mut positions = Vec::with_capacity(count * 3);
        let mut sizes = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        // Walk inwards from the outer edge so later stars sit deeper
        let mut r = params.radius + params.depth;
        let increment = params.depth / count.max(1) as f32;

        for i in 0..count {
            r -= increment * rng.gen::<f32>();

            let polar = (1.0 - rng.gen::<f32>() * 2.0).acos();
            let azimuth = rng.gen::<f32>() * TAU;

            // Y-up spherical coordinates
            positions.push(r * polar.sin() * azimuth.sin());
            positions.push(r * polar.cos());
            positions.push(r * polar.sin() * azimuth.cos());

            colors.push(hsl_to_rgb(
                i as f32 / count as f32,
                params.saturation,
                params.lightness,
            ));
            sizes.push((0.5 + 0.5 * rng.gen::<f32>()) * params.factor);
        }

        Self {
            positions: positions.into_boxed_slice(),
            sizes: sizes.into_boxed_slice(),
            colors: colors.into_boxed_slice(),
            time: 0.0,
            params,
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn params(&self) -> &StarFieldParams {
        &self.params
    }

    pub fn update(&mut self, delta_s: f32) {
        self.time += delta_s * self.params.speed;
    }
}
