//! Background scene parameters: wave grid, particle sphere, wireframe shape, stars.

use std::f32::consts::FRAC_PI_4;

/// Wave grid resolution (points per side). Fixed at compile time so the
/// point buffer length is known up front.
pub const GRID_RESOLUTION: usize = 50;

/// Procedural wave grid parameters
#[derive(Debug, Clone)]
pub struct WaveGridParams {
    /// Distance between neighbouring lattice points (world units)
    pub spacing: f32,

    /// Elapsed-time multiplier applied before evaluating the wave
    pub time_scale: f32,

    /// Base wave spatial frequency (radians per world unit)
    pub base_frequency: f32,

    /// Base wave height (world units)
    pub base_amplitude: f32,

    /// Detail wave spatial frequency (radians per world unit)
    pub detail_frequency: f32,

    /// Detail wave time multiplier (relative to the base wave)
    pub detail_speed: f32,

    /// Detail wave height (world units)
    pub detail_amplitude: f32,

    /// Vertical offset below the content plane (world units, subtracted)
    pub depth_offset: f32,

    /// Point size (world-scaled, perspective attenuated)
    pub point_size: f32,

    /// Point colour (hex sRGB)
    pub color: u32,

    pub opacity: f32,
}

impl Default for WaveGridParams {
    fn default() -> Self {
        Self {
            spacing: 2.0,
            time_scale: 0.4,
            base_frequency: 0.15,
            base_amplitude: 2.0,
            detail_frequency: 0.3,
            detail_speed: 1.5,
            detail_amplitude: 0.5,
            depth_offset: 8.0,
            point_size: 0.12,
            color: 0x10b981, // Emerald 500
            opacity: 0.3,
        }
    }
}

/// Spherical particle cloud parameters
#[derive(Debug, Clone)]
pub struct ParticleSphereParams {
    pub count: usize,

    /// Shell radius (world units)
    pub radius: f32,

    /// Spread of both sampled angles (consumed as radians, centred on 0)
    pub angle_spread: f32,

    /// Rotation about X per second of frame delta is `-1 / x_period_s`
    pub x_period_s: f32,

    /// Rotation about Y per second of frame delta is `-1 / y_period_s`
    pub y_period_s: f32,

    /// Static tilt of the enclosing group about Z (radians)
    pub group_tilt_z: f32,

    pub point_size: f32,
    pub color: u32,
    pub opacity: f32,
}

impl Default for ParticleSphereParams {
    fn default() -> Self {
        Self {
            count: 3000,
            radius: 20.0,
            angle_spread: 360.0,
            x_period_s: 15.0,
            y_period_s: 20.0,
            group_tilt_z: FRAC_PI_4,
            point_size: 0.05,
            color: 0x22c55e, // Green 500
            opacity: 0.6,
        }
    }
}

/// Floating/hover wrapper parameters
#[derive(Debug, Clone)]
pub struct FloatParams {
    /// Animation speed multiplier
    pub speed: f32,

    /// Scale of the wobble rotation
    pub rotation_intensity: f32,

    /// Scale of the vertical drift
    pub float_intensity: f32,

    /// Vertical drift range mapped from the raw ±0.1 sine output
    pub floating_range: (f32, f32),
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            speed: 2.0,
            rotation_intensity: 0.5,
            float_intensity: 1.0,
            floating_range: (-0.1, 0.1),
        }
    }
}

/// Rotating wireframe icosahedron parameters
#[derive(Debug, Clone)]
pub struct ShapeParams {
    /// Circumscribed radius (world units)
    pub radius: f32,

    /// Rest position of the mesh (world units)
    pub position: [f32; 3],

    /// Rotation rate about X (radians per second)
    pub spin_x: f32,

    /// Rotation rate about Y (radians per second)
    pub spin_y: f32,

    /// Vertical bob amplitude (world units)
    pub bob_amplitude: f32,

    pub float: FloatParams,

    pub color: u32,
    pub emissive_intensity: f32,
    pub ambient_intensity: f32,
    pub opacity: f32,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            radius: 2.0,
            position: [6.0, 0.0, -5.0],
            spin_x: 0.2,
            spin_y: 0.3,
            bob_amplitude: 0.5,
            float: FloatParams::default(),
            color: 0x22c55e,
            emissive_intensity: 0.5,
            ambient_intensity: 0.5,
            opacity: 0.3,
        }
    }
}

/// Distant star shell parameters
#[derive(Debug, Clone)]
pub struct StarFieldParams {
    /// Inner radius of the shell (world units)
    pub radius: f32,

    /// Shell thickness (world units)
    pub depth: f32,

    pub count: usize,

    /// Base size factor (pixels at unit distance, before the pulse)
    pub factor: f32,

    /// Colour saturation (0 = grey)
    pub saturation: f32,

    /// Colour lightness
    pub lightness: f32,

    /// Twinkle speed multiplier applied to frame delta
    pub speed: f32,

    /// Fade stars towards their edge
    pub fade: bool,
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 5000,
            factor: 4.0,
            saturation: 0.0,
            lightness: 0.9,
            speed: 1.0,
            fade: true,
        }
    }
}
