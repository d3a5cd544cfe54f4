//! Rendering, camera and fog configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Clear colour behind everything (hex sRGB, slate 950)
    pub background: u32,

    /// Scanline band period (pixels)
    pub scanline_period_px: f32,

    /// Scanline tint (hex sRGB, green 900)
    pub scanline_color: u32,

    /// Scanline tint opacity over the lower half of each period
    pub scanline_opacity: f32,

    /// Film grain opacity
    pub grain_opacity: f32,

    /// Film grain cell size (pixels)
    pub grain_cell_px: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            background: 0x020617,
            scanline_period_px: 4.0,
            scanline_color: 0x14532d,
            scanline_opacity: 0.05,
            grain_opacity: 0.1,
            grain_cell_px: 1.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}

/// Fixed perspective camera
#[derive(Debug, Clone)]
pub struct CameraParams {
    /// Eye position (world units)
    pub position: [f32; 3],

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units), beyond the outer star shell
    pub far_plane: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            fov_degrees: 60.0,
            near_plane: 0.1,
            far_plane: 1000.0,
        }
    }
}

/// Linear distance fog
#[derive(Debug, Clone)]
pub struct FogParams {
    /// Fog colour (hex sRGB)
    pub color: u32,

    /// Distance where fog starts (world units)
    pub near: f32,

    /// Distance where fog is opaque (world units)
    pub far: f32,
}

impl Default for FogParams {
    fn default() -> Self {
        Self {
            color: 0x020617,
            near: 5.0,
            far: 25.0,
        }
    }
}

/// Convert one sRGB channel in [0, 1] to linear
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a hex sRGB colour (0xRRGGBB) to linear RGB components
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_linear_extremes() {
        assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);

        let white = hex_to_linear(0xffffff);
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hex_to_linear_channel_order() {
        let [r, g, b] = hex_to_linear(0x22c55e);

        // Green dominates, red is the weakest channel
        assert!(g > b);
        assert!(b > r);
        // Mid-grey sRGB 0x80 ≈ 0.216 linear
        let [grey, _, _] = hex_to_linear(0x808080);
        assert!((grey - 0.216).abs() < 0.01);
    }

    #[test]
    fn test_camera_sees_star_shell() {
        let camera = CameraParams::default();
        let stars = super::super::StarFieldParams::default();

        assert!(camera.far_plane > camera.position[2] + stars.radius + stars.depth);
    }
}
