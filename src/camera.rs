//! Fixed perspective camera looking down -Z at the content plane.

use glam::{Mat4, Vec3};

use crate::params::CameraParams;

/// Camera system producing the view-projection for the current viewport
pub struct CameraSystem {
    params: CameraParams,
    aspect: f32,
}

impl CameraSystem {
    pub fn new(params: CameraParams, aspect: f32) -> Self {
        Self { params, aspect }
    }

    /// Update the aspect ratio after a resize (zero-sized viewports are ignored)
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::from_array(self.params.position)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.params.fov_degrees.to_radians(),
            self.aspect,
            self.params.near_plane,
            self.params.far_plane,
        )
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
