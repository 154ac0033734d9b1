use glam::{Mat4, Vec3};

use crate::scene::transform::Transform;

/// Perspective camera.
///
/// Holds projection parameters plus cached view/projection matrices the
/// external renderer and the ground picker both read. Aspect changes go
/// through [`Scene::resize`](crate::scene::Scene::resize); there is no
/// hidden window-resize listener.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,

    // === Projection properties ===
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    // Cached matrices, renderer read-only
    projection_matrix: Mat4,
    view_matrix: Mat4,
    view_projection_matrix: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            transform: Transform::new(),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,

            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
        };

        camera.update_projection_matrix();
        camera
    }

    pub fn update_projection_matrix(&mut self) {
        // glam's perspective_rh targets the WGPU/Vulkan 0..1 depth range
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    /// Rebuilds the view matrix from the camera transform.
    pub fn update_view_matrix(&mut self) {
        self.transform.update_matrix();
        self.view_matrix = self.transform.matrix_as_mat4().inverse();
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Places the camera and aims it at `target`.
    pub fn look_at_from(&mut self, position: Vec3, target: Vec3) {
        self.transform.position = position;
        self.transform.look_at(target, Vec3::Y);
        self.update_view_matrix();
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection_matrix
    }
}
